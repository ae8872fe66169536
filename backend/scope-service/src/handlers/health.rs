/// Health and service-info handlers
///
/// There is no database or cache behind this service; readiness reports on
/// configuration alone. Readiness polls never call the AI provider.
use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Serialize;
use std::collections::HashMap;

use crate::config::Settings;
use crate::models::ServiceInfo;

#[derive(Serialize, Clone)]
#[serde(rename_all = "lowercase")]
enum ComponentStatus {
    Healthy,
    Unhealthy,
}

#[derive(Serialize)]
struct ComponentCheck {
    status: ComponentStatus,
    message: String,
}

#[derive(Serialize)]
struct ReadinessResponse {
    ready: bool,
    checks: HashMap<String, ComponentCheck>,
    timestamp: String,
}

pub async fn service_info(settings: web::Data<Settings>) -> HttpResponse {
    HttpResponse::Ok().json(ServiceInfo {
        service: settings.server.service_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: settings.server.environment.clone(),
        message: "Welcome! API is operational.".to_string(),
        api_prefix: "/api/v1".to_string(),
        docs_url: "/swagger-ui/".to_string(),
    })
}

pub async fn health_summary(settings: web::Data<Settings>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": settings.server.service_name,
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn liveness_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"alive": true}))
}

pub async fn readiness_summary(settings: web::Data<Settings>) -> HttpResponse {
    let mut checks = HashMap::new();
    let mut ready = true;

    let configured = !settings.gemini.api_key.trim().is_empty();
    let gemini_check = if configured {
        ComponentCheck {
            status: ComponentStatus::Healthy,
            message: format!("Gemini client configured for model {}", settings.gemini.model_name),
        }
    } else {
        ready = false;
        ComponentCheck {
            status: ComponentStatus::Unhealthy,
            message: "Gemini API key missing".to_string(),
        }
    };
    checks.insert("gemini".to_string(), gemini_check);

    let response = ReadinessResponse {
        ready,
        checks,
        timestamp: Utc::now().to_rfc3339(),
    };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
