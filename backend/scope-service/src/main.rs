//! Aura Scope Service
//!
//! A stateless HTTP service that accepts a startup idea and generates an MVP
//! scope document through the Gemini API. A single business endpoint plus a
//! health and docs surface; all state is per-request.

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use scope_service::handlers;
use scope_service::openapi::ApiDoc;
use scope_service::services::{CompletionProvider, GeminiClient, ScopeGenerator};
use std::io;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

async fn openapi_json(doc: web::Data<utoipa::openapi::OpenApi>) -> actix_web::Result<HttpResponse> {
    let body = serde_json::to_string(&*doc).map_err(|e| {
        tracing::error!("OpenAPI serialization failed: {}", e);
        actix_web::error::ErrorInternalServerError("OpenAPI serialization error")
    })?;

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(body))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Support container healthchecks via CLI subcommand: `healthcheck-http`
    {
        let mut args = std::env::args();
        let _bin = args.next();
        if let Some(cmd) = args.next() {
            if cmd == "healthcheck" || cmd == "healthcheck-http" {
                let port = std::env::var("PORT").unwrap_or_else(|_| "8000".to_string());
                let url = format!("http://127.0.0.1:{}/api/v1/health", port);
                match reqwest::Client::new().get(&url).send().await {
                    Ok(resp) if resp.status().is_success() => return Ok(()),
                    Ok(resp) => {
                        eprintln!("healthcheck HTTP status: {}", resp.status());
                        return Err(io::Error::new(io::ErrorKind::Other, "healthcheck failed"));
                    }
                    Err(e) => {
                        eprintln!("healthcheck HTTP error: {}", e);
                        return Err(io::Error::new(io::ErrorKind::Other, "healthcheck error"));
                    }
                }
            }
        }
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; a missing API key must stop the process before it
    // accepts traffic
    let settings = match scope_service::Settings::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {:#}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting scope-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        environment = %settings.server.environment,
        model = %settings.gemini.model_name,
        timeout_secs = settings.gemini.timeout_secs,
        "Configuration loaded"
    );

    // Wire the Gemini client behind the provider seam
    let provider: Arc<dyn CompletionProvider> = Arc::new(GeminiClient::new(&settings.gemini));
    let generator = Arc::new(ScopeGenerator::new(provider));

    let bind_address = settings.server.bind_address();
    tracing::info!("Listening on http://{}", bind_address);

    let server = HttpServer::new(move || {
        // Build CORS configuration
        let mut cors = Cors::default();
        for origin in settings.server.cors_allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        let openapi_doc = ApiDoc::openapi();

        App::new()
            .app_data(web::Data::new(openapi_doc.clone()))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api/v1/openapi.json", openapi_doc.clone()),
            )
            .route("/api/v1/openapi.json", web::get().to(openapi_json))
            .app_data(web::Data::new(settings.clone()))
            .app_data(web::Data::new(generator.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            // Service info and health endpoints
            .route("/", web::get().to(handlers::service_info))
            .route("/api/v1/health", web::get().to(handlers::health_summary))
            .route("/api/v1/health/live", web::get().to(handlers::liveness_check))
            .route("/api/v1/health/ready", web::get().to(handlers::readiness_summary))
            .service(
                web::scope("/api/v1").route(
                    "/generate-scope",
                    web::post().to(handlers::generate_scope),
                ),
            )
    })
    .bind(&bind_address)?
    .workers(4)
    .run();

    server.await
}
