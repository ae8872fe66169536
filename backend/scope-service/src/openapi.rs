/// OpenAPI documentation for Aura Scope Service
use utoipa::OpenApi;

use crate::models::{GenerateScopeRequest, ScopeResponse, ServiceInfo};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Aura Scope Service API",
        version = "0.2.0",
        description = "API backend for generating Minimum Viable Product (MVP) scope documents for startup ideas using Google's Gemini large language model. Accepts an idea and its target industry, returns a structured markdown scope document covering features, personas, timeline, KPIs, and risks.",
        contact(
            name = "Aura Team",
            email = "team@aura.dev"
        ),
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8000", description = "Development server"),
    ),
    tags(
        (name = "health", description = "Service health checks"),
        (name = "scope", description = "AI-driven MVP scope document generation"),
    ),
    components(schemas(GenerateScopeRequest, ScopeResponse, ServiceInfo)),
)]
pub struct ApiDoc;
