//! Request and response payloads for the scope-generation API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Input payload for scope generation
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct GenerateScopeRequest {
    /// The core startup idea description
    #[validate(length(
        min = 10,
        max = 1000,
        message = "idea must be between 10 and 1000 characters"
    ))]
    #[schema(
        example = "A mobile application that connects local artisans with buyers interested in unique, handmade crafts"
    )]
    pub idea: String,

    /// The target industry for the idea
    #[validate(length(
        min = 3,
        max = 100,
        message = "industry must be between 3 and 100 characters"
    ))]
    #[schema(example = "E-commerce and Local Artisan Marketplace")]
    pub industry: String,
}

/// Output payload containing the generated MVP scope document
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ScopeResponse {
    /// The AI-generated MVP scope document (markdown)
    pub generated_scope: String,
}

/// Payload returned by the root endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub environment: String,
    pub message: String,
    pub api_prefix: String,
    pub docs_url: String,
}
