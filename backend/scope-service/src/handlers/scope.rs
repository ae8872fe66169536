/// Scope generation handler - the single business endpoint of this service
use actix_web::{web, HttpResponse};
use std::sync::Arc;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::{GenerateScopeRequest, ScopeResponse};
use crate::services::ScopeGenerator;
use crate::validators;

/// Generate an MVP scope document for a startup idea.
///
/// Validation failures never reach the AI provider; the upstream call is
/// made exactly once per accepted request.
pub async fn generate_scope(
    generator: web::Data<Arc<ScopeGenerator>>,
    payload: web::Json<GenerateScopeRequest>,
) -> Result<HttpResponse> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    if !validators::has_content(&payload.idea) {
        return Err(AppError::Validation("idea must not be blank".into()));
    }
    if !validators::has_content(&payload.industry) {
        return Err(AppError::Validation("industry must not be blank".into()));
    }

    let generated_scope = generator.generate(&payload).await?;

    Ok(HttpResponse::Ok().json(ScopeResponse { generated_scope }))
}
