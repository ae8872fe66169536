//! Error types for Scope Service
//!
//! Every failure surfaces at the request boundary as an `AppError`, which
//! actix converts to a JSON body of the form `{"error": ..., "status": ...}`.
//! Upstream failures are reworded so that no key material or raw provider
//! output reaches the caller.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

use crate::services::gemini::GeminiError;

/// Result type for scope-service operations
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Request payload failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// The AI provider refused to generate for this input
    #[error("Content blocked by AI safety policy ({0}); consider rephrasing the idea")]
    ContentBlocked(String),

    /// The AI provider could not be reached or refused the call
    #[error("AI service unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::ContentBlocked(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        HttpResponse::build(status).json(serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }))
    }
}

impl From<GeminiError> for AppError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::Unauthorized => {
                tracing::error!("Gemini rejected the API key; check GEMINI_API_KEY");
                AppError::UpstreamUnavailable("authentication with the AI provider failed".into())
            }
            GeminiError::RateLimited => {
                tracing::warn!("Gemini quota exhausted");
                AppError::UpstreamUnavailable("AI provider quota exceeded".into())
            }
            GeminiError::Timeout => {
                tracing::warn!("Gemini request timed out");
                AppError::UpstreamUnavailable("AI provider did not respond in time".into())
            }
            GeminiError::Request(e) => {
                tracing::error!("Gemini transport failure: {}", e);
                AppError::UpstreamUnavailable("could not reach the AI provider".into())
            }
            GeminiError::Api(status, body) => {
                tracing::error!(status, "Gemini API error: {}", body);
                AppError::UpstreamUnavailable("AI provider returned an error".into())
            }
            GeminiError::Blocked(reason) => {
                tracing::warn!("Gemini blocked the prompt: {}", reason);
                AppError::ContentBlocked(reason)
            }
            GeminiError::ResponseParse(e) => {
                tracing::error!("Malformed Gemini response: {}", e);
                AppError::Internal("AI provider returned a malformed response".into())
            }
            GeminiError::EmptyCompletion => {
                tracing::error!("Gemini returned an empty completion");
                AppError::Internal("AI provider returned no content".into())
            }
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
