pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod services;
pub mod validators;

// Re-export commonly used types
pub use config::Settings;
pub use error::{AppError, Result};
pub use models::{GenerateScopeRequest, ScopeResponse};
pub use services::{CompletionProvider, GeminiClient, ScopeGenerator};
