//! Configuration management for Scope Service
//!
//! Loads settings from environment variables, with a `.env` file for local
//! development. `GEMINI_API_KEY` is required and checked before the server
//! binds; everything else carries a default.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::env;

/// Application settings
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub gemini: GeminiSettings,
}

/// HTTP server settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub environment: String,
    /// Comma-separated origin list; `*` allows any origin
    pub cors_allowed_origins: String,
    pub service_name: String,
}

/// Gemini API settings
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    pub api_key: String,
    pub model_name: String,
    pub timeout_secs: u64,
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
    pub candidate_count: u32,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerSettings::from_env()?,
            gemini: GeminiSettings::from_env()?,
        })
    }
}

impl ServerSettings {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(8000),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "*".to_string()),
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| "scope-service".to_string()),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl GeminiSettings {
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .context("GEMINI_API_KEY must be set; scope generation cannot run without it")?;
        if api_key.trim().is_empty() {
            bail!("GEMINI_API_KEY is set but empty");
        }

        Ok(Self {
            api_key,
            model_name: env::var("GEMINI_MODEL_NAME")
                .unwrap_or_else(|_| "gemini-1.5-flash-latest".to_string()),
            timeout_secs: env::var("GEMINI_TIMEOUT_SECS")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .unwrap_or(60),
            temperature: env::var("GEMINI_TEMPERATURE")
                .unwrap_or_else(|_| "0.6".to_string())
                .parse()
                .unwrap_or(0.6),
            top_p: env::var("GEMINI_TOP_P")
                .unwrap_or_else(|_| "0.95".to_string())
                .parse()
                .unwrap_or(0.95),
            top_k: env::var("GEMINI_TOP_K")
                .unwrap_or_else(|_| "40".to_string())
                .parse()
                .unwrap_or(40),
            max_output_tokens: env::var("GEMINI_MAX_OUTPUT_TOKENS")
                .unwrap_or_else(|_| "4096".to_string())
                .parse()
                .unwrap_or(4096),
            candidate_count: env::var("GEMINI_CANDIDATE_COUNT")
                .unwrap_or_else(|_| "1".to_string())
                .parse()
                .unwrap_or(1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment variables are process-wide, so the missing-key and
    // defaults assertions run inside one test to avoid interleaving.
    #[test]
    fn test_api_key_required_then_defaults() {
        env::remove_var("GEMINI_API_KEY");
        assert!(GeminiSettings::from_env().is_err());

        env::set_var("GEMINI_API_KEY", "   ");
        assert!(GeminiSettings::from_env().is_err());

        env::set_var("GEMINI_API_KEY", "test-key");
        let gemini = GeminiSettings::from_env().unwrap();
        assert_eq!(gemini.model_name, "gemini-1.5-flash-latest");
        assert_eq!(gemini.timeout_secs, 60);
        assert_eq!(gemini.max_output_tokens, 4096);
        assert_eq!(gemini.candidate_count, 1);

        let server = ServerSettings::from_env().unwrap();
        assert_eq!(server.port, 8000);
        assert_eq!(server.environment, "development");
        assert_eq!(server.bind_address(), "0.0.0.0:8000");
    }
}
