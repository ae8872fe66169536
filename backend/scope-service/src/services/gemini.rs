//! Gemini completion client
//!
//! Thin adapter over the Gemini `generateContent` REST API. Each call is a
//! single attempt; failures are classified and handed straight back to the
//! caller. The generation config and safety settings ride along with every
//! request.

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::GeminiSettings;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Result type for completion calls
pub type Result<T> = std::result::Result<T, GeminiError>;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("Gemini API authentication failed")]
    Unauthorized,

    #[error("Gemini API quota exhausted")]
    RateLimited,

    #[error("Gemini request timed out")]
    Timeout,

    #[error("Gemini request failed: {0}")]
    Request(String),

    #[error("Gemini API error ({0}): {1}")]
    Api(u16, String),

    #[error("Prompt blocked by safety policy: {0}")]
    Blocked(String),

    #[error("Failed to parse Gemini response: {0}")]
    ResponseParse(String),

    #[error("Gemini returned an empty completion")]
    EmptyCompletion,
}

/// Seam between the HTTP layer and the concrete AI provider
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate completion text from a prompt
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Get provider name
    fn name(&self) -> &str;
}

// ============================================
// Wire types (camelCase per the Gemini REST API)
// ============================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
    safety_settings: Vec<SafetySetting>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: u32,
    max_output_tokens: u32,
    candidate_count: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

fn default_safety_settings() -> Vec<SafetySetting> {
    [
        "HARM_CATEGORY_HARASSMENT",
        "HARM_CATEGORY_HATE_SPEECH",
        "HARM_CATEGORY_SEXUALLY_EXPLICIT",
        "HARM_CATEGORY_DANGEROUS_CONTENT",
    ]
    .iter()
    .map(|category| SafetySetting {
        category,
        threshold: "BLOCK_MEDIUM_AND_ABOVE",
    })
    .collect()
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

// ============================================
// Gemini client
// ============================================

pub struct GeminiClient {
    client: HttpClient,
    api_key: String,
    model: String,
    generation_config: GenerationConfig,
}

impl GeminiClient {
    pub fn new(settings: &GeminiSettings) -> Self {
        let client = HttpClient::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key: settings.api_key.clone(),
            model: settings.model_name.clone(),
            generation_config: GenerationConfig {
                temperature: settings.temperature,
                top_p: settings.top_p,
                top_k: settings.top_k,
                max_output_tokens: settings.max_output_tokens,
                candidate_count: settings.candidate_count,
            },
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", GEMINI_API_BASE, self.model)
    }
}

#[async_trait]
impl CompletionProvider for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: self.generation_config.clone(),
            safety_settings: default_safety_settings(),
        };

        debug!(model = %self.model, prompt_len = prompt.len(), "Sending Gemini completion request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeminiError::Timeout
                } else {
                    GeminiError::Request(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Gemini API call failed");
            return Err(classify_http_failure(status, error_text));
        }

        let result: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::ResponseParse(e.to_string()))?;

        extract_text(result)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

fn classify_http_failure(status: StatusCode, body: String) -> GeminiError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GeminiError::Unauthorized,
        StatusCode::TOO_MANY_REQUESTS => GeminiError::RateLimited,
        _ => GeminiError::Api(status.as_u16(), body),
    }
}

/// Pull the completion text out of a parsed response.
///
/// No candidates means the prompt was blocked; the block reason (when the API
/// reports one) is preserved so callers can tell the user why.
fn extract_text(response: GenerateContentResponse) -> Result<String> {
    if response.candidates.is_empty() {
        let reason = response
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .unwrap_or_else(|| "unspecified".to_string());
        return Err(GeminiError::Blocked(reason));
    }

    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| {
            c.parts
                .into_iter()
                .map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(GeminiError::EmptyCompletion);
    }

    Ok(text)
}
