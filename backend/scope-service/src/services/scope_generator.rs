//! Scope generation service
//!
//! Builds the consultant prompt from the validated request and runs it
//! through the completion provider. Prompt construction is deterministic:
//! the same input always produces the same prompt.

use std::sync::Arc;
use tracing::{error, info};

use super::gemini::CompletionProvider;
use crate::error::{AppError, Result};
use crate::models::GenerateScopeRequest;

pub struct ScopeGenerator {
    provider: Arc<dyn CompletionProvider>,
}

impl ScopeGenerator {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// Generate an MVP scope document for the given idea.
    pub async fn generate(&self, request: &GenerateScopeRequest) -> Result<String> {
        let prompt = build_prompt(request);

        info!(
            provider = self.provider.name(),
            industry = %request.industry,
            idea_len = request.idea.len(),
            "Generating MVP scope document"
        );

        let text = self.provider.complete(&prompt).await?;

        if text.trim().is_empty() {
            error!("Completion provider returned blank scope text");
            return Err(AppError::Internal("AI provider returned no content".into()));
        }

        info!(content_len = text.len(), "MVP scope document generated");
        Ok(text)
    }
}

/// Section headings every generated scope document is asked to contain.
pub const SCOPE_SECTIONS: [&str; 10] = [
    "Executive Summary",
    "Problem Statement & Proposed Solution",
    "Target Audience & User Personas",
    "Core MVP Features (Prioritized)",
    "Key User Stories (for P0 Features)",
    "Technology Stack Recommendation (High-Level)",
    "Monetization Strategy (Initial Thoughts)",
    "MVP Development Timeline (Estimated Phases)",
    "Key Metrics for Success (KPIs for MVP)",
    "Potential Risks & Mitigation Strategies",
];

/// Build the completion prompt for an MVP scope document.
pub fn build_prompt(request: &GenerateScopeRequest) -> String {
    let mut prompt = String::with_capacity(2048);

    prompt.push_str(
        "You are an expert startup consultant and product manager. \
         Generate a comprehensive, actionable, and professionally formatted \
         MVP (Minimum Viable Product) scope document for the following startup idea:\n\n",
    );
    prompt.push_str(&format!("**Industry:** {}\n", request.industry));
    prompt.push_str(&format!("**Core Idea:** {}\n\n", request.idea));
    prompt.push_str(
        "Structure the document with clear, distinct sections. Use markdown \
         headers (## Section Title) and bullet points where appropriate.\n\n\
         Include the following sections in detail:\n\n",
    );

    let guidance = [
        "A concise overview of the product, its core value proposition, and target audience.",
        "Define the problem this startup solves and how the MVP addresses it.",
        "Identify the primary target users and describe 1-2 key user personas \
         (name, role, goals, pain points relevant to the product).",
        "List the essential MVP features with a brief description each, prioritized \
         as P0 (must-have), P1 (should-have for V1), or P2 (nice-to-have/future).",
        "Write 3-5 user stories for the P0 features in the format: \"As a [user type], \
         I want to [perform an action] so that I can [achieve a benefit].\"",
        "Suggest a suitable stack (frontend, backend, database, key cloud services/APIs) \
         with brief justification for specific choices.",
        "Outline 1-2 potential revenue models (subscription, freemium, one-time \
         purchase, transactional fees).",
        "A high-level estimated timeline broken into logical phases or sprints.",
        "Define 3-5 measurable KPIs to evaluate the MVP post-launch (acquisition \
         rate, daily active users, conversion rate, retention rate).",
        "Identify 2-3 significant risks (technical, market, operational) with a \
         brief mitigation strategy for each.",
    ];

    for (i, (section, detail)) in SCOPE_SECTIONS.iter().zip(guidance.iter()).enumerate() {
        prompt.push_str(&format!("## {}. {}\n   - {}\n\n", i + 1, section, detail));
    }

    prompt.push_str(
        "Ensure the output is well-organized, easy to read, and provides practical, \
         actionable insights.",
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerateScopeRequest {
        GenerateScopeRequest {
            idea: "An AI-powered fitness coaching app with personalized workout plans".to_string(),
            industry: "Health & Wellness Technology".to_string(),
        }
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(build_prompt(&request()), build_prompt(&request()));
    }

    #[test]
    fn test_prompt_embeds_input_fields() {
        let prompt = build_prompt(&request());
        assert!(prompt.contains("An AI-powered fitness coaching app"));
        assert!(prompt.contains("Health & Wellness Technology"));
    }

    #[test]
    fn test_prompt_lists_all_sections() {
        let prompt = build_prompt(&request());
        for section in SCOPE_SECTIONS {
            assert!(prompt.contains(section), "missing section: {}", section);
        }
        assert_eq!(prompt.matches("\n## ").count(), SCOPE_SECTIONS.len());
    }
}
