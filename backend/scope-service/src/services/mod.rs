pub mod gemini;
pub mod scope_generator;

pub use gemini::{CompletionProvider, GeminiClient, GeminiError};
pub use scope_generator::ScopeGenerator;
