use crate::error::AiError;

/// Text-in, text-out access to a generative model.
///
/// Implemented by [`crate::GeminiClient`]; tests substitute canned replies.
pub trait GenerativeModel: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String, AiError>;
}
