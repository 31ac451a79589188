use thiserror::Error;

#[derive(Debug, Error)]
pub enum AiError {
    #[error("AI features are disabled")]
    Disabled,

    #[error("AI provider is not configured: {0}")]
    NotConfigured(String),

    #[error("invalid job input: {0}")]
    InvalidInput(String),

    #[error("request to AI provider failed: {0}")]
    Transport(String),

    #[error("AI provider rejected credentials: {0}")]
    Auth(String),

    #[error("AI provider rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("AI provider returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("invalid response from AI provider: {0}")]
    InvalidResponse(String),
}
