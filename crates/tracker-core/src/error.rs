//! Error Types

use thiserror::Error;

/// Result type alias for LLM operations
pub type Result<T> = std::result::Result<T, LlmError>;

/// Errors raised while talking to a text-generation provider
#[derive(Error, Debug)]
pub enum LlmError {
    /// Provider returned an error response
    #[error("Provider error: {0}")]
    Provider(String),

    /// Provider unreachable or not responding
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// Response body could not be interpreted
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rate limited
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LlmError {
    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            LlmError::Provider(msg) => format!("The AI service encountered an error: {}", msg),
            LlmError::ProviderUnavailable(_) => {
                "The AI service is currently unavailable. Please try again.".into()
            }
            LlmError::RateLimited(_) => {
                "You've made too many requests. Please wait a moment.".into()
            }
            LlmError::Auth(_) => "Authentication failed. Please check your API key.".into(),
            LlmError::Config(msg) => format!("The AI service is misconfigured: {}", msg),
            _ => "An unexpected error occurred.".into(),
        }
    }
}
