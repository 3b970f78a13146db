//! Generative Model Port - Interface for the test-case-writing LLM.
//!
//! The generator depends on this trait, not on any concrete provider, so
//! the credential-present branch is testable by injection and the
//! credential-absent branch is represented by the absence of an
//! implementation (`Option<Arc<dyn GenerativeModel>>`), never by an error.

use async_trait::async_trait;
use thiserror::Error;

/// Port for the generative AI service.
///
/// Implementations connect to an external model API and return the raw
/// text reply. Interpreting that reply (JSON array extraction, repair,
/// validation) is the caller's job: the port promises text, not JSON.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Sends one prompt and returns the model's raw text reply.
    async fn generate(&self, prompt: &str) -> Result<String, ModelError>;

    /// Provider and model identifiers for logging.
    fn model_info(&self) -> ModelInfo;
}

/// Provider identification for logs and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelInfo {
    /// Provider name (e.g. "gemini", "mock").
    pub provider: String,
    /// Model identifier (e.g. "gemini-1.5-pro").
    pub model: String,
}

impl ModelInfo {
    /// Creates new model info.
    pub fn new(provider: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            model: model.into(),
        }
    }
}

/// Generative model call errors.
///
/// All variants abort the current generation request; none of them trigger
/// fallback generation, which is reserved for the unconfigured-model branch
/// and for malformed-but-received replies.
#[derive(Debug, Clone, Error)]
pub enum ModelError {
    /// Rate limited by the provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },

    /// API key rejected.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Provider returned a server-side error.
    #[error("provider unavailable: {message}")]
    Unavailable { message: String },

    /// Request could not be transported.
    #[error("network error: {0}")]
    Network(String),

    /// Request exceeded the configured timeout.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u32 },

    /// Provider rejected the request shape.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Reply arrived but carried no text content.
    #[error("empty reply from model")]
    EmptyReply,
}

impl ModelError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// True when retrying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ModelError::RateLimited { .. }
                | ModelError::Unavailable { .. }
                | ModelError::Network(_)
                | ModelError::Timeout { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_classification() {
        assert!(ModelError::RateLimited { retry_after_secs: 5 }.is_retryable());
        assert!(ModelError::unavailable("503").is_retryable());
        assert!(ModelError::network("reset").is_retryable());
        assert!(ModelError::Timeout { timeout_secs: 60 }.is_retryable());

        assert!(!ModelError::AuthenticationFailed.is_retryable());
        assert!(!ModelError::InvalidRequest("bad".into()).is_retryable());
        assert!(!ModelError::EmptyReply.is_retryable());
    }

    #[test]
    fn displays_are_stable() {
        assert_eq!(
            ModelError::RateLimited { retry_after_secs: 30 }.to_string(),
            "rate limited: retry after 30s"
        );
        assert_eq!(ModelError::EmptyReply.to_string(), "empty reply from model");
    }

    #[test]
    fn generative_model_is_object_safe() {
        fn check<T: GenerativeModel + ?Sized>() {}
        check::<dyn GenerativeModel>();
    }
}
