//! AI provider configuration
//!
//! Unlike most credentials, the Gemini key is optional by design: without
//! one the generator runs the deterministic fallback path, so a missing
//! key must be representable without failing validation.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// AI provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Gemini API key; absence selects fallback generation
    pub gemini_api_key: Option<String>,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum retries on transient failures
    #[serde(default = "default_retries")]
    pub max_retries: u32,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if a Gemini credential is configured
    pub fn is_configured(&self) -> bool {
        self.gemini_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate AI configuration
    ///
    /// A missing key is valid (demo mode); a present-but-empty key is a
    /// configuration mistake and rejected.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(key) = &self.gemini_api_key {
            if key.trim().is_empty() {
                return Err(ValidationError::EmptyCredential("GEMINI_API_KEY"));
            }
        }
        if self.model.trim().is_empty() {
            return Err(ValidationError::MissingRequired("AI model identifier"));
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            model: default_model(),
            timeout_secs: default_timeout(),
            max_retries: default_retries(),
        }
    }
}

fn default_model() -> String {
    "gemini-1.5-pro".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_retries() -> u32 {
    2
}
