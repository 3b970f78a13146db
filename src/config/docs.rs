//! Document service configuration
//!
//! The Google Docs key is optional: without one the fetcher serves the
//! fixed demo requirements block for every valid document link.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Document service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DocsConfig {
    /// Google API key; absence selects the demo fallback
    pub google_api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl DocsConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if a Google credential is configured
    pub fn is_configured(&self) -> bool {
        self.google_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate document service configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(key) = &self.google_api_key {
            if key.trim().is_empty() {
                return Err(ValidationError::EmptyCredential("GOOGLE_API_KEY"));
            }
        }
        Ok(())
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            google_api_key: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docs_config_defaults() {
        let config = DocsConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert!(!config.is_configured());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_key_is_rejected() {
        let config = DocsConfig {
            google_api_key: Some(String::new()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_configured_key_is_detected() {
        let config = DocsConfig {
            google_api_key: Some("AIza-docs".to_string()),
            ..Default::default()
        };
        assert!(config.is_configured());
    }
}
