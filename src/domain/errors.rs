//! Pipeline error taxonomy.
//!
//! Only conditions that must abort the current request live here. The
//! absorbed irregularities (empty input, unreadable document content,
//! missing credentials, unparseable model output) are handled in place
//! (empty list, diagnostic sentence, demo text, fallback generation) and
//! deliberately have no variant.

use thiserror::Error;

/// Fatal errors surfaced to the caller of the generation pipeline.
#[derive(Debug, Clone, Error)]
pub enum PipelineError {
    /// Uploaded file has a mime type outside {pdf, doc, docx}.
    #[error("unsupported file type: {mime_type}")]
    UnsupportedFileType { mime_type: String },

    /// Document link does not match the expected `/document/d/<id>` shape.
    #[error("invalid document reference: {url}")]
    InvalidReference { url: String },

    /// Document service was reachable but the fetch failed
    /// (not-found, permission denied, network error).
    #[error("remote document fetch failed: {message}")]
    RemoteFetchFailed { message: String },

    /// AI service call itself failed (network, auth, quota).
    #[error("test case generation failed: {message}")]
    GenerationFailed { message: String },

    /// Export payload failed shape validation.
    #[error("invalid export payload: {message}")]
    InvalidExport { message: String },
}

impl PipelineError {
    /// Creates an unsupported-file-type error.
    pub fn unsupported_file_type(mime_type: impl Into<String>) -> Self {
        Self::UnsupportedFileType {
            mime_type: mime_type.into(),
        }
    }

    /// Creates an invalid-reference error.
    pub fn invalid_reference(url: impl Into<String>) -> Self {
        Self::InvalidReference { url: url.into() }
    }

    /// Creates a remote-fetch-failed error.
    pub fn remote_fetch_failed(message: impl Into<String>) -> Self {
        Self::RemoteFetchFailed {
            message: message.into(),
        }
    }

    /// Creates a generation-failed error.
    pub fn generation_failed(message: impl Into<String>) -> Self {
        Self::GenerationFailed {
            message: message.into(),
        }
    }

    /// Creates an invalid-export error.
    pub fn invalid_export(message: impl Into<String>) -> Self {
        Self::InvalidExport {
            message: message.into(),
        }
    }

    /// True when the condition was caused by the caller's input
    /// (4xx-equivalent) rather than an upstream failure (5xx-equivalent).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PipelineError::UnsupportedFileType { .. }
                | PipelineError::InvalidReference { .. }
                | PipelineError::InvalidExport { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_error_classification() {
        assert!(PipelineError::unsupported_file_type("text/plain").is_client_error());
        assert!(PipelineError::invalid_reference("https://x").is_client_error());
        assert!(PipelineError::invalid_export("bad row").is_client_error());

        assert!(!PipelineError::remote_fetch_failed("404").is_client_error());
        assert!(!PipelineError::generation_failed("quota").is_client_error());
    }

    #[test]
    fn displays_include_context() {
        let err = PipelineError::unsupported_file_type("image/png");
        assert_eq!(err.to_string(), "unsupported file type: image/png");

        let err = PipelineError::generation_failed("rate limited");
        assert_eq!(err.to_string(), "test case generation failed: rate limited");
    }
}
