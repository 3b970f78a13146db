//! Remote Document Source Port - external document service interface.
//!
//! The fetcher depends on this trait for the credentialed path; when no
//! credential is configured the fetcher holds no implementation at all and
//! serves the fixed demo text instead.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static DOCUMENT_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/document/d/([A-Za-z0-9_-]+)").expect("valid regex"));

/// Identifier extracted from a shared document link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentId(String);

impl DocumentId {
    /// Extracts the document id from a `.../document/d/<id>` link.
    ///
    /// Returns `None` when the URL does not carry an id; the caller turns
    /// that into an invalid-reference error.
    pub fn from_url(url: &str) -> Option<Self> {
        DOCUMENT_ID_PATTERN
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|id| Self(id.as_str().to_string()))
    }

    /// The raw id, as used in the remote API path.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Port for retrieving the plain text of a remote document.
///
/// Implementations walk the service's structural content representation
/// and concatenate literal run text in document order; content without
/// extractable text contributes nothing.
#[async_trait]
pub trait RemoteDocumentSource: Send + Sync {
    /// Fetches the document and returns its concatenated text.
    async fn fetch_text(&self, document_id: &DocumentId) -> Result<String, FetchError>;
}

/// Remote document retrieval errors.
///
/// Missing credentials are not represented here: that branch is decided at
/// construction time, before any implementation of this port exists.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Document id does not exist on the service.
    #[error("document not found")]
    NotFound,

    /// Credential was rejected or the document is not shared.
    #[error("permission denied")]
    PermissionDenied,

    /// Service returned a server-side error.
    #[error("service unavailable: {message}")]
    Unavailable { message: String },

    /// Request could not be transported.
    #[error("network error: {0}")]
    Network(String),

    /// Reply could not be interpreted as a document.
    #[error("malformed document payload: {0}")]
    Malformed(String),
}

impl FetchError {
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_id_from_full_link() {
        let id = DocumentId::from_url(
            "https://docs.google.com/document/d/1AbC_d-42xyz/edit#heading=h.1",
        )
        .unwrap();
        assert_eq!(id.as_str(), "1AbC_d-42xyz");
    }

    #[test]
    fn rejects_links_without_document_path() {
        assert!(DocumentId::from_url("https://docs.google.com/spreadsheets/d/123").is_none());
        assert!(DocumentId::from_url("not a url at all").is_none());
        assert!(DocumentId::from_url("").is_none());
    }

    #[test]
    fn id_stops_at_path_boundary() {
        let id = DocumentId::from_url("https://docs.google.com/document/d/abc123/edit").unwrap();
        assert_eq!(id.as_str(), "abc123");
    }

    #[test]
    fn remote_document_source_is_object_safe() {
        fn check<T: RemoteDocumentSource + ?Sized>() {}
        check::<dyn RemoteDocumentSource>();
    }
}
