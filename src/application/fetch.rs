//! Remote document fetching with a demo fallback.
//!
//! The credential branch is decided at construction: a fetcher built
//! without a source serves the fixed demo requirements block for every
//! valid link, tagged with its provenance so logs can tell demo content
//! from a real fetch. A fetcher built with a source never falls back;
//! service failures propagate.

use std::sync::Arc;

use crate::domain::PipelineError;
use crate::ports::{DocumentId, RemoteDocumentSource};

/// Fixed sample requirements served when no document credential is
/// configured. One requirement per non-empty line.
pub const DEMO_REQUIREMENTS: &str = "\
User should be able to upload requirements through text input.
System should accept PDF, DOC, and DOCX file uploads.
System should integrate with Google Docs to fetch requirements.
AI should analyze requirements and generate comprehensive test cases.
System should export test cases in Excel or CSV format.";

/// Where a fetched document body came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Retrieved from the remote document service.
    Remote,
    /// Substituted demo content (no credential configured).
    DemoFallback,
}

/// A fetched document with its provenance tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedDocument {
    pub text: String,
    pub provenance: Provenance,
}

/// Retrieves document text from a shared link.
pub struct RemoteDocumentFetcher {
    source: Option<Arc<dyn RemoteDocumentSource>>,
}

impl RemoteDocumentFetcher {
    /// Creates a fetcher. Pass `None` when no document credential is
    /// configured; every valid link then resolves to the demo block.
    pub fn new(source: Option<Arc<dyn RemoteDocumentSource>>) -> Self {
        Self { source }
    }

    /// Fetches the text behind a document link.
    ///
    /// # Errors
    ///
    /// - `PipelineError::InvalidReference` when the link carries no
    ///   document id.
    /// - `PipelineError::RemoteFetchFailed` when a configured source
    ///   fails; the demo fallback never applies to this case.
    pub async fn fetch(&self, url: &str) -> Result<FetchedDocument, PipelineError> {
        let document_id =
            DocumentId::from_url(url).ok_or_else(|| PipelineError::invalid_reference(url))?;

        let Some(source) = &self.source else {
            tracing::info!(
                document_id = %document_id,
                provenance = "demo",
                "no document credential configured, serving demo requirements"
            );
            return Ok(FetchedDocument {
                text: DEMO_REQUIREMENTS.to_string(),
                provenance: Provenance::DemoFallback,
            });
        };

        let text = source
            .fetch_text(&document_id)
            .await
            .map_err(|e| PipelineError::remote_fetch_failed(e.to_string()))?;

        tracing::info!(
            document_id = %document_id,
            provenance = "remote",
            chars = text.len(),
            "document fetched"
        );
        Ok(FetchedDocument {
            text,
            provenance: Provenance::Remote,
        })
    }
}
