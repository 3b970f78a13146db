//! Spreadsheet Writer Port - export formatting interface.
//!
//! The pipeline ends at this seam: it hands over validated requirements
//! and test cases and receives an artifact ready to stream back to the
//! user. Workbook layout and CSV shape are adapter concerns.

use thiserror::Error;

use crate::domain::{ExportFormat, Requirement, TestCase};

/// Port for serializing a generation result into a downloadable artifact.
pub trait SpreadsheetWriter: Send + Sync {
    /// Produces the artifact for the requested format.
    fn write(
        &self,
        requirements: &[Requirement],
        test_cases: &[TestCase],
        format: ExportFormat,
        title: &str,
    ) -> Result<ExportArtifact, ExportError>;
}

/// A finished export: bytes plus the metadata the HTTP layer needs.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    /// File content.
    pub bytes: Vec<u8>,
    /// MIME type for the Content-Type header.
    pub content_type: &'static str,
    /// Suggested download filename (title + extension).
    pub filename: String,
}

/// Export serialization errors.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    /// The serializer itself failed.
    #[error("export serialization failed: {0}")]
    Serialization(String),
}

impl ExportError {
    /// Creates a serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }
}
