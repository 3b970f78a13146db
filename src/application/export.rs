//! Export orchestration: shape validation, then handoff to the writer.
//!
//! Validation is shape-only. Whether a test case's `requirement` names an
//! id present in the submitted requirement list is intentionally not
//! checked here.

use std::sync::Arc;

use crate::domain::{ExportFormat, PipelineError, Requirement, TestCase};
use crate::ports::{ExportArtifact, SpreadsheetWriter};

/// Validates and serializes a generation result for download.
pub struct ExportService {
    writer: Arc<dyn SpreadsheetWriter>,
}

impl ExportService {
    /// Creates an export service around a writer.
    pub fn new(writer: Arc<dyn SpreadsheetWriter>) -> Self {
        Self { writer }
    }

    /// Produces the export artifact.
    ///
    /// # Errors
    ///
    /// `PipelineError::InvalidExport` when a supplied record fails shape
    /// validation, or when serialization itself fails.
    pub fn export(
        &self,
        requirements: &[Requirement],
        test_cases: &[TestCase],
        format: ExportFormat,
        title: &str,
    ) -> Result<ExportArtifact, PipelineError> {
        validate_shapes(requirements, test_cases)?;

        self.writer
            .write(requirements, test_cases, format, title)
            .map_err(|e| PipelineError::invalid_export(e.to_string()))
    }
}

fn validate_shapes(
    requirements: &[Requirement],
    test_cases: &[TestCase],
) -> Result<(), PipelineError> {
    for requirement in requirements {
        if requirement.id.trim().is_empty() || requirement.text.trim().is_empty() {
            return Err(PipelineError::invalid_export(
                "requirement records need a non-empty id and text",
            ));
        }
    }

    for case in test_cases {
        if case.id.trim().is_empty()
            || case.description.trim().is_empty()
            || case.expected_result.trim().is_empty()
        {
            return Err(PipelineError::invalid_export(format!(
                "test case '{}' needs a non-empty id, description, and expectedResult",
                case.id
            )));
        }
    }

    Ok(())
}
