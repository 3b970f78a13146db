//! HTTP DTOs for the export endpoint.

use serde::Deserialize;

use crate::domain::{ExportFormat, Requirement, TestCase};

fn default_title() -> String {
    "Test Cases".to_string()
}

/// Request body for POST /api/export.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub requirements: Vec<Requirement>,
    pub test_cases: Vec<TestCase>,
    pub format: ExportFormat,
    #[serde(default = "default_title")]
    pub title: String,
}
