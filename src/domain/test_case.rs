//! Test case records and generation options.
//!
//! These types decouple the pipeline's output from any provider wire
//! format: the AI adapter and the fallback generator both produce the same
//! `TestCase` shape, and the export layer consumes it unchanged.

use serde::{Deserialize, Serialize};

/// Category of a generated test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestCaseType {
    /// Verifies the basic, intended behavior.
    Positive,
    /// Verifies error handling and input validation.
    Negative,
    /// Verifies boundary conditions and unusual scenarios.
    EdgeCase,
    /// Verifies timing and load behavior.
    Performance,
}

/// Importance of a test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// One structured verification scenario linked to exactly one requirement.
///
/// Ids follow the `TC<n>` scheme, sequential across the whole generation
/// result (not per requirement). Instances are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    /// Unique identifier within one generation result.
    pub id: String,
    /// What the test does.
    pub description: String,
    /// Setup state required before the test runs.
    pub precondition: String,
    /// Test category.
    #[serde(rename = "type")]
    pub case_type: TestCaseType,
    /// What should happen when the test is run.
    pub expected_result: String,
    /// Importance of the test.
    pub priority: Priority,
    /// Id of the requirement this test case covers.
    pub requirement: String,
}

/// Output format selector, consumed by the export layer only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Excel,
    Csv,
}

/// Toggles controlling which test-case categories are produced.
///
/// Every field has a defined default so an absent field deserializes to
/// its default rather than failing the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {
    #[serde(default = "default_true")]
    pub include_edge_cases: bool,
    #[serde(default = "default_true")]
    pub include_negative_tests: bool,
    #[serde(default)]
    pub include_performance_tests: bool,
    #[serde(default)]
    pub output_format: ExportFormat,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            include_edge_cases: true,
            include_negative_tests: true,
            include_performance_tests: false,
            output_format: ExportFormat::default(),
        }
    }
}

fn default_true() -> bool {
    true
}
