//! HTTP DTOs for the project endpoints.

use serde::Deserialize;

use crate::domain::{GenerationOptions, Requirement, TestCase};
use crate::ports::NewProject;

/// Request body for POST /api/projects.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub title: String,
    pub requirements: Vec<Requirement>,
    pub test_cases: Vec<TestCase>,
    #[serde(default)]
    pub options: GenerationOptions,
}

impl From<CreateProjectRequest> for NewProject {
    fn from(request: CreateProjectRequest) -> Self {
        Self {
            title: request.title,
            requirements: request.requirements,
            test_cases: request.test_cases,
            options: request.options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default_when_absent() {
        let request: CreateProjectRequest = serde_json::from_str(
            r#"{"title": "Sprint 12", "requirements": [], "testCases": []}"#,
        )
        .unwrap();
        assert_eq!(request.title, "Sprint 12");
        assert!(request.options.include_edge_cases);
    }
}
