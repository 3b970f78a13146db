//! HTTP DTOs for the analyze endpoints.

use serde::{Deserialize, Serialize};

use crate::application::Analysis;
use crate::domain::{GenerationOptions, Requirement, TestCase};

/// Request body for POST /api/analyze/text.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeTextRequest {
    pub text: Option<String>,
    #[serde(default)]
    pub options: GenerationOptions,
}

/// Request body for POST /api/analyze/gdoc.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeDocLinkRequest {
    pub doc_url: Option<String>,
    #[serde(default)]
    pub options: GenerationOptions,
}

/// Response body for every analyze endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub requirements: Vec<Requirement>,
    pub test_cases: Vec<TestCase>,
}

impl From<Analysis> for AnalysisResponse {
    fn from(analysis: Analysis) -> Self {
        Self {
            requirements: analysis.requirements,
            test_cases: analysis.test_cases,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_request_tolerates_missing_fields() {
        let request: AnalyzeTextRequest = serde_json::from_str(r#"{"text": "Login works"}"#).unwrap();
        assert_eq!(request.text.as_deref(), Some("Login works"));
        assert!(request.options.include_edge_cases);

        let request: AnalyzeTextRequest = serde_json::from_str("{}").unwrap();
        assert!(request.text.is_none());
    }

    #[test]
    fn doc_link_request_uses_camel_case() {
        let request: AnalyzeDocLinkRequest =
            serde_json::from_str(r#"{"docUrl": "https://docs.google.com/document/d/x"}"#).unwrap();
        assert!(request.doc_url.is_some());
    }

    #[test]
    fn response_serializes_test_cases_camel_case() {
        let response = AnalysisResponse {
            requirements: vec![],
            test_cases: vec![],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("testCases").is_some());
    }
}
