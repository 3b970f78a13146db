//! HTTP adapters - REST API implementations.
//!
//! Each resource has its own module with dto/handlers/routes files; this
//! module assembles the full API router and owns the shared error
//! mapping.

pub mod analyze;
pub mod export;
pub mod projects;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::application::{AnalysisPipeline, ExportService};
use crate::domain::PipelineError;
use crate::ports::ProjectStore;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<AnalysisPipeline>,
    pub exporter: Arc<ExportService>,
    pub projects: Arc<dyn ProjectStore>,
}

impl AppState {
    /// Creates the handler state.
    pub fn new(
        pipeline: Arc<AnalysisPipeline>,
        exporter: Arc<ExportService>,
        projects: Arc<dyn ProjectStore>,
    ) -> Self {
        Self {
            pipeline,
            exporter,
            projects,
        }
    }
}

/// Assembles the full API router.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .nest("/api/analyze", analyze::analyze_routes(state.clone()))
        .merge(export::export_routes(state.clone()))
        .nest("/api/projects", projects::project_routes(state))
}

/// GET /api/health - liveness probe.
async fn health() -> Response {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" }))).into_response()
}

/// Structured error body distinguishing bad input from upstream failure.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    /// Creates an error body with a detail line.
    pub fn new(error: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: Some(detail.into()),
        }
    }

    /// Creates an error body without detail.
    pub fn message(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: None,
        }
    }
}

/// Maps a pipeline error to its HTTP representation.
pub fn pipeline_error_response(err: &PipelineError) -> Response {
    let status = match err {
        PipelineError::UnsupportedFileType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        PipelineError::InvalidReference { .. } => StatusCode::BAD_REQUEST,
        PipelineError::InvalidExport { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        PipelineError::RemoteFetchFailed { .. } | PipelineError::GenerationFailed { .. } => {
            StatusCode::BAD_GATEWAY
        }
    };

    let body = match err {
        PipelineError::UnsupportedFileType { .. } => ErrorResponse::new(
            "Invalid file type. Only PDF, DOC, and DOCX files are allowed.",
            err.to_string(),
        ),
        PipelineError::InvalidReference { .. } => {
            ErrorResponse::new("Invalid Google Doc URL", err.to_string())
        }
        PipelineError::InvalidExport { .. } => {
            ErrorResponse::new("Invalid data format", err.to_string())
        }
        PipelineError::RemoteFetchFailed { .. } => {
            ErrorResponse::new("Failed to process Google Doc", err.to_string())
        }
        PipelineError::GenerationFailed { .. } => {
            ErrorResponse::new("Failed to generate test cases", err.to_string())
        }
    };

    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_4xx() {
        let response =
            pipeline_error_response(&PipelineError::unsupported_file_type("text/plain"));
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

        let response = pipeline_error_response(&PipelineError::invalid_reference("u"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = pipeline_error_response(&PipelineError::invalid_export("bad"));
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn upstream_errors_map_to_502() {
        let response = pipeline_error_response(&PipelineError::remote_fetch_failed("404"));
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let response = pipeline_error_response(&PipelineError::generation_failed("quota"));
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn error_body_omits_missing_detail() {
        let json = serde_json::to_value(ErrorResponse::message("oops")).unwrap();
        assert_eq!(json["error"], "oops");
        assert!(json.get("detail").is_none());
    }
}
