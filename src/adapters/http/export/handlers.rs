//! HTTP handlers for the export endpoint.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::{pipeline_error_response, AppState};

use super::dto::ExportRequest;

/// POST /api/export - serialize a generation result for download.
pub async fn export_test_cases(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> Response {
    let artifact = match state.exporter.export(
        &request.requirements,
        &request.test_cases,
        request.format,
        &request.title,
    ) {
        Ok(artifact) => artifact,
        Err(e) => return pipeline_error_response(&e),
    };

    let disposition = format!(
        "attachment; filename=\"{}\"",
        sanitize_filename(&artifact.filename)
    );

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, artifact.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        artifact.bytes,
    )
        .into_response()
}

/// Keeps the download filename header-safe.
fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .filter(|c| c.is_ascii() && !c.is_ascii_control() && *c != '"')
        .collect()
}
