//! HTTP handlers for the analyze endpoints.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::{pipeline_error_response, AppState, ErrorResponse};
use crate::domain::GenerationOptions;

use super::dto::{AnalysisResponse, AnalyzeDocLinkRequest, AnalyzeTextRequest};

/// POST /api/analyze/text - analyze typed requirement text.
pub async fn analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Response {
    let Some(text) = request.text.filter(|t| !t.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::message("Text input is required")),
        )
            .into_response();
    };

    match state.pipeline.analyze_text(&text, &request.options).await {
        Ok(analysis) => (StatusCode::OK, Json(AnalysisResponse::from(analysis))).into_response(),
        Err(e) => pipeline_error_response(&e),
    }
}

/// POST /api/analyze/file - analyze an uploaded document.
///
/// Multipart form with a `file` part and an optional `options` part
/// carrying a JSON-encoded GenerationOptions object.
pub async fn analyze_file(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let mut file: Option<(Vec<u8>, String, Option<String>)> = None;
    let mut options = GenerationOptions::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::new("Malformed multipart payload", e.to_string())),
                )
                    .into_response();
            }
        };

        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let mime_type = field.content_type().unwrap_or_default().to_string();
                let filename = field.file_name().map(str::to_string);
                match field.bytes().await {
                    Ok(bytes) => file = Some((bytes.to_vec(), mime_type, filename)),
                    Err(e) => {
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse::new("Failed to read upload", e.to_string())),
                        )
                            .into_response();
                    }
                }
            }
            Some("options") => {
                let raw = match field.text().await {
                    Ok(raw) => raw,
                    Err(e) => {
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse::new("Failed to read options", e.to_string())),
                        )
                            .into_response();
                    }
                };
                match serde_json::from_str(&raw) {
                    Ok(parsed) => options = parsed,
                    Err(e) => {
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse::new("Invalid options format", e.to_string())),
                        )
                            .into_response();
                    }
                }
            }
            _ => {}
        }
    }

    let Some((bytes, mime_type, filename)) = file else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::message("No file uploaded")),
        )
            .into_response();
    };

    match state
        .pipeline
        .analyze_upload(&bytes, &mime_type, filename.as_deref(), &options)
        .await
    {
        Ok(analysis) => (StatusCode::OK, Json(AnalysisResponse::from(analysis))).into_response(),
        Err(e) => pipeline_error_response(&e),
    }
}

/// POST /api/analyze/gdoc - analyze a linked Google Doc.
pub async fn analyze_doc_link(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeDocLinkRequest>,
) -> Response {
    let Some(doc_url) = request.doc_url.filter(|u| !u.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::message("Google Doc URL is required")),
        )
            .into_response();
    };

    match state
        .pipeline
        .analyze_document_link(&doc_url, &request.options)
        .await
    {
        Ok(analysis) => (StatusCode::OK, Json(AnalysisResponse::from(analysis))).into_response(),
        Err(e) => pipeline_error_response(&e),
    }
}
