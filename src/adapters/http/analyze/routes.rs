//! HTTP routes for the analyze endpoints.

use axum::{extract::DefaultBodyLimit, routing::post, Router};

use super::handlers::{analyze_doc_link, analyze_file, analyze_text};
use crate::adapters::http::AppState;

/// Upload size limit, matching the original service's 10MB cap.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Creates the analyze router with all three input-type endpoints.
pub fn analyze_routes(state: AppState) -> Router {
    Router::new()
        .route("/text", post(analyze_text))
        .route("/file", post(analyze_file))
        .route("/gdoc", post(analyze_doc_link))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
