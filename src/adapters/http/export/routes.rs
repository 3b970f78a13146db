//! HTTP route for the export endpoint.

use axum::{routing::post, Router};

use super::handlers::export_test_cases;
use crate::adapters::http::AppState;

/// Creates the export router.
pub fn export_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/export", post(export_test_cases))
        .with_state(state)
}
