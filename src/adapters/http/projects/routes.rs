//! HTTP routes for the project endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{create_project, delete_project, get_project, list_projects};
use crate::adapters::http::AppState;

/// Creates the projects router.
pub fn project_routes(state: AppState) -> Router {
    Router::new()
        .route("/", post(create_project))
        .route("/", get(list_projects))
        .route("/:id", get(get_project))
        .route("/:id", delete(delete_project))
        .with_state(state)
}
