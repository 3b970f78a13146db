//! HTTP handlers for the project endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::{AppState, ErrorResponse};

use super::dto::CreateProjectRequest;

/// POST /api/projects - save a generation result.
pub async fn create_project(
    State(state): State<AppState>,
    Json(request): Json<CreateProjectRequest>,
) -> Response {
    if request.title.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::message("Project title is required")),
        )
            .into_response();
    }

    let stored = state.projects.create(request.into()).await;
    (StatusCode::CREATED, Json(stored)).into_response()
}

/// GET /api/projects - list saved projects.
pub async fn list_projects(State(state): State<AppState>) -> Response {
    let projects = state.projects.list().await;
    (StatusCode::OK, Json(projects)).into_response()
}

/// GET /api/projects/:id - fetch one project.
pub async fn get_project(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    match state.projects.get(id).await {
        Some(project) => (StatusCode::OK, Json(project)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::message(format!("Project {} not found", id))),
        )
            .into_response(),
    }
}

/// DELETE /api/projects/:id - delete one project.
pub async fn delete_project(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    if state.projects.delete(id).await {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::message(format!("Project {} not found", id))),
        )
            .into_response()
    }
}
