use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::models::NewEvent;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::empty_success;

/// POST /api/events
pub async fn create_event(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewEvent>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(event) = payload?;
    event.validate()?;

    let created = state.store.insert(event).await?;
    tracing::info!(id = created.id, title = %created.title, "Event created");

    Ok(Json(created).into_response())
}

/// DELETE /api/events/:id
pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;

    if !state.store.delete_by_id(id).await? {
        return Err(AppError::NotFound("Event not found".to_string()));
    }
    tracing::info!(id, "Event deleted");

    Ok(empty_success(format!("Event {} deleted successfully", id)).into_response())
}
