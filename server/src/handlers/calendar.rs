use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{Local, NaiveDateTime};
use serde::Deserialize;

use crate::calendar::{populate, render_digest, DigestWindow};
use crate::models::EventFilter;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::empty_success;
use crate::utils::time;

#[derive(Debug, Default, Deserialize)]
pub struct CalendarParams {
    #[serde(default, deserialize_with = "time::deserialize_option")]
    pub start_date: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "time::deserialize_option")]
    pub end_date: Option<NaiveDateTime>,
}

/// GET /api/calendar
pub async fn get_calendar(
    State(state): State<Arc<AppState>>,
    params: Result<Query<CalendarParams>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(params) = params?;

    let filter = EventFilter::range(params.start_date, params.end_date);
    let events = state.store.query(&filter).await?;

    Ok(Json(events).into_response())
}

/// GET /api/calendar/llm
pub async fn get_calendar_digest(
    State(state): State<Arc<AppState>>,
    params: Result<Query<CalendarParams>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(params) = params?;

    let window = DigestWindow::resolve(
        params.start_date,
        params.end_date,
        Local::now().date_naive(),
    )?;
    let events = state.store.query(&window.filter()).await?;

    Ok(render_digest(&window, &events).into_response())
}

/// DELETE /api/calendar/clear
pub async fn clear_calendar(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    let removed = state.store.clear_all().await?;
    tracing::info!(removed, "Calendar cleared");

    Ok(empty_success(format!("Calendar cleared. {} events deleted.", removed)).into_response())
}

/// POST /api/populate-mock-calendar
pub async fn populate_mock_calendar(
    State(state): State<Arc<AppState>>,
) -> Result<Response, AppError> {
    let events = state.mock_week()?;
    let inserted = populate(state.store.as_ref(), events).await?;

    Ok(empty_success(format!("Mock calendar populated with {} events", inserted)).into_response())
}
