use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::{apply_security_headers, create_cors_layer, Config};
use crate::handlers::{calendar, events, health_check, ui};
use crate::state::AppState;

/// All calendar routes, without middleware.
pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(ui::index))
        .route("/health", get(health_check))
        .route("/api/events", post(events::create_event))
        .route("/api/events/:id", delete(events::delete_event))
        .route("/api/calendar", get(calendar::get_calendar))
        .route("/api/calendar/llm", get(calendar::get_calendar_digest))
        .route("/api/calendar/clear", delete(calendar::clear_calendar))
        .route(
            "/api/populate-mock-calendar",
            post(calendar::populate_mock_calendar),
        )
        .with_state(state)
}

pub fn create_routes(state: Arc<AppState>, config: &Config) -> Router {
    let router = apply_security_headers(api_routes(state), config.production);

    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(create_cors_layer(&config.cors_allowed_origins)),
    )
}
