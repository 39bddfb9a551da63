// Route table
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_dashboard, health_check, interpret_dashboard, stream_dashboard};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboards/interpret", post(interpret_dashboard))
        .route("/dashboards/:id", get(get_dashboard))
        .route("/dashboards/:id/stream", get(stream_dashboard))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
