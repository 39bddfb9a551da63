// HTTP request handlers
use crate::application::telemetry_repository::TelemetryError;
use crate::infrastructure::chunked_stream::stream_from_receiver;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Interpret a dashboard document posted by the client
pub async fn interpret_dashboard(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(document): Json<Value>,
) -> Response {
    let dashboard = state.dashboard_service.interpreter().interpret(document);
    respond(json_response(&dashboard, accepts_brotli(&headers)).await)
}

/// Load a dashboard from the backend and return its normalized form
pub async fn get_dashboard(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.dashboard_service.load_dashboard(&id).await {
        Ok(dashboard) => respond(json_response(&dashboard, accepts_brotli(&headers)).await),
        Err(e) => backend_error(&id, e),
    }
}

/// Stream dashboard for progressive loading
pub async fn stream_dashboard(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.dashboard_service.stream_dashboard(&id).await {
        Ok(rx) => stream_from_receiver(rx, accepts_brotli(&headers)).into_response(),
        Err(e) => backend_error(&id, e),
    }
}

fn respond(result: Result<Response, StatusCode>) -> Response {
    match result {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

fn backend_error(dashboard_id: &str, error: TelemetryError) -> Response {
    tracing::warn!("Error loading dashboard {}: {}", dashboard_id, error);
    let status = match error {
        TelemetryError::Status { status: 404, .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_GATEWAY,
    };
    (status, error.to_string()).into_response()
}
