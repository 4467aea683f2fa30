//! Administrative endpoints for server management.

use crate::AppState;

use axum::{Json, extract::State, http::StatusCode};
use log::info;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ShutdownResponse {
    pub status: String,
    pub message: String,
}

/// Graceful shutdown endpoint.
///
/// Fires the shared coordinator: the hub closes every client queue, open
/// streams end, and the HTTP server drains.
pub async fn shutdown_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<ShutdownResponse>) {
    info!("Graceful shutdown requested via HTTP");

    state.shutdown.shutdown();

    (
        StatusCode::ACCEPTED,
        Json(ShutdownResponse {
            status: "ok".to_string(),
            message: "Shutdown initiated".to_string(),
        }),
    )
}
