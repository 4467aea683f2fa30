use crate::api::realtime::{metrics, sse, websocket};
use crate::{AppState, admin, health};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Realtime transports
        .route("/api/v1/realtime/stream", get(sse::stream_handler))
        .route("/api/v1/realtime/ws", get(websocket::ws_handler))
        .route("/api/v1/realtime/metrics", get(metrics::realtime_metrics))
        .route("/metrics", get(metrics::prometheus_metrics))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Admin endpoints
        .route("/admin/shutdown", post(admin::shutdown_handler))
        .with_state(state)
        // Dashboards are served from another origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
