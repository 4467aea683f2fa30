use crate::AppState;

use ogf_realtime::{HubState, MetricsSnapshot};

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealtimeMetricsResponse {
    #[serde(flatten)]
    pub metrics: MetricsSnapshot,
    pub total_clients: usize,
    pub hub_state: HubState,
}

/// GET /api/v1/realtime/metrics - hub counters as flat JSON
pub async fn realtime_metrics(State(state): State<AppState>) -> Json<RealtimeMetricsResponse> {
    Json(RealtimeMetricsResponse {
        metrics: state.hub.metrics(),
        total_clients: state.hub.total_client_count().await,
        hub_state: state.hub.state(),
    })
}

/// GET /metrics - Prometheus text exposition
pub async fn prometheus_metrics(State(state): State<AppState>) -> Response {
    match state.prometheus {
        Some(handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "Prometheus exporter not installed").into_response(),
    }
}
