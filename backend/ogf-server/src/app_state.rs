use ogf_realtime::{Hub, ShutdownCoordinator};

use metrics_exporter_prometheus::PrometheusHandle;

/// Shared state for every HTTP handler
#[derive(Clone)]
pub struct AppState {
    pub hub: Hub,
    pub shutdown: ShutdownCoordinator,
    /// `None` when another recorder was already installed
    pub prometheus: Option<PrometheusHandle>,
    /// Upper bound on concurrently registered realtime clients
    pub max_connections: usize,
}
