#![allow(dead_code)]

//! Test infrastructure for ogf-server integration tests

pub mod ws_client;

use ogf_config::HubConfig;
use ogf_realtime::{FacadeLogger, Hub, ShutdownCoordinator};
use ogf_server::AppState;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::task::JoinHandle;

pub struct TestServer {
    pub state: AppState,
    pub hub_task: JoinHandle<()>,
}

/// AppState backed by a running hub with the default configuration
pub fn create_test_server() -> TestServer {
    create_test_server_with_limit(10_000)
}

pub fn create_test_server_with_limit(max_connections: usize) -> TestServer {
    let config = HubConfig {
        heartbeat_interval_secs: 300,
        ..HubConfig::default()
    };
    let shutdown = ShutdownCoordinator::new();
    let (hub, hub_loop) = Hub::new(&config, Arc::new(FacadeLogger::default()));
    let hub_task = tokio::spawn(hub_loop.run(shutdown.subscribe_guard()));

    // Build without installing so tests never touch the global recorder.
    let prometheus = Some(PrometheusBuilder::new().build_recorder().handle());

    TestServer {
        state: AppState {
            hub,
            shutdown,
            prometheus,
            max_connections,
        },
        hub_task,
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_as_tenant(uri: &str, tenant_id: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("X-Tenant-ID", tenant_id)
        .header("X-User-ID", "user-1")
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Next data frame of a streaming body as text
pub async fn next_frame(body: &mut Body) -> String {
    loop {
        let frame = tokio::time::timeout(Duration::from_secs(2), body.frame())
            .await
            .expect("timed out waiting for a frame")
            .expect("stream ended")
            .expect("body error");

        if let Ok(data) = frame.into_data() {
            return String::from_utf8(data.to_vec()).unwrap();
        }
    }
}

/// Poll until the hub reports `expected` clients in total
pub async fn wait_for_total_clients(hub: &Hub, expected: usize) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    while hub.total_client_count().await != expected {
        assert!(
            tokio::time::Instant::now() < deadline,
            "client count never reached {}",
            expected
        );
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}
