use std::time::Duration;

use axum_test::{TestServer, TestWebSocket, WsMessage};
use ogf_server::AppState;

/// Router served over a real HTTP transport so WebSocket upgrades work
pub struct WsTestServer {
    pub server: TestServer,
    pub state: AppState,
}

pub fn create_ws_test_server() -> WsTestServer {
    let test_server = super::create_test_server();
    let server = TestServer::builder()
        .http_transport()
        .build(ogf_server::build_router(test_server.state.clone()))
        .expect("Failed to create test server");

    WsTestServer {
        server,
        state: test_server.state,
    }
}

/// WebSocket test client for the realtime endpoint
pub struct WsTestClient {
    ws: TestWebSocket,
}

impl WsTestClient {
    /// Connect as `tenant_id`, optionally narrowing with a `types` query.
    pub async fn connect(server: &TestServer, tenant_id: &str, types: Option<&str>) -> Self {
        let path = match types {
            Some(types) => format!("/api/v1/realtime/ws?types={}", types),
            None => "/api/v1/realtime/ws".to_string(),
        };

        let ws = server
            .get_websocket(&path)
            .add_header("x-tenant-id", tenant_id.to_string())
            .add_header("x-user-id", "user-1")
            .await
            .into_websocket()
            .await;

        Self { ws }
    }

    /// Next text frame parsed as JSON, failing after two seconds
    pub async fn receive_json(&mut self) -> serde_json::Value {
        let text = tokio::time::timeout(Duration::from_secs(2), self.ws.receive_text())
            .await
            .expect("timed out waiting for a text frame");
        serde_json::from_str(&text).unwrap()
    }

    /// Next raw frame, failing after two seconds
    pub async fn receive_message(&mut self) -> WsMessage {
        tokio::time::timeout(Duration::from_secs(2), self.ws.receive_message())
            .await
            .expect("timed out waiting for a frame")
    }

    pub async fn send_text(&mut self, text: impl std::fmt::Display) {
        self.ws.send_text(text).await;
    }

    pub async fn close(self) {
        self.ws.close().await;
    }
}
