use super::{
    open_client,
    stream_query::StreamQuery,
    subscription_request::{SubscriptionAction, SubscriptionRequest},
};
use crate::{ApiResult, AppState, ClientIdentity};

use ogf_realtime::{Client, ClientReceiver, ClientRegistration};

use axum::{
    extract::{
        Query, State,
        ws::{Message as WsMessage, WebSocket, WebSocketUpgrade},
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use serde_json::{Value, json};

/// GET /api/v1/realtime/ws - WebSocket transport
pub async fn ws_handler(
    State(state): State<AppState>,
    identity: ClientIdentity,
    Query(query): Query<StreamQuery>,
    ws: WebSocketUpgrade,
) -> ApiResult<Response> {
    let (registration, receiver) = open_client(&state, identity, &query).await?;

    Ok(ws.on_upgrade(move |socket| WebSocketSession::new(registration, receiver).run(socket)))
}

/// One WebSocket connection bound to a registered client
pub struct WebSocketSession {
    registration: ClientRegistration,
    receiver: ClientReceiver,
}

impl WebSocketSession {
    pub fn new(registration: ClientRegistration, receiver: ClientReceiver) -> Self {
        Self {
            registration,
            receiver,
        }
    }

    /// Pump frames until either side closes, then unregister.
    pub async fn run(mut self, socket: WebSocket) {
        let client = self.registration.client().clone();
        let (mut ws_sender, mut ws_receiver) = socket.split();

        log::info!(
            "WebSocket connection {} established for tenant {} (user {})",
            client.id(),
            client.tenant_id(),
            client.user_id()
        );

        let hello = json!({ "type": "connected", "clientId": client.id().to_string() });
        let mut open = ws_sender
            .send(WsMessage::Text(hello.to_string().into()))
            .await
            .is_ok();

        while open {
            tokio::select! {
                frame = self.receiver.recv() => match frame {
                    Some(frame) => {
                        let text = String::from_utf8_lossy(&frame).into_owned();
                        open = ws_sender.send(WsMessage::Text(text.into())).await.is_ok();
                    }
                    None => {
                        log::debug!("Outbound queue closed for connection {}", client.id());
                        let _ = ws_sender.send(WsMessage::Close(None)).await;
                        open = false;
                    }
                },

                msg = ws_receiver.next() => match msg {
                    Some(Ok(WsMessage::Text(text))) => {
                        let reply = handle_control(&client, text.as_str());
                        open = ws_sender
                            .send(WsMessage::Text(reply.to_string().into()))
                            .await
                            .is_ok();
                    }
                    // The websocket layer answers pings itself.
                    Some(Ok(WsMessage::Ping(_) | WsMessage::Pong(_) | WsMessage::Binary(_))) => {}
                    Some(Ok(WsMessage::Close(_))) | None => {
                        log::info!("Connection {} closed by client", client.id());
                        open = false;
                    }
                    Some(Err(e)) => {
                        log::warn!("WebSocket error on connection {}: {}", client.id(), e);
                        open = false;
                    }
                },
            }
        }

        self.registration.release().await;

        log::info!(
            "WebSocket connection {} closed for tenant {}",
            client.id(),
            client.tenant_id()
        );
    }
}

/// Apply a subscription change and describe the result for the peer.
pub(crate) fn handle_control(client: &Client, text: &str) -> Value {
    let request: SubscriptionRequest = match serde_json::from_str(text) {
        Ok(request) => request,
        Err(e) => {
            log::debug!("Rejected control frame from {}: {}", client.id(), e);
            return json!({
                "type": "error",
                "code": "INVALID_SUBSCRIPTION",
                "message": e.to_string(),
            });
        }
    };

    let (kind, changed) = match request.action {
        SubscriptionAction::Subscribe => ("subscribed", client.subscribe(&request.types)),
        SubscriptionAction::Unsubscribe => ("unsubscribed", client.unsubscribe(&request.types)),
    };

    let types: Vec<&str> = client
        .subscriptions()
        .types()
        .iter()
        .map(|t| t.as_str())
        .collect();

    json!({ "type": kind, "changed": changed, "types": types })
}
