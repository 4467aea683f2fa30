use ogf_core::MessageType;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionAction {
    Subscribe,
    Unsubscribe,
}

/// Inbound WebSocket control frame:
/// `{"action": "subscribe", "types": ["emission", "alert"]}`
#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionRequest {
    pub action: SubscriptionAction,
    pub types: Vec<MessageType>,
}
