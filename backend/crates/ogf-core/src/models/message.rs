use crate::{CoreError, CoreResult, MessageType};

use std::panic::Location;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use uuid::Uuid;

/// Envelope for a realtime update.
///
/// The payload is serialized by the producer when the message is built, so
/// nothing downstream needs to know the payload schema. Serializes to the
/// wire shape shared by every transport:
///
/// ```json
/// { "id": "...", "type": "emission", "timestamp": "2026-01-01T00:00:00Z",
///   "tenantId": "acme", "payload": { ... } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    id: String,
    #[serde(rename = "type")]
    message_type: MessageType,
    timestamp: DateTime<Utc>,
    tenant_id: String,
    #[serde(default)]
    payload: Option<Box<RawValue>>,
}

impl Message {
    /// Build a message, serializing `payload` once up front.
    #[track_caller]
    pub fn new<T: Serialize>(
        message_type: MessageType,
        tenant_id: impl Into<String>,
        payload: &T,
    ) -> CoreResult<Self> {
        let payload =
            serde_json::value::to_raw_value(payload).map_err(|source| CoreError::Serialization {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self::from_raw(message_type, tenant_id, Some(payload)))
    }

    /// Build a message from an already serialized payload.
    pub fn from_raw(
        message_type: MessageType,
        tenant_id: impl Into<String>,
        payload: Option<Box<RawValue>>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            message_type,
            timestamp: Utc::now(),
            tenant_id: tenant_id.into(),
            payload,
        }
    }

    /// Keep-alive with no payload.
    pub fn heartbeat(tenant_id: impl Into<String>) -> Self {
        Self::from_raw(MessageType::Heartbeat, tenant_id, None)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn message_type(&self) -> MessageType {
        self.message_type
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    pub fn payload(&self) -> Option<&RawValue> {
        self.payload.as_deref()
    }

    /// Serialize the full envelope into a wire frame.
    #[track_caller]
    pub fn encode(&self) -> CoreResult<Bytes> {
        serde_json::to_vec(self)
            .map(Bytes::from)
            .map_err(|source| CoreError::Serialization {
                source,
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
