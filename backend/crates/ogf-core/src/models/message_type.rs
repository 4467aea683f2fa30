use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Kind of realtime update carried by a [`crate::Message`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    /// New emissions were calculated.
    Emission,
    /// New activities were ingested.
    Activity,
    /// Anomaly detection or threshold breach.
    Alert,
    /// Compliance status changed.
    Compliance,
    /// Keep-alive, delivered regardless of subscriptions.
    Heartbeat,
}

impl MessageType {
    /// Types a client can opt in or out of. Heartbeat is not among them.
    pub const SUBSCRIBABLE: [MessageType; 4] = [
        MessageType::Emission,
        MessageType::Activity,
        MessageType::Alert,
        MessageType::Compliance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Emission => "emission",
            Self::Activity => "activity",
            Self::Alert => "alert",
            Self::Compliance => "compliance",
            Self::Heartbeat => "heartbeat",
        }
    }

    pub fn is_heartbeat(&self) -> bool {
        matches!(self, Self::Heartbeat)
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim() {
            "emission" => Ok(Self::Emission),
            "activity" => Ok(Self::Activity),
            "alert" => Ok(Self::Alert),
            "compliance" => Ok(Self::Compliance),
            "heartbeat" => Ok(Self::Heartbeat),
            _ => Err(CoreError::InvalidMessageType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
