use crate::{RealtimeError, Result as RealtimeResult};

use std::collections::HashSet;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use ogf_core::MessageType;

/// Message types a client wants delivered.
///
/// Heartbeats bypass filtering: they are never stored here and
/// `is_subscribed(Heartbeat)` is always true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSubscriptions {
    types: HashSet<MessageType>,
}

impl Default for ClientSubscriptions {
    /// Subscribed to every non-heartbeat type.
    fn default() -> Self {
        Self {
            types: MessageType::SUBSCRIBABLE.into_iter().collect(),
        }
    }
}

impl ClientSubscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// No subscriptions at all (heartbeats still arrive)
    pub fn none() -> Self {
        Self {
            types: HashSet::new(),
        }
    }

    /// Returns how many types were newly added
    pub fn subscribe(&mut self, types: &[MessageType]) -> usize {
        types
            .iter()
            .filter(|t| !t.is_heartbeat())
            .filter(|t| self.types.insert(**t))
            .count()
    }

    /// Returns how many types were removed
    pub fn unsubscribe(&mut self, types: &[MessageType]) -> usize {
        types.iter().filter(|t| self.types.remove(*t)).count()
    }

    /// Replace the whole set
    pub fn replace(&mut self, types: &[MessageType]) {
        self.types.clear();
        self.subscribe(types);
    }

    pub fn is_subscribed(&self, message_type: MessageType) -> bool {
        message_type.is_heartbeat() || self.types.contains(&message_type)
    }

    /// Subscribed types in a stable order
    pub fn types(&self) -> Vec<MessageType> {
        MessageType::SUBSCRIBABLE
            .into_iter()
            .filter(|t| self.types.contains(t))
            .collect()
    }

    pub fn clear(&mut self) {
        self.types.clear();
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Parse a comma separated list such as `"emission, alert"`.
    #[track_caller]
    pub fn parse_types(list: &str) -> RealtimeResult<Vec<MessageType>> {
        let mut types = Vec::new();

        for name in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            match MessageType::from_str(name) {
                Ok(message_type) => types.push(message_type),
                Err(_) => {
                    return Err(RealtimeError::InvalidSubscription {
                        message: format!("unknown message type '{}'", name),
                        location: ErrorLocation::from(Location::caller()),
                    });
                }
            }
        }

        Ok(types)
    }
}
