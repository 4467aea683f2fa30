use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

use metrics::{counter, gauge};
use serde::{Deserialize, Serialize};

const CONNECTED_CLIENTS: &str = "ogf_realtime_connected_clients";
const CONNECTIONS_TOTAL: &str = "ogf_realtime_connections_total";
const DISCONNECTS_TOTAL: &str = "ogf_realtime_disconnects_total";
const MESSAGES_SENT: &str = "ogf_realtime_messages_sent_total";
const MESSAGES_DROPPED: &str = "ogf_realtime_messages_dropped_total";
const BYTES_SENT: &str = "ogf_realtime_bytes_sent_total";
const HEARTBEATS_SENT: &str = "ogf_realtime_heartbeats_sent_total";

/// Hub counters.
///
/// Written from the hub loop (and from producers on intake saturation), read
/// from anywhere. Atomics keep this independent of the registry lock. Every
/// update is mirrored into the `metrics` facade for the Prometheus exporter.
#[derive(Debug, Default)]
pub struct HubMetrics {
    connected_clients: AtomicI64,
    connections_total: AtomicU64,
    disconnects_total: AtomicU64,
    messages_sent: AtomicU64,
    messages_dropped: AtomicU64,
    bytes_sent: AtomicU64,
    heartbeats_sent: AtomicU64,
}

/// Point-in-time copy of [`HubMetrics`], serialized as flat JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub connected_clients: i64,
    pub messages_sent: u64,
    pub messages_dropped: u64,
    pub bytes_sent: u64,
    pub connections_total: u64,
    pub disconnects_total: u64,
    pub heartbeats_sent: u64,
}

impl HubMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn client_connected(&self) {
        self.connected_clients.fetch_add(1, Ordering::Relaxed);
        self.connections_total.fetch_add(1, Ordering::Relaxed);
        gauge!(CONNECTED_CLIENTS).increment(1.0);
        counter!(CONNECTIONS_TOTAL).increment(1);
    }

    pub(crate) fn client_disconnected(&self) {
        self.connected_clients.fetch_sub(1, Ordering::Relaxed);
        self.disconnects_total.fetch_add(1, Ordering::Relaxed);
        gauge!(CONNECTED_CLIENTS).decrement(1.0);
        counter!(DISCONNECTS_TOTAL).increment(1);
    }

    pub(crate) fn message_sent(&self, bytes: usize) {
        self.messages_sent.fetch_add(1, Ordering::Relaxed);
        self.bytes_sent.fetch_add(bytes as u64, Ordering::Relaxed);
        counter!(MESSAGES_SENT).increment(1);
        counter!(BYTES_SENT).increment(bytes as u64);
    }

    /// `reason` is one of `intake_full`, `client_full`, `client_closed`, `hub_stopped`
    pub(crate) fn message_dropped(&self, reason: &'static str) {
        self.messages_dropped.fetch_add(1, Ordering::Relaxed);
        counter!(MESSAGES_DROPPED, "reason" => reason).increment(1);
    }

    pub(crate) fn heartbeat_sent(&self) {
        self.heartbeats_sent.fetch_add(1, Ordering::Relaxed);
        counter!(HEARTBEATS_SENT).increment(1);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            connected_clients: self.connected_clients.load(Ordering::Relaxed),
            messages_sent: self.messages_sent.load(Ordering::Relaxed),
            messages_dropped: self.messages_dropped.load(Ordering::Relaxed),
            bytes_sent: self.bytes_sent.load(Ordering::Relaxed),
            connections_total: self.connections_total.load(Ordering::Relaxed),
            disconnects_total: self.disconnects_total.load(Ordering::Relaxed),
            heartbeats_sent: self.heartbeats_sent.load(Ordering::Relaxed),
        }
    }
}
