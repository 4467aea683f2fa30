//! Tenant-scoped realtime broadcast hub.
//!
//! Producers publish [`Message`](ogf_core::Message)s through [`Hub`]; a single
//! [`HubLoop`] task owns the client registry and fans each message out to the
//! outbound queues of the tenant's subscribed [`Client`]s. Transport adapters
//! (SSE, WebSocket) drain a [`ClientReceiver`] and write frames to the wire.

pub mod client;
pub mod client_id;
pub mod client_registration;
pub mod client_subscriptions;
pub mod error;
pub mod hub;
pub mod hub_logger;
pub mod hub_state;
pub mod metrics;
pub mod producer;
pub mod shutdown_coordinator;
pub mod shutdown_guard;

pub use client::{Client, ClientReceiver, PushOutcome};
pub use client_id::ClientId;
pub use client_registration::ClientRegistration;
pub use client_subscriptions::ClientSubscriptions;
pub use error::{RealtimeError, Result};
pub use hub::{Hub, HubLoop};
pub use hub_logger::{FacadeLogger, HubLogger};
pub use hub_state::HubState;
pub use metrics::{HubMetrics, MetricsSnapshot};
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;

#[cfg(test)]
mod tests;
