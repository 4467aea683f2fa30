use crate::{
    Client, ClientId, ClientReceiver, HubLogger, HubMetrics, HubState, MetricsSnapshot,
    PushOutcome, RealtimeError, Result as RealtimeResult, ShutdownGuard,
};

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use ogf_config::{HubConfig, MIN_HEARTBEAT_INTERVAL_SECS};
use ogf_core::Message;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{RwLock, mpsc, oneshot, watch};
use tokio::time::{Instant, MissedTickBehavior};

/// tenant id -> clients registered under it
type Registry = HashMap<String, HashMap<ClientId, Client>>;

enum Command {
    Register {
        client: Client,
        ack: oneshot::Sender<()>,
    },
    Unregister {
        client: Client,
        ack: Option<oneshot::Sender<()>>,
    },
}

/// Handle to the realtime hub. Cheap to clone and shared by producers,
/// transport adapters and HTTP handlers.
///
/// Registry mutation and dispatch happen only inside [`HubLoop::run`]; the
/// handle just enqueues requests. Read-only queries take the registry's read
/// lock and never go through the loop.
#[derive(Clone)]
pub struct Hub {
    commands: mpsc::Sender<Command>,
    intake: mpsc::Sender<Message>,
    registry: Arc<RwLock<Registry>>,
    metrics: Arc<HubMetrics>,
    logger: Arc<dyn HubLogger>,
    state: watch::Receiver<HubState>,
    client_buffer_size: usize,
}

/// The hub's event loop. Spawn [`HubLoop::run`] exactly once.
pub struct HubLoop {
    commands: mpsc::Receiver<Command>,
    intake: mpsc::Receiver<Message>,
    registry: Arc<RwLock<Registry>>,
    metrics: Arc<HubMetrics>,
    logger: Arc<dyn HubLogger>,
    state: watch::Sender<HubState>,
    heartbeat_interval: Duration,
}

impl Hub {
    /// Capacities and the heartbeat interval are clamped to their minimums,
    /// so an unvalidated config cannot stall or panic the loop.
    pub fn new(config: &HubConfig, logger: Arc<dyn HubLogger>) -> (Self, HubLoop) {
        let (command_tx, command_rx) = mpsc::channel(config.command_capacity.max(1));
        let (intake_tx, intake_rx) = mpsc::channel(config.intake_capacity.max(1));
        let (state_tx, state_rx) = watch::channel(HubState::Running);
        let registry = Arc::new(RwLock::new(Registry::new()));
        let metrics = Arc::new(HubMetrics::new());

        let hub = Self {
            commands: command_tx,
            intake: intake_tx,
            registry: Arc::clone(&registry),
            metrics: Arc::clone(&metrics),
            logger: Arc::clone(&logger),
            state: state_rx,
            client_buffer_size: config.client_buffer_size,
        };

        let hub_loop = HubLoop {
            commands: command_rx,
            intake: intake_rx,
            registry,
            metrics,
            logger,
            state: state_tx,
            heartbeat_interval: config
                .heartbeat_interval()
                .max(Duration::from_secs(MIN_HEARTBEAT_INTERVAL_SECS)),
        };

        (hub, hub_loop)
    }

    /// Create a client sized with the configured outbound buffer.
    pub fn new_client(
        &self,
        tenant_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> (Client, ClientReceiver) {
        Client::new(tenant_id, user_id, self.client_buffer_size)
    }

    /// Add `client` to its tenant. Registering an already registered client
    /// is a no-op. Resolves once the hub loop has applied the request.
    pub async fn register(&self, client: &Client) -> RealtimeResult<()> {
        let (ack, acked) = oneshot::channel();

        self.commands
            .send(Command::Register {
                client: client.clone(),
                ack,
            })
            .await
            .map_err(|_| RealtimeError::hub_stopped())?;

        // The loop drops the ack without answering when it shuts down first.
        acked.await.map_err(|_| RealtimeError::hub_stopped())
    }

    /// Remove `client` and close its outbound queue. Idempotent, and a no-op
    /// once the hub has stopped (shutdown already closed every queue).
    pub async fn unregister(&self, client: &Client) {
        let (ack, acked) = oneshot::channel();

        let sent = self
            .commands
            .send(Command::Unregister {
                client: client.clone(),
                ack: Some(ack),
            })
            .await;

        if sent.is_ok() {
            let _ = acked.await;
        }
    }

    /// Fire-and-forget unregister for contexts that cannot await (drop guards).
    pub fn detach(&self, client: &Client) {
        let command = Command::Unregister {
            client: client.clone(),
            ack: None,
        };

        match self.commands.try_send(command) {
            Ok(()) | Err(TrySendError::Closed(_)) => {}
            Err(TrySendError::Full(command)) => {
                let commands = self.commands.clone();
                match tokio::runtime::Handle::try_current() {
                    Ok(handle) => {
                        handle.spawn(async move {
                            let _ = commands.send(command).await;
                        });
                    }
                    Err(_) => self.logger.error(format_args!(
                        "Cannot detach client {}: command queue full and no runtime",
                        client.id()
                    )),
                }
            }
        }
    }

    /// Publish without blocking. A full intake queue drops the message.
    pub fn broadcast(&self, message: Message) {
        match self.intake.try_send(message) {
            Ok(()) => {}
            Err(TrySendError::Full(message)) => {
                self.metrics.message_dropped("intake_full");
                self.logger.warn(format_args!(
                    "Broadcast channel full, dropped {} message for tenant {}",
                    message.message_type(),
                    message.tenant_id()
                ));
            }
            Err(TrySendError::Closed(message)) => {
                self.metrics.message_dropped("hub_stopped");
                self.logger.debug(format_args!(
                    "Hub stopped, dropped {} message for tenant {}",
                    message.message_type(),
                    message.tenant_id()
                ));
            }
        }
    }

    /// Number of clients registered for a tenant
    pub async fn client_count(&self, tenant_id: &str) -> usize {
        let registry = self.registry.read().await;
        registry.get(tenant_id).map(HashMap::len).unwrap_or(0)
    }

    /// Number of clients registered across all tenants
    pub async fn total_client_count(&self) -> usize {
        let registry = self.registry.read().await;
        registry.values().map(HashMap::len).sum()
    }

    /// Tenants with at least one registered client
    pub async fn active_tenants(&self) -> Vec<String> {
        let registry = self.registry.read().await;
        registry.keys().cloned().collect()
    }

    pub async fn is_registered(&self, client: &Client) -> bool {
        let registry = self.registry.read().await;
        registry
            .get(client.tenant_id())
            .is_some_and(|clients| clients.contains_key(&client.id()))
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    pub fn state(&self) -> HubState {
        *self.state.borrow()
    }

    /// Resolves once the loop has fully stopped.
    pub async fn stopped(&self) {
        let mut state = self.state.clone();
        let _ = state.wait_for(|s| *s == HubState::Stopped).await;
    }
}

impl HubLoop {
    /// Serve requests until `shutdown` fires, then close every client queue.
    pub async fn run(mut self, mut shutdown: ShutdownGuard) {
        let start = Instant::now() + self.heartbeat_interval;
        let mut heartbeat = tokio::time::interval_at(start, self.heartbeat_interval);
        heartbeat.set_missed_tick_behavior(MissedTickBehavior::Delay);

        self.logger.info(format_args!(
            "Hub running (heartbeat every {}s)",
            self.heartbeat_interval.as_secs()
        ));

        loop {
            tokio::select! {
                biased;

                _ = shutdown.wait() => break,

                Some(command) = self.commands.recv() => self.handle_command(command).await,

                Some(message) = self.intake.recv() => self.dispatch(message).await,

                _ = heartbeat.tick() => self.send_heartbeat().await,
            }
        }

        self.shutdown().await;
    }

    async fn handle_command(&self, command: Command) {
        match command {
            Command::Register { client, ack } => {
                self.register_client(client).await;
                let _ = ack.send(());
            }
            Command::Unregister { client, ack } => {
                self.unregister_client(&client).await;
                if let Some(ack) = ack {
                    let _ = ack.send(());
                }
            }
        }
    }

    async fn register_client(&self, client: Client) {
        if client.is_outbound_closed() {
            self.logger.warn(format_args!(
                "Ignoring registration of closed client {} (tenant {})",
                client.id(),
                client.tenant_id()
            ));
            return;
        }

        let mut registry = self.registry.write().await;
        let tenant_clients = registry.entry(client.tenant_id().to_string()).or_default();

        if tenant_clients.contains_key(&client.id()) {
            self.logger.debug(format_args!(
                "Client {} already registered for tenant {}",
                client.id(),
                client.tenant_id()
            ));
            return;
        }

        tenant_clients.insert(client.id(), client.clone());
        let tenant_count = tenant_clients.len();
        drop(registry);

        self.metrics.client_connected();

        self.logger.info(format_args!(
            "Client registered: client={} tenant={} user={} ({} for tenant)",
            client.id(),
            client.tenant_id(),
            client.user_id(),
            tenant_count
        ));
    }

    async fn unregister_client(&self, client: &Client) {
        let removed = {
            let mut registry = self.registry.write().await;
            let removed = registry
                .get_mut(client.tenant_id())
                .and_then(|clients| clients.remove(&client.id()));

            if registry
                .get(client.tenant_id())
                .is_some_and(HashMap::is_empty)
            {
                registry.remove(client.tenant_id());
            }

            removed
        };

        let Some(removed) = removed else {
            return;
        };

        removed.close_outbound();
        self.metrics.client_disconnected();

        self.logger.info(format_args!(
            "Client unregistered: client={} tenant={}",
            removed.id(),
            removed.tenant_id()
        ));
    }

    /// Fan `message` out to the tenant's subscribed clients. Each push is
    /// non-blocking; a full queue drops the newest frame for that client only.
    async fn dispatch(&self, message: Message) {
        let registry = self.registry.read().await;

        let Some(clients) = registry.get(message.tenant_id()) else {
            return;
        };

        let frame = match message.encode() {
            Ok(frame) => frame,
            Err(e) => {
                self.logger.error(format_args!(
                    "Failed to encode message {}: {}",
                    message.id(),
                    e
                ));
                return;
            }
        };

        let message_type = message.message_type();

        for client in clients.values() {
            if !client.is_subscribed(message_type) {
                continue;
            }

            match client.try_push(frame.clone()) {
                PushOutcome::Sent => self.metrics.message_sent(frame.len()),
                PushOutcome::Full => {
                    self.metrics.message_dropped("client_full");
                    self.logger.warn(format_args!(
                        "Client send buffer full, dropped {} message for client {}",
                        message_type,
                        client.id()
                    ));
                }
                PushOutcome::Closed => {
                    self.metrics.message_dropped("client_closed");
                    self.logger.debug(format_args!(
                        "Client {} receiver gone, dropped {} message",
                        client.id(),
                        message_type
                    ));
                }
            }
        }
    }

    /// Heartbeat to every connected client, ignoring subscriptions. Full
    /// queues are skipped.
    async fn send_heartbeat(&self) {
        let registry = self.registry.read().await;

        for (tenant_id, clients) in registry.iter() {
            let frame = match Message::heartbeat(tenant_id.as_str()).encode() {
                Ok(frame) => frame,
                Err(e) => {
                    self.logger
                        .error(format_args!("Failed to encode heartbeat: {}", e));
                    return;
                }
            };

            for client in clients.values() {
                match client.try_push(frame.clone()) {
                    PushOutcome::Sent => self.metrics.heartbeat_sent(),
                    PushOutcome::Full | PushOutcome::Closed => {
                        self.logger.debug(format_args!(
                            "Skipped heartbeat for client {}",
                            client.id()
                        ));
                    }
                }
            }
        }
    }

    async fn shutdown(mut self) {
        self.state.send_replace(HubState::ShuttingDown);
        self.logger.info(format_args!("Hub shutting down"));

        // Refuse new work before draining so nothing registers behind us.
        self.commands.close();
        self.intake.close();

        let drained: Vec<Client> = {
            let mut registry = self.registry.write().await;
            registry
                .drain()
                .flat_map(|(_, clients)| clients.into_values())
                .collect()
        };

        let closed = drained.len();
        for client in drained {
            if client.close_outbound() {
                self.metrics.client_disconnected();
            }
        }

        // Requests that raced shutdown: registrations are refused (their ack
        // is dropped), unregistrations are already satisfied.
        while let Ok(command) = self.commands.try_recv() {
            match command {
                Command::Register { client, .. } => {
                    client.close_outbound();
                }
                Command::Unregister { ack, .. } => {
                    if let Some(ack) = ack {
                        let _ = ack.send(());
                    }
                }
            }
        }

        let mut discarded = 0usize;
        while self.intake.try_recv().is_ok() {
            self.metrics.message_dropped("hub_stopped");
            discarded += 1;
        }

        self.state.send_replace(HubState::Stopped);
        self.logger.info(format_args!(
            "Hub stopped: closed {} client queues, discarded {} pending messages",
            closed, discarded
        ));
    }
}
