mod client;
mod property_tests;

use crate::{Hub, HubLogger, HubLoop, MetricsSnapshot, ShutdownCoordinator};

use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use bytes::Bytes;
use log::Level;
use ogf_config::HubConfig;
use tokio::task::JoinHandle;

/// Long enough that no heartbeat fires during a test that does not want one.
pub(crate) const QUIET_HEARTBEAT_SECS: u64 = 300;

#[derive(Default)]
pub(crate) struct RecordingLogger {
    entries: Mutex<Vec<(Level, String)>>,
}

impl RecordingLogger {
    pub(crate) fn count(&self, level: Level) -> usize {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .count()
    }

    pub(crate) fn contains(&self, level: Level, needle: &str) -> bool {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .any(|(l, message)| *l == level && message.contains(needle))
    }
}

impl HubLogger for RecordingLogger {
    fn log(&self, level: Level, message: fmt::Arguments<'_>) {
        self.entries.lock().unwrap().push((level, message.to_string()));
    }
}

pub(crate) fn hub_config(client_buffer_size: usize, heartbeat_interval_secs: u64) -> HubConfig {
    HubConfig {
        client_buffer_size,
        heartbeat_interval_secs,
        ..HubConfig::default()
    }
}

pub(crate) struct TestHub {
    pub hub: Hub,
    pub shutdown: ShutdownCoordinator,
    pub logger: Arc<RecordingLogger>,
    pub task: JoinHandle<()>,
}

pub(crate) fn spawn_hub(config: &HubConfig) -> TestHub {
    let logger = Arc::new(RecordingLogger::default());
    let (hub, hub_loop) = Hub::new(config, logger.clone());
    let shutdown = ShutdownCoordinator::new();
    let task = spawn_loop(hub_loop, &shutdown);

    TestHub {
        hub,
        shutdown,
        logger,
        task,
    }
}

pub(crate) fn spawn_loop(hub_loop: HubLoop, shutdown: &ShutdownCoordinator) -> JoinHandle<()> {
    tokio::spawn(hub_loop.run(shutdown.subscribe_guard()))
}

/// Poll the hub's metrics until `done` holds, failing after two seconds.
pub(crate) async fn wait_for_metrics(
    hub: &Hub,
    done: impl Fn(&MetricsSnapshot) -> bool,
) -> MetricsSnapshot {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);

    loop {
        let snapshot = hub.metrics();
        if done(&snapshot) {
            return snapshot;
        }
        assert!(
            tokio::time::Instant::now() < deadline,
            "metrics never settled: {:?}",
            snapshot
        );
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

pub(crate) fn decode(frame: &Bytes) -> serde_json::Value {
    serde_json::from_slice(frame).unwrap()
}
