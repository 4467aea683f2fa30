use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CLIENT_BUFFER_SIZE, DEFAULT_COMMAND_CAPACITY,
    DEFAULT_HEARTBEAT_INTERVAL_SECS, DEFAULT_INTAKE_CAPACITY, MAX_CLIENT_BUFFER_SIZE,
    MAX_HEARTBEAT_INTERVAL_SECS, MAX_INTAKE_CAPACITY, MIN_CLIENT_BUFFER_SIZE,
    MIN_HEARTBEAT_INTERVAL_SECS, MIN_INTAKE_CAPACITY,
};

use std::time::Duration;

use serde::Deserialize;

/// Realtime hub sizing and timing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    /// Bounded intake queue shared by all producers
    pub intake_capacity: usize,
    /// Bounded outbound queue per connected client
    pub client_buffer_size: usize,
    pub heartbeat_interval_secs: u64,
    /// Register/unregister request queue
    pub command_capacity: usize,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            intake_capacity: DEFAULT_INTAKE_CAPACITY,
            client_buffer_size: DEFAULT_CLIENT_BUFFER_SIZE,
            heartbeat_interval_secs: DEFAULT_HEARTBEAT_INTERVAL_SECS,
            command_capacity: DEFAULT_COMMAND_CAPACITY,
        }
    }
}

impl HubConfig {
    pub fn heartbeat_interval(&self) -> Duration {
        Duration::from_secs(self.heartbeat_interval_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.intake_capacity < MIN_INTAKE_CAPACITY || self.intake_capacity > MAX_INTAKE_CAPACITY
        {
            return Err(ConfigError::hub(format!(
                "hub.intake_capacity must be {}-{}, got {}",
                MIN_INTAKE_CAPACITY, MAX_INTAKE_CAPACITY, self.intake_capacity
            )));
        }

        if self.client_buffer_size < MIN_CLIENT_BUFFER_SIZE
            || self.client_buffer_size > MAX_CLIENT_BUFFER_SIZE
        {
            return Err(ConfigError::hub(format!(
                "hub.client_buffer_size must be {}-{}, got {}",
                MIN_CLIENT_BUFFER_SIZE, MAX_CLIENT_BUFFER_SIZE, self.client_buffer_size
            )));
        }

        if self.heartbeat_interval_secs < MIN_HEARTBEAT_INTERVAL_SECS
            || self.heartbeat_interval_secs > MAX_HEARTBEAT_INTERVAL_SECS
        {
            return Err(ConfigError::hub(format!(
                "hub.heartbeat_interval_secs must be {}-{}, got {}",
                MIN_HEARTBEAT_INTERVAL_SECS,
                MAX_HEARTBEAT_INTERVAL_SECS,
                self.heartbeat_interval_secs
            )));
        }

        if self.command_capacity == 0 {
            return Err(ConfigError::hub("hub.command_capacity must be at least 1"));
        }

        Ok(())
    }
}
