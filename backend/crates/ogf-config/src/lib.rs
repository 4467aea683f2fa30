mod config;
mod error;
mod hub_config;
mod log_level;
mod logging_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult, ConfigSection};
pub use hub_config::HubConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "OGF_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".ogf";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_MAX_CONNECTIONS: usize = 10000;
const MIN_MAX_CONNECTIONS: usize = 1;
const MAX_MAX_CONNECTIONS: usize = 100_000;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

pub const DEFAULT_INTAKE_CAPACITY: usize = 1024;
pub const MIN_INTAKE_CAPACITY: usize = 1;
pub const MAX_INTAKE_CAPACITY: usize = 100_000;

pub const DEFAULT_CLIENT_BUFFER_SIZE: usize = 256;
pub const MIN_CLIENT_BUFFER_SIZE: usize = 1;
pub const MAX_CLIENT_BUFFER_SIZE: usize = 10_000;

pub const DEFAULT_HEARTBEAT_INTERVAL_SECS: u64 = 30;
pub const MIN_HEARTBEAT_INTERVAL_SECS: u64 = 1;
pub const MAX_HEARTBEAT_INTERVAL_SECS: u64 = 300;

pub const DEFAULT_COMMAND_CAPACITY: usize = 64;
