//! Application configuration.

/// Configuration file model.
pub mod app_config;
/// Command line arguments.
pub mod args;
/// Configuration file loading.
pub mod storage;

pub use app_config::{
    AppConfig, CacheConfig, HostConfig, LogLevel, NotificationsConfig, StorageBackend,
    StorageConfig,
};
pub use args::CliArgs;
pub use storage::{ConfigError, StorageManager};
