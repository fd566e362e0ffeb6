//! Infrastructure layer with adapters for the host environment.

/// Origin-bound API client, response cache and capability services.
pub mod api;
/// Clock adapters.
pub mod clock;
/// Application configuration.
pub mod config;
/// Notification sinks.
pub mod notifications;
/// Local storage adapters.
pub mod storage;

pub use api::{ApiClient, CacheStats, MemoryCache};
pub use clock::{FixedClock, SystemClock};
pub use config::{AppConfig, CliArgs, LogLevel, StorageBackend, StorageManager};
pub use notifications::{DesktopNotificationService, LogNotificationSink};
pub use storage::{DisabledLocalStorage, FileLocalStorage, LocalTokenStore, MemoryLocalStorage};
