//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::args::CliArgs;
use crate::infrastructure::api::DEFAULT_CACHE_SIZE;
use crate::infrastructure::storage::DEFAULT_QUOTA_BYTES;

pub(crate) const APP_NAME: &str = "fidelity";
pub(crate) const APP_QUALIFIER: &str = "com";
pub(crate) const APP_ORGANIZATION: &str = "fidelity";

const DEFAULT_ORIGIN: &str = "http://localhost:5000";
const STORAGE_FILE_NAME: &str = "local_storage.json";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Where local storage lives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// JSON file in the data directory.
    #[default]
    File,
    /// Process memory; nothing survives a restart.
    Memory,
    /// Every storage call fails.
    Disabled,
}

/// Application configuration.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Host configuration.
    #[serde(default)]
    pub host: HostConfig,

    /// Local storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Response cache configuration.
    #[serde(default)]
    pub cache: CacheConfig,

    /// Notification configuration.
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

/// Host configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostConfig {
    /// Origin the application is served from; the API client's base address.
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Host document. The built-in page is used when unset.
    #[serde(default)]
    pub document: Option<PathBuf>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            document: None,
        }
    }
}

/// Local storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage backend.
    #[serde(default)]
    pub backend: StorageBackend,

    /// Storage file; defaults to the data directory.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Maximum bytes of keys plus values.
    #[serde(default = "default_quota")]
    pub quota_bytes: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: None,
            quota_bytes: default_quota(),
        }
    }
}

/// Response cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum cached responses.
    #[serde(default = "default_cache_capacity")]
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: default_cache_capacity(),
        }
    }
}

/// Notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Also show notifications on the desktop.
    #[serde(default)]
    pub desktop: bool,

    /// Notification duration in seconds.
    #[serde(default = "default_notification_duration")]
    pub duration: u64,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            desktop: false,
            duration: default_notification_duration(),
        }
    }
}

fn default_origin() -> String {
    DEFAULT_ORIGIN.to_string()
}

const fn default_quota() -> usize {
    DEFAULT_QUOTA_BYTES
}

const fn default_cache_capacity() -> usize {
    DEFAULT_CACHE_SIZE
}

const fn default_notification_duration() -> u64 {
    5
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(origin) = args.origin {
            self.host.origin = origin;
        }
        if let Some(document) = args.document {
            self.host.document = Some(document);
        }
        if let Some(backend) = args.storage {
            self.storage.backend = backend;
        }
        if let Some(path) = args.storage_path {
            self.storage.path = Some(path);
        }
        if let Some(desktop) = args.desktop_notifications {
            self.notifications.desktop = desktop;
        }
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("fidelity.log"))
    }

    /// Returns default local storage file path.
    #[must_use]
    pub fn default_storage_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join(STORAGE_FILE_NAME))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }

    /// Returns effective local storage path.
    #[must_use]
    pub fn effective_storage_path(&self) -> Option<PathBuf> {
        self.storage.path.clone().or_else(Self::default_storage_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LogLevel::Info,
            host: HostConfig::default(),
            storage: StorageConfig::default(),
            cache: CacheConfig::default(),
            notifications: NotificationsConfig::default(),
        }
    }
}
