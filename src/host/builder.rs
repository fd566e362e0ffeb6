//! Host assembly.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use super::container::ServiceCollection;
use super::document::{DEFAULT_DOCUMENT, HostDocument, MountSelector};
use super::registry::ServiceRegistry;
use super::runtime::Host;
use super::session::HostServices;
use crate::domain::errors::StartupError;
use crate::domain::ports::{Clock, KeyValueStoragePort, NotificationPort};
use crate::infrastructure::config::{AppConfig, StorageBackend, StorageConfig};
use crate::infrastructure::{
    ApiClient, DesktopNotificationService, DisabledLocalStorage, FileLocalStorage, MemoryCache,
    MemoryLocalStorage, SystemClock,
};

type ConfigureServices = Box<dyn FnOnce(&mut ServiceCollection) + Send>;

/// A root UI component and where it is mounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootComponent {
    /// Component name.
    pub name: String,
    /// Mount selector as written by the caller.
    pub selector: String,
}

/// Assembles a [`Host`] from configuration.
pub struct HostBuilder {
    origin: String,
    document: HostDocument,
    storage: StorageConfig,
    storage_path: Option<PathBuf>,
    cache_capacity: usize,
    notification_duration: Duration,
    desktop_notifications: bool,
    root_components: Vec<RootComponent>,
    storage_override: Option<Arc<dyn KeyValueStoragePort>>,
    clock: Arc<dyn Clock>,
    notification_sink: Option<Arc<dyn NotificationPort>>,
    configure: Vec<ConfigureServices>,
}

impl HostBuilder {
    /// Creates a builder from configuration, loading the host document.
    ///
    /// # Errors
    /// Returns `Document` if a configured host document cannot be read.
    pub fn create_default(config: &AppConfig) -> Result<Self, StartupError> {
        let document = match &config.host.document {
            Some(path) => {
                debug!(path = %path.display(), "Loading host document");
                HostDocument::load(path)?
            }
            None => HostDocument::from_html(DEFAULT_DOCUMENT),
        };

        Ok(Self {
            origin: config.host.origin.clone(),
            document,
            storage: config.storage.clone(),
            storage_path: config.effective_storage_path(),
            cache_capacity: config.cache.capacity,
            notification_duration: Duration::from_secs(config.notifications.duration),
            desktop_notifications: config.notifications.desktop,
            root_components: Vec::new(),
            storage_override: None,
            clock: Arc::new(SystemClock),
            notification_sink: None,
            configure: Vec::new(),
        })
    }

    /// Mounts `component` at `selector` when the host is built.
    #[must_use]
    pub fn add_root_component(
        mut self,
        selector: impl Into<String>,
        component: impl Into<String>,
    ) -> Self {
        self.root_components.push(RootComponent {
            name: component.into(),
            selector: selector.into(),
        });
        self
    }

    /// Replaces the host document.
    #[must_use]
    pub fn with_document(mut self, document: HostDocument) -> Self {
        self.document = document;
        self
    }

    /// Uses `storage` instead of the configured backend.
    #[must_use]
    pub fn with_storage(mut self, storage: Arc<dyn KeyValueStoragePort>) -> Self {
        self.storage_override = Some(storage);
        self
    }

    /// Replaces the system clock.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replaces the notification sink.
    #[must_use]
    pub fn with_notification_sink(mut self, sink: Arc<dyn NotificationPort>) -> Self {
        self.notification_sink = Some(sink);
        self
    }

    /// Adjusts bindings after the defaults are registered.
    #[must_use]
    pub fn configure_services<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(&mut ServiceCollection) + Send + 'static,
    {
        self.configure.push(Box::new(configure));
        self
    }

    /// Builds the host.
    ///
    /// # Errors
    /// Fails if a root component's mount point is missing, the origin is
    /// invalid, or a capability is left unbound.
    pub fn build(self) -> Result<Host, StartupError> {
        self.check_mount_points()?;

        let api = ApiClient::new(&self.origin)?;
        info!(base_url = %api.base_url(), "API client configured");

        let storage = match self.storage_override {
            Some(storage) => storage,
            None => Self::storage_backend(&self.storage, self.storage_path),
        };
        let cache = Arc::new(MemoryCache::new(self.cache_capacity));
        let notification_sink: Arc<dyn NotificationPort> = match self.notification_sink {
            Some(sink) => sink,
            None => Arc::new(DesktopNotificationService::new(self.desktop_notifications)),
        };

        let host = HostServices {
            api,
            storage,
            cache,
            clock: self.clock,
            notification_sink,
            notification_duration: self.notification_duration,
        };

        let mut services = ServiceCollection::new(host);
        ServiceRegistry::register(&mut services);
        for configure in self.configure {
            configure(&mut services);
        }

        let provider = services.build()?;
        Ok(Host::new(provider, self.root_components))
    }

    fn check_mount_points(&self) -> Result<(), StartupError> {
        if self.root_components.is_empty() {
            warn!("No root components registered; nothing will be mounted");
        }

        for component in &self.root_components {
            let resolved = MountSelector::parse(&component.selector)
                .is_some_and(|selector| self.document.resolves(&selector));

            if !resolved {
                let available: Vec<&str> = self.document.ids().collect();
                debug!(selector = %component.selector, ?available, "Mount point not found");
                return Err(StartupError::mount_point_missing(
                    &component.selector,
                    &component.name,
                ));
            }
            debug!(component = %component.name, selector = %component.selector, "Mounted");
        }
        Ok(())
    }

    fn storage_backend(
        config: &StorageConfig,
        path: Option<PathBuf>,
    ) -> Arc<dyn KeyValueStoragePort> {
        match (config.backend, path) {
            (StorageBackend::File, Some(path)) => {
                info!(path = %path.display(), "Using file-backed local storage");
                Arc::new(FileLocalStorage::with_quota(path, config.quota_bytes))
            }
            (StorageBackend::File, None) => {
                warn!("Failed to determine data directory. Local storage will not persist.");
                Arc::new(MemoryLocalStorage::with_quota(config.quota_bytes))
            }
            (StorageBackend::Memory, _) => {
                Arc::new(MemoryLocalStorage::with_quota(config.quota_bytes))
            }
            (StorageBackend::Disabled, _) => {
                warn!("Local storage disabled by configuration");
                Arc::new(DisabledLocalStorage)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::StorageError;
    use crate::domain::ports::mocks::MockNotificationPort;
    use crate::domain::ports::{Capability, TokenStoragePort};
    use crate::domain::{NotificationLevel, RefreshToken};
    use crate::infrastructure::FixedClock;
    use chrono::{TimeZone, Utc};

    fn config() -> AppConfig {
        let mut config = AppConfig::default();
        config.storage.backend = StorageBackend::Memory;
        config
    }

    #[test]
    fn test_default_mounts_succeed() {
        let host = HostBuilder::create_default(&config())
            .unwrap()
            .add_root_component("#app", "App")
            .add_root_component("head::after", "HeadOutlet")
            .build()
            .unwrap();

        assert_eq!(host.root_components().len(), 2);
    }

    #[test]
    fn test_missing_mount_point_is_fatal() {
        let err = HostBuilder::create_default(&config())
            .unwrap()
            .with_document(HostDocument::from_html("<html><body></body></html>"))
            .add_root_component("#app", "App")
            .build()
            .err()
            .expect("startup must fail");

        assert!(matches!(
            err,
            StartupError::MountPointMissing { ref selector, .. } if selector == "#app"
        ));
    }

    #[test]
    fn test_commented_out_mount_point_is_fatal() {
        let result = HostBuilder::create_default(&config())
            .unwrap()
            .with_document(HostDocument::from_html(
                "<html><head></head><body><!-- <div id=\"app\"></div> --></body></html>",
            ))
            .add_root_component("#app", "App")
            .build();

        assert!(matches!(result, Err(StartupError::MountPointMissing { .. })));
    }

    #[test]
    fn test_unsupported_selector_is_missing() {
        let result = HostBuilder::create_default(&config())
            .unwrap()
            .add_root_component(".app", "App")
            .build();

        assert!(matches!(result, Err(StartupError::MountPointMissing { .. })));
    }

    #[test]
    fn test_unreadable_document_fails() {
        let mut config = config();
        config.host.document = Some(PathBuf::from("/nonexistent/fidelity/index.html"));

        assert!(matches!(
            HostBuilder::create_default(&config),
            Err(StartupError::Document(_))
        ));
    }

    #[test]
    fn test_invalid_origin_fails() {
        let mut config = config();
        config.host.origin = "file:///srv/app".to_string();

        let result = HostBuilder::create_default(&config)
            .unwrap()
            .add_root_component("#app", "App")
            .build();

        assert!(matches!(result, Err(StartupError::InvalidOrigin { .. })));
    }

    #[test]
    fn test_api_client_bound_to_origin() {
        let mut config = config();
        config.host.origin = "https://fidelity.example.com/portal/".to_string();

        let host = HostBuilder::create_default(&config).unwrap().build().unwrap();

        assert_eq!(
            host.provider().host().api.base_url().as_str(),
            "https://fidelity.example.com/"
        );
    }

    #[tokio::test]
    async fn test_disabled_storage_surfaces_on_save() {
        let mut config = config();
        config.storage.backend = StorageBackend::Disabled;

        let host = HostBuilder::create_default(&config).unwrap().build().unwrap();
        let session = host.provider().create_session();

        let err = session.token_store().save_refresh_token("abc123").await;
        assert!(matches!(err, Err(StorageError::Disabled)));
    }

    #[tokio::test]
    async fn test_file_storage_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config();
        config.storage.backend = StorageBackend::File;
        config.storage.path = Some(dir.path().join("local_storage.json"));

        let host = HostBuilder::create_default(&config).unwrap().build().unwrap();
        host.provider()
            .create_session()
            .token_store()
            .save_refresh_token("abc123")
            .await
            .unwrap();

        let raw = std::fs::read_to_string(dir.path().join("local_storage.json")).unwrap();
        assert!(raw.contains("\"refreshToken\": \"abc123\""));
    }

    #[tokio::test]
    async fn test_injected_clock_stamps_sign_in() {
        let instant = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let host = HostBuilder::create_default(&config())
            .unwrap()
            .with_clock(Arc::new(FixedClock::new(instant)))
            .build()
            .unwrap();
        let session = host.provider().create_session();

        session
            .auth()
            .accept_refresh_token(RefreshToken::new("abc123"))
            .await
            .unwrap();

        assert_eq!(session.auth_state().snapshot().authenticated_at, Some(instant));
    }

    #[tokio::test]
    async fn test_injected_sink_receives_storage_failures() {
        let mut config = config();
        config.storage.backend = StorageBackend::Disabled;
        let sink = Arc::new(MockNotificationPort::new());
        let host = HostBuilder::create_default(&config)
            .unwrap()
            .with_notification_sink(sink.clone())
            .build()
            .unwrap();
        let session = host.provider().create_session();

        let result = session
            .auth()
            .accept_refresh_token(RefreshToken::new("abc123"))
            .await;

        assert!(result.is_err());
        let sent = sink.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, NotificationLevel::Error);
    }

    #[test]
    fn test_configure_services_runs_after_defaults() {
        let host = HostBuilder::create_default(&config())
            .unwrap()
            .configure_services(|services| {
                assert!(services.is_bound(Capability::Coupons));
            })
            .build();

        assert!(host.is_ok());
    }

    #[tokio::test]
    async fn test_storage_override_is_used() {
        let storage = Arc::new(MemoryLocalStorage::new());
        let host = HostBuilder::create_default(&config())
            .unwrap()
            .with_storage(storage.clone())
            .build()
            .unwrap();

        let session = host.provider().create_session();
        session.token_store().save_refresh_token("xyz789").await.unwrap();

        assert_eq!(
            storage.snapshot().get("refreshToken").map(String::as_str),
            Some("xyz789")
        );
        assert!(session.token_store().has_token().await.unwrap());
    }
}
