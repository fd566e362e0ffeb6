//! Notification sinks with conditional compilation.

use tracing::{error, info, warn};

use crate::domain::notification::NotificationLevel;
use crate::domain::ports::NotificationPort;

/// Sink that writes notifications to the application log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotificationSink;

impl NotificationPort for LogNotificationSink {
    fn send(&self, level: NotificationLevel, title: &str, body: &str) {
        match level {
            NotificationLevel::Info | NotificationLevel::Success => {
                info!(%level, title, body, "Notification");
            }
            NotificationLevel::Warn => warn!(title, body, "Notification"),
            NotificationLevel::Error => error!(title, body, "Notification"),
        }
    }
}

/// Desktop notification service.
#[cfg(feature = "notify")]
mod notify_impl {
    use super::*;
    use notify_rust::Notification;

    /// Sink that logs and, when enabled, shows desktop notifications.
    #[derive(Debug, Clone, Default)]
    pub struct DesktopNotificationService {
        enabled: bool,
    }

    impl DesktopNotificationService {
        /// Creates the service; `enabled` turns desktop popups on.
        #[must_use]
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }
    }

    impl NotificationPort for DesktopNotificationService {
        fn send(&self, level: NotificationLevel, title: &str, body: &str) {
            LogNotificationSink.send(level, title, body);
            if !self.enabled {
                return;
            }

            let title = title.to_string();
            let body = body.to_string();

            tokio::task::spawn_blocking(move || {
                if let Err(e) = Notification::new()
                    .summary(&title)
                    .body(&body)
                    .appname("Fidelity")
                    .show()
                {
                    tracing::warn!("Failed to show notification: {}", e);
                }
            });
        }
    }
}

/// Log-only stand-in when the notify feature is disabled.
#[cfg(not(feature = "notify"))]
mod stub_impl {
    use super::*;

    /// Sink that logs and, when enabled, shows desktop notifications.
    #[derive(Debug, Clone, Default)]
    pub struct DesktopNotificationService;

    impl DesktopNotificationService {
        /// Creates the service; `enabled` turns desktop popups on.
        #[must_use]
        pub fn new(_enabled: bool) -> Self {
            Self
        }
    }

    impl NotificationPort for DesktopNotificationService {
        fn send(&self, level: NotificationLevel, title: &str, body: &str) {
            LogNotificationSink.send(level, title, body);
        }
    }
}

#[cfg(feature = "notify")]
pub use notify_impl::DesktopNotificationService;
#[cfg(not(feature = "notify"))]
pub use stub_impl::DesktopNotificationService;
