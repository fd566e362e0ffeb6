use crate::domain::notification::NotificationLevel;

/// Port for delivering notifications outside the session queue.
pub trait NotificationPort: Send + Sync {
    /// Delivers a notification.
    fn send(&self, level: NotificationLevel, title: &str, body: &str);
}

#[cfg(test)]
#[allow(dead_code)]
pub mod mock {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    pub struct MockNotificationPort {
        pub notifications: Arc<Mutex<Vec<(NotificationLevel, String, String)>>>,
    }

    impl MockNotificationPort {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn sent(&self) -> Vec<(NotificationLevel, String, String)> {
            self.notifications.lock().unwrap().clone()
        }
    }

    impl NotificationPort for MockNotificationPort {
        fn send(&self, level: NotificationLevel, title: &str, body: &str) {
            self.notifications
                .lock()
                .unwrap()
                .push((level, title.to_string(), body.to_string()));
        }
    }
}
