use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::domain::notification::DEFAULT_NOTIFICATION_DURATION;
use crate::domain::ports::NotificationPort;
use crate::domain::{Notification, NotificationLevel};

/// Session-scoped notification queue.
///
/// Every notification is forwarded to the sink immediately and queued for
/// in-app display; the queue shows one at a time and drops each after its
/// duration has elapsed.
pub struct NotificationDispatcher {
    queue: Mutex<VecDeque<Notification>>,
    default_duration: Duration,
    sink: Arc<dyn NotificationPort>,
}

impl NotificationDispatcher {
    /// Creates a dispatcher forwarding to `sink`.
    #[must_use]
    pub fn new(sink: Arc<dyn NotificationPort>, default_duration: Duration) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            default_duration,
            sink,
        }
    }

    /// Creates a dispatcher with the default display duration.
    #[must_use]
    pub fn with_default_duration(sink: Arc<dyn NotificationPort>) -> Self {
        Self::new(sink, DEFAULT_NOTIFICATION_DURATION)
    }

    /// Queues a notification and forwards it to the sink.
    pub fn notify(
        &self,
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
    ) {
        let notification =
            Notification::new(level, title, message).with_duration(self.default_duration);
        self.sink
            .send(level, &notification.title, &notification.message);
        self.queue.lock().push_back(notification);
    }

    /// Queues an informational notification.
    pub fn info(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(NotificationLevel::Info, title, message);
    }

    /// Queues a warning.
    pub fn warn(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(NotificationLevel::Warn, title, message);
    }

    /// Queues an error.
    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(NotificationLevel::Error, title, message);
    }

    /// Advances the queue, dropping the front notification once expired.
    pub fn tick(&self) {
        let mut queue = self.queue.lock();
        if let Some(front) = queue.front_mut() {
            front.mark_displayed();
            if front.is_expired() {
                queue.pop_front();
                if let Some(next) = queue.front_mut() {
                    next.mark_displayed();
                }
            }
        }
    }

    /// Returns the notification on display, if any.
    #[must_use]
    pub fn current_notification(&self) -> Option<Notification> {
        self.queue.lock().front().cloned()
    }
}
