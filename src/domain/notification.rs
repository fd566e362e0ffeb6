use std::fmt;
use std::time::{Duration, Instant};

/// Default time a notification stays on screen once shown.
pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_secs(5);

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Informational.
    Info,
    /// Completed action.
    Success,
    /// Recoverable problem.
    Warn,
    /// Failed action.
    Error,
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Success => write!(f, "success"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// One in-app notification.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Severity.
    pub level: NotificationLevel,
    /// Short heading.
    pub title: String,
    /// Body text.
    pub message: String,
    /// When it was queued.
    pub created_at: Instant,
    /// When it was first shown.
    pub displayed_at: Option<Instant>,
    /// How long it stays once shown.
    pub duration: Duration,
}

impl Notification {
    /// Creates a notification with the default duration.
    #[must_use]
    pub fn new(
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
            created_at: Instant::now(),
            displayed_at: None,
            duration: DEFAULT_NOTIFICATION_DURATION,
        }
    }

    /// Sets the display duration.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Returns whether it has been shown for longer than its duration.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.displayed_at
            .is_some_and(|start| start.elapsed() > self.duration)
    }

    /// Records the first time it is shown.
    pub fn mark_displayed(&mut self) {
        if self.displayed_at.is_none() {
            self.displayed_at = Some(Instant::now());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::new(NotificationLevel::Success, "Coupon", "Redeemed");
        assert_eq!(n.level, NotificationLevel::Success);
        assert_eq!(n.title, "Coupon");
        assert_eq!(n.duration, DEFAULT_NOTIFICATION_DURATION);
        assert!(!n.is_expired());
    }

    #[test]
    fn test_notification_expiry() {
        let mut n = Notification::new(NotificationLevel::Info, "Title", "Message")
            .with_duration(Duration::from_nanos(1));
        n.mark_displayed();
        std::thread::sleep(Duration::from_millis(1));
        assert!(n.is_expired());
    }
}
