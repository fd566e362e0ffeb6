//! Domain layer with core entities, errors and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// In-app notifications.
pub mod notification;
/// Port definitions.
pub mod ports;

pub use entities::{AppState, AuthState, RefreshToken, SessionId};
pub use errors::{ServiceError, StartupError, StorageError};
pub use notification::{Notification, NotificationLevel};
pub use ports::{Capability, Clock, KeyValueStoragePort, TokenStoragePort};
