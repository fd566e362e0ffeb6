//! Application layer with session state and session services.

/// Session services.
pub mod services;
/// Session-scoped state holders.
pub mod state;

pub use services::{NotificationDispatcher, SessionAuthService};
pub use state::SessionState;
