//! Per-session records.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::RefreshToken;

/// Identifier of one user session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Application-level UI state shared by everything in one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// A long-running operation is in flight.
    pub is_loading: bool,
    /// Page the session is currently showing.
    pub current_page: Option<String>,
    /// Last error surfaced to the user.
    pub last_error: Option<String>,
}

/// Authentication state of one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    /// Refresh token held by the session.
    pub refresh_token: Option<RefreshToken>,
    /// When the session accepted its current token.
    pub authenticated_at: Option<DateTime<Utc>>,
}

impl AuthState {
    /// Returns whether the session holds a token.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.refresh_token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_ids_are_unique() {
        assert_ne!(SessionId::new(), SessionId::new());
    }

    #[test]
    fn test_default_auth_state_is_anonymous() {
        let state = AuthState::default();
        assert!(!state.is_authenticated());
        assert!(state.authenticated_at.is_none());
    }
}
