//! Session authentication service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::NotificationDispatcher;
use crate::application::state::SessionState;
use crate::domain::entities::{AuthState, RefreshToken};
use crate::domain::errors::ServiceError;
use crate::domain::ports::{AuthPort, Clock, TokenStoragePort};

/// Keeps a session's [`AuthState`] and the persisted refresh token in step.
pub struct SessionAuthService {
    token_store: Arc<dyn TokenStoragePort>,
    auth_state: SessionState<AuthState>,
    clock: Arc<dyn Clock>,
    notifications: Arc<NotificationDispatcher>,
}

impl SessionAuthService {
    /// Creates new service.
    #[must_use]
    pub fn new(
        token_store: Arc<dyn TokenStoragePort>,
        auth_state: SessionState<AuthState>,
        clock: Arc<dyn Clock>,
        notifications: Arc<NotificationDispatcher>,
    ) -> Self {
        Self {
            token_store,
            auth_state,
            clock,
            notifications,
        }
    }
}

#[async_trait]
impl AuthPort for SessionAuthService {
    async fn accept_refresh_token(&self, token: RefreshToken) -> Result<(), ServiceError> {
        debug!(token = %token, "Accepting refresh token");

        if let Err(e) = self.token_store.store_token(&token).await {
            warn!(error = %e, "Refresh token could not be persisted");
            self.notifications
                .error("Sign-in", format!("Could not save your session: {e}"));
            return Err(e.into());
        }

        let now = self.clock.now_utc();
        self.auth_state.update(|state| {
            state.refresh_token = Some(token);
            state.authenticated_at = Some(now);
        });

        info!(authenticated_at = %now, "Session authenticated");
        Ok(())
    }

    async fn restore_session(&self) -> Result<bool, ServiceError> {
        let Some(token) = self.token_store.get_token().await? else {
            debug!("No stored refresh token to restore");
            return Ok(false);
        };

        let now = self.clock.now_utc();
        self.auth_state.update(|state| {
            state.refresh_token = Some(token);
            state.authenticated_at = Some(now);
        });

        info!("Session restored from stored refresh token");
        Ok(true)
    }

    fn is_authenticated(&self) -> bool {
        self.auth_state.read(AuthState::is_authenticated)
    }
}
