//! Authentication port definition.

use async_trait::async_trait;

use crate::domain::entities::RefreshToken;
use crate::domain::errors::ServiceError;

/// Port for session authentication.
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Adopts a newly issued refresh token for the session and persists it.
    async fn accept_refresh_token(&self, token: RefreshToken) -> Result<(), ServiceError>;

    /// Loads a previously persisted token into the session.
    ///
    /// Returns whether a token was found.
    async fn restore_session(&self) -> Result<bool, ServiceError>;

    /// Returns whether the session currently holds a token.
    fn is_authenticated(&self) -> bool;
}
