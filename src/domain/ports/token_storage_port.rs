//! Token storage port definition.

use async_trait::async_trait;

use crate::domain::entities::RefreshToken;
use crate::domain::errors::StorageError;

/// Storage key the refresh token lives under.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Port for refresh token persistence.
#[async_trait]
pub trait TokenStoragePort: Send + Sync {
    /// Retrieves stored token.
    async fn get_token(&self) -> Result<Option<RefreshToken>, StorageError>;

    /// Stores token, overwriting the previous one.
    async fn store_token(&self, token: &RefreshToken) -> Result<(), StorageError>;

    /// Deletes stored token.
    async fn delete_token(&self) -> Result<(), StorageError>;

    /// Checks if token exists.
    async fn has_token(&self) -> Result<bool, StorageError> {
        Ok(self.get_token().await?.is_some())
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock token storage for testing.
    pub struct MockTokenStorage {
        token: Arc<RwLock<Option<RefreshToken>>>,
    }

    impl MockTokenStorage {
        /// Creates empty mock storage.
        pub fn new() -> Self {
            Self {
                token: Arc::new(RwLock::new(None)),
            }
        }

        /// Creates mock storage with token.
        pub fn with_token(token: RefreshToken) -> Self {
            Self {
                token: Arc::new(RwLock::new(Some(token))),
            }
        }
    }

    impl Default for MockTokenStorage {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl TokenStoragePort for MockTokenStorage {
        async fn get_token(&self) -> Result<Option<RefreshToken>, StorageError> {
            Ok(self.token.read().await.clone())
        }

        async fn store_token(&self, token: &RefreshToken) -> Result<(), StorageError> {
            *self.token.write().await = Some(token.clone());
            Ok(())
        }

        async fn delete_token(&self) -> Result<(), StorageError> {
            *self.token.write().await = None;
            Ok(())
        }
    }
}
