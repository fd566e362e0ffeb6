//! Refresh token persistence over local storage.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::entities::RefreshToken;
use crate::domain::errors::StorageError;
use crate::domain::ports::{KeyValueStoragePort, REFRESH_TOKEN_KEY, TokenStoragePort};

/// Local storage token adapter.
#[derive(Clone)]
pub struct LocalTokenStore {
    storage: Arc<dyn KeyValueStoragePort>,
    key: String,
}

impl LocalTokenStore {
    /// Creates a store writing under the `refreshToken` key.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStoragePort>) -> Self {
        Self::with_key(storage, REFRESH_TOKEN_KEY)
    }

    /// Creates a store writing under a custom key.
    #[must_use]
    pub fn with_key(storage: Arc<dyn KeyValueStoragePort>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Persists a raw refresh token string exactly as given.
    ///
    /// # Errors
    /// Returns whatever the storage backend reports.
    pub async fn save_refresh_token(&self, token: &str) -> Result<(), StorageError> {
        self.store_token(&RefreshToken::new(token)).await
    }
}

#[async_trait]
impl TokenStoragePort for LocalTokenStore {
    async fn get_token(&self) -> Result<Option<RefreshToken>, StorageError> {
        debug!(key = %self.key, "Retrieving refresh token from local storage");

        match self.storage.get_item(&self.key).await {
            Ok(Some(value)) => Ok(Some(RefreshToken::new(value))),
            Ok(None) => {
                debug!("No refresh token stored");
                Ok(None)
            }
            Err(e) => {
                warn!(error = %e, "Failed to read refresh token");
                Err(e)
            }
        }
    }

    async fn store_token(&self, token: &RefreshToken) -> Result<(), StorageError> {
        debug!(key = %self.key, token = %token, "Storing refresh token");

        self.storage
            .set_item(&self.key, token.as_str())
            .await
            .inspect_err(|e| warn!(error = %e, "Failed to store refresh token"))?;

        debug!("Refresh token stored");
        Ok(())
    }

    async fn delete_token(&self) -> Result<(), StorageError> {
        debug!(key = %self.key, "Deleting refresh token");

        self.storage
            .remove_item(&self.key)
            .await
            .inspect_err(|e| warn!(error = %e, "Failed to delete refresh token"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockKeyValueStoragePort;
    use crate::infrastructure::storage::MemoryLocalStorage;
    use test_case::test_case;

    fn store_over(storage: &Arc<MemoryLocalStorage>) -> LocalTokenStore {
        LocalTokenStore::new(storage.clone())
    }

    #[tokio::test]
    async fn test_save_then_read_back() {
        let storage = Arc::new(MemoryLocalStorage::new());
        let store = store_over(&storage);

        store.save_refresh_token("abc123").await.unwrap();

        assert_eq!(
            storage.get_item("refreshToken").await.unwrap().as_deref(),
            Some("abc123")
        );
        assert_eq!(store.get_token().await.unwrap().unwrap().as_str(), "abc123");
    }

    #[tokio::test]
    async fn test_second_save_overwrites_first() {
        let storage = Arc::new(MemoryLocalStorage::new());
        let store = store_over(&storage);

        store.save_refresh_token("abc123").await.unwrap();
        store.save_refresh_token("xyz789").await.unwrap();

        let snapshot = storage.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.get("refreshToken").map(String::as_str), Some("xyz789"));
    }

    #[test_case(" abc123\n" ; "padded")]
    #[test_case("" ; "empty")]
    #[test_case("rt.eyJzdWIiOiI0MiJ9.sig==" ; "punctuated")]
    #[tokio::test]
    async fn test_token_round_trips_verbatim(token: &str) {
        let storage = Arc::new(MemoryLocalStorage::new());
        let store = store_over(&storage);

        store.save_refresh_token(token).await.unwrap();

        assert_eq!(
            storage.get_item("refreshToken").await.unwrap().as_deref(),
            Some(token)
        );
        assert_eq!(store.get_token().await.unwrap().unwrap().as_str(), token);
    }

    #[tokio::test]
    async fn test_backend_failure_propagates() {
        let mut backend = MockKeyValueStoragePort::new();
        backend
            .expect_set_item()
            .times(1)
            .returning(|_, _| {
                Err(StorageError::QuotaExceeded {
                    required: 10,
                    quota: 1,
                })
            });
        let store = LocalTokenStore::new(Arc::new(backend));

        let err = store.save_refresh_token("abc123").await.unwrap_err();

        assert!(err.is_quota());
    }

    #[tokio::test]
    async fn test_delete_token() {
        let storage = Arc::new(MemoryLocalStorage::new());
        let store = store_over(&storage);
        store.save_refresh_token("abc123").await.unwrap();

        store.delete_token().await.unwrap();

        assert!(store.get_token().await.unwrap().is_none());
    }
}
