//! In-memory key-value storage.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::trace;

use super::quota::{DEFAULT_QUOTA_BYTES, check_quota};
use crate::domain::errors::StorageError;
use crate::domain::ports::KeyValueStoragePort;

/// Volatile storage area; contents are lost when dropped.
#[derive(Debug)]
pub struct MemoryLocalStorage {
    items: RwLock<BTreeMap<String, String>>,
    quota: usize,
}

impl MemoryLocalStorage {
    /// Creates empty storage with the default quota.
    #[must_use]
    pub fn new() -> Self {
        Self::with_quota(DEFAULT_QUOTA_BYTES)
    }

    /// Creates empty storage limited to `quota` bytes.
    #[must_use]
    pub fn with_quota(quota: usize) -> Self {
        Self {
            items: RwLock::new(BTreeMap::new()),
            quota,
        }
    }

    /// Returns a copy of every stored item.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.items.read().clone()
    }
}

impl Default for MemoryLocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStoragePort for MemoryLocalStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.read().get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.write();
        check_quota(&items, key, value, self.quota)?;
        items.insert(key.to_string(), value.to_string());
        trace!(key, "Stored item in memory");
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.write().remove(key);
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.items.read().keys().cloned().collect())
    }
}

/// Storage that refuses every operation, as when the user disables local storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledLocalStorage;

#[async_trait]
impl KeyValueStoragePort for DisabledLocalStorage {
    async fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Disabled)
    }

    async fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Disabled)
    }

    async fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Disabled)
    }

    async fn keys(&self) -> Result<Vec<String>, StorageError> {
        Err(StorageError::Disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_then_get() {
        let storage = MemoryLocalStorage::new();
        storage.set_item("theme", "dark").await.unwrap();

        assert_eq!(
            storage.get_item("theme").await.unwrap().as_deref(),
            Some("dark")
        );
        assert_eq!(storage.get_item("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_quota_rejection_keeps_old_value() {
        let storage = MemoryLocalStorage::with_quota(16);
        storage.set_item("key", "small").await.unwrap();

        let err = storage.set_item("key", "a much longer value").await;

        assert!(matches!(err, Err(StorageError::QuotaExceeded { .. })));
        assert_eq!(storage.get_item("key").await.unwrap().as_deref(), Some("small"));
    }

    #[tokio::test]
    async fn test_remove_missing_key_is_ok() {
        let storage = MemoryLocalStorage::new();
        assert!(storage.remove_item("nothing").await.is_ok());
        assert!(storage.keys().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_disabled_storage_fails_every_call() {
        let storage = DisabledLocalStorage;

        assert!(matches!(
            storage.set_item("k", "v").await,
            Err(StorageError::Disabled)
        ));
        assert!(matches!(
            storage.get_item("k").await,
            Err(StorageError::Disabled)
        ));
    }
}
