//! Key-value storage port definition.

use async_trait::async_trait;

use crate::domain::errors::StorageError;

/// Port for client-side persistent string storage.
///
/// Semantics follow browser local storage: string keys, string values,
/// writes overwrite.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStoragePort: Send + Sync {
    /// Returns the value stored under `key`.
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing a missing key is not an error.
    async fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// Returns all stored keys.
    async fn keys(&self) -> Result<Vec<String>, StorageError>;
}
