//! File-backed key-value storage.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tokio::task;
use tracing::{debug, warn};

use super::quota::{DEFAULT_QUOTA_BYTES, check_quota};
use crate::domain::errors::StorageError;
use crate::domain::ports::KeyValueStoragePort;

/// Persistent storage area kept as one JSON object on disk.
///
/// The file is read on first access and rewritten on every change. A write
/// only becomes visible to readers once it has reached the disk.
pub struct FileLocalStorage {
    path: PathBuf,
    quota: usize,
    items: Mutex<Option<BTreeMap<String, String>>>,
}

impl FileLocalStorage {
    /// Creates storage backed by `path` with the default quota.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_quota(path, DEFAULT_QUOTA_BYTES)
    }

    /// Creates storage backed by `path` limited to `quota` bytes.
    #[must_use]
    pub fn with_quota(path: impl Into<PathBuf>, quota: usize) -> Self {
        Self {
            path: path.into(),
            quota,
            items: Mutex::new(None),
        }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Storage file not found, starting empty");
                return Ok(BTreeMap::new());
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&content) {
            Ok(items) => Ok(items),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Malformed storage file, starting empty"
                );
                Ok(BTreeMap::new())
            }
        }
    }

    async fn write_document(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(items)?;
        let path = self.path.clone();

        task::spawn_blocking(move || Self::persist(&path, content.as_bytes()))
            .await
            .map_err(|e| StorageError::Io(std::io::Error::other(e)))?
    }

    fn persist(path: &Path, content: &[u8]) -> Result<(), StorageError> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(content)?;
        temp_file.persist(path).map_err(|e| e.error)?;

        Ok(())
    }

    async fn modify<F>(&self, change: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut BTreeMap<String, String>) -> Result<bool, StorageError> + Send,
    {
        let mut guard = self.items.lock().await;
        let current = match guard.take() {
            Some(items) => items,
            None => self.read_document().await?,
        };

        let mut next = current.clone();
        let changed = match change(&mut next) {
            Ok(changed) => changed,
            Err(e) => {
                *guard = Some(current);
                return Err(e);
            }
        };

        if !changed {
            *guard = Some(current);
            return Ok(());
        }

        if let Err(e) = self.write_document(&next).await {
            *guard = Some(current);
            return Err(e);
        }

        *guard = Some(next);
        Ok(())
    }

    async fn read<T>(
        &self,
        f: impl FnOnce(&BTreeMap<String, String>) -> T + Send,
    ) -> Result<T, StorageError> {
        let mut guard = self.items.lock().await;
        if guard.is_none() {
            *guard = Some(self.read_document().await?);
        }
        let items = guard.get_or_insert_with(BTreeMap::new);
        Ok(f(items))
    }
}

#[async_trait]
impl KeyValueStoragePort for FileLocalStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.read(|items| items.get(key).cloned()).await
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let quota = self.quota;
        self.modify(|items| {
            check_quota(items, key, value, quota)?;
            let previous = items.insert(key.to_string(), value.to_string());
            Ok(previous.as_deref() != Some(value))
        })
        .await?;

        debug!(key, path = %self.path.display(), "Stored item");
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.modify(|items| Ok(items.remove(key).is_some())).await
    }

    async fn keys(&self) -> Result<Vec<String>, StorageError> {
        self.read(|items| items.keys().cloned().collect()).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::ports::TokenStoragePort;
    use crate::infrastructure::storage::LocalTokenStore;
    use tempfile::TempDir;

    fn storage_in(dir: &TempDir) -> FileLocalStorage {
        FileLocalStorage::new(dir.path().join("local_storage.json"))
    }

    #[tokio::test]
    async fn test_values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        storage_in(&dir).set_item("refreshToken", "abc123").await.unwrap();

        let reopened = storage_in(&dir);
        assert_eq!(
            reopened.get_item("refreshToken").await.unwrap().as_deref(),
            Some("abc123")
        );
    }

    #[tokio::test]
    async fn test_document_is_a_flat_json_object() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        storage.set_item("refreshToken", "xyz789").await.unwrap();

        let raw = std::fs::read_to_string(storage.path()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(parsed, serde_json::json!({ "refreshToken": "xyz789" }));
    }

    #[tokio::test]
    async fn test_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let storage = FileLocalStorage::new(dir.path().join("nested/area/storage.json"));

        storage.set_item("k", "v").await.unwrap();
        assert!(storage.path().exists());
    }

    #[tokio::test]
    async fn test_malformed_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        std::fs::write(storage.path(), "{ not json").unwrap();

        assert_eq!(storage.get_item("refreshToken").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_quota_failure_leaves_disk_untouched() {
        let dir = TempDir::new().unwrap();
        let storage = FileLocalStorage::with_quota(dir.path().join("s.json"), 20);
        storage.set_item("refreshToken", "abc").await.unwrap();

        let err = storage.set_item("refreshToken", "far-too-long-value").await;
        assert!(matches!(err, Err(StorageError::QuotaExceeded { .. })));

        let reopened = FileLocalStorage::new(dir.path().join("s.json"));
        assert_eq!(
            reopened.get_item("refreshToken").await.unwrap().as_deref(),
            Some("abc")
        );
    }

    #[tokio::test]
    async fn test_write_leaves_no_temporary_files() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        storage.set_item("refreshToken", "abc123").await.unwrap();
        storage.set_item("refreshToken", "xyz789").await.unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("local_storage.json")]);
    }

    #[tokio::test]
    async fn test_directory_in_place_of_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        std::fs::create_dir(storage.path()).unwrap();

        assert!(matches!(
            storage.get_item("refreshToken").await,
            Err(StorageError::Io(_))
        ));
    }

    #[tokio::test]
    async fn test_failed_write_keeps_previous_token() {
        let dir = TempDir::new().unwrap();
        let storage = Arc::new(storage_in(&dir));
        let store = LocalTokenStore::new(storage.clone());
        store.save_refresh_token("abc123").await.unwrap();

        std::fs::remove_file(storage.path()).unwrap();
        std::fs::create_dir(storage.path()).unwrap();

        let err = store.save_refresh_token("xyz789").await;
        assert!(matches!(err, Err(StorageError::Io(_))));
        assert_eq!(
            store.get_token().await.unwrap().unwrap().as_str(),
            "abc123"
        );
    }

    #[tokio::test]
    async fn test_remove_item_persists() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        storage.set_item("a", "1").await.unwrap();
        storage.set_item("b", "2").await.unwrap();
        storage.remove_item("a").await.unwrap();

        let reopened = storage_in(&dir);
        assert_eq!(reopened.keys().await.unwrap(), vec!["b".to_string()]);
    }
}
