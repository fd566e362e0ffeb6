//! Client-side storage error types.

use thiserror::Error;

/// Failures surfaced by key-value storage backends.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum StorageError {
    #[error("storage quota exceeded: {required} bytes needed, {quota} allowed")]
    QuotaExceeded { required: usize, quota: usize },

    #[error("local storage is disabled")]
    Disabled,

    #[error("failed to serialize storage document: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl StorageError {
    /// Returns whether the write may succeed after the caller frees space.
    #[must_use]
    pub const fn is_quota(&self) -> bool {
        matches!(self, Self::QuotaExceeded { .. })
    }
}
