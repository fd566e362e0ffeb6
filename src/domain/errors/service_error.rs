//! Capability service error types.

use thiserror::Error;

use super::StorageError;

/// Errors returned by session services.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ServiceError {
    #[error("network error: {message}")]
    Network { message: String },

    #[error("request to '{path}' failed with status {status}")]
    Status { path: String, status: u16 },

    #[error("failed to decode response from '{path}': {message}")]
    Decode { path: String, message: String },

    #[error("invalid request path '{path}'")]
    InvalidPath { path: String },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ServiceError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Returns whether the server rejected the request as not found.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}
