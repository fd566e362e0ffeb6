//! Host startup error types.

use thiserror::Error;

use super::StorageError;
use crate::domain::ports::Capability;

/// Fatal errors raised while assembling the host.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum StartupError {
    #[error("mount point '{selector}' for component '{component}' not found in host document")]
    MountPointMissing { selector: String, component: String },

    #[error("no implementation registered for capability '{0}'")]
    ServiceNotRegistered(Capability),

    #[error("invalid application origin '{origin}': {reason}")]
    InvalidOrigin { origin: String, reason: String },

    #[error("failed to create HTTP client: {0}")]
    HttpClient(String),

    #[error("failed to load host document: {0}")]
    Document(#[from] std::io::Error),

    #[error("storage backend unavailable: {0}")]
    Storage(#[from] StorageError),
}

impl StartupError {
    /// Creates mount point missing error.
    #[must_use]
    pub fn mount_point_missing(selector: impl Into<String>, component: impl Into<String>) -> Self {
        Self::MountPointMissing {
            selector: selector.into(),
            component: component.into(),
        }
    }

    /// Creates invalid origin error.
    #[must_use]
    pub fn invalid_origin(origin: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOrigin {
            origin: origin.into(),
            reason: reason.into(),
        }
    }
}
