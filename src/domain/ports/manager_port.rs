//! Manager port definition.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::errors::ServiceError;

/// Port for manager and responsible-party records.
#[async_trait]
pub trait ManagerPort: Send + Sync {
    /// Lists managers.
    async fn list_managers(&self) -> Result<Vec<Value>, ServiceError>;

    /// Fetches one manager.
    async fn get_manager(&self, id: &str) -> Result<Value, ServiceError>;
}
