//! Customer records port definition.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::errors::ServiceError;

/// Port for customer records.
#[async_trait]
pub trait CustomerPort: Send + Sync {
    /// Lists customer records.
    async fn list_customers(&self) -> Result<Vec<Value>, ServiceError>;

    /// Fetches one customer record.
    async fn get_customer(&self, id: &str) -> Result<Value, ServiceError>;
}
