//! Transactions port definition.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::errors::ServiceError;

/// Port for transaction records.
#[async_trait]
pub trait TransactionPort: Send + Sync {
    /// Lists transactions.
    async fn list_transactions(&self) -> Result<Vec<Value>, ServiceError>;

    /// Fetches one transaction.
    async fn get_transaction(&self, id: &str) -> Result<Value, ServiceError>;
}
