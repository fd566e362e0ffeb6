//! Analytics port definition.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::errors::ServiceError;

/// Port for analytics reports.
#[async_trait]
pub trait AnalyticsPort: Send + Sync {
    /// Fetches a named report.
    async fn get_report(&self, name: &str) -> Result<Value, ServiceError>;
}
