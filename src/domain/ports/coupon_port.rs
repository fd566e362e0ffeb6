//! Coupons port definition.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::errors::ServiceError;

/// Port for coupons.
#[async_trait]
pub trait CouponPort: Send + Sync {
    /// Lists coupons.
    async fn list_coupons(&self) -> Result<Vec<Value>, ServiceError>;

    /// Fetches one coupon.
    async fn get_coupon(&self, id: &str) -> Result<Value, ServiceError>;
}
