//! HTTP-backed capability services.
//!
//! Each service is a thin read-only view of one resource collection under
//! `api/` on the application origin. Responses go through the shared
//! [`MemoryCache`].

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::{ApiClient, MemoryCache};
use crate::domain::errors::ServiceError;
use crate::domain::ports::{AnalyticsPort, CouponPort, CustomerPort, ManagerPort, TransactionPort};

/// Cached JSON access to one collection.
#[derive(Clone)]
pub struct ResourceClient {
    api: ApiClient,
    cache: Arc<MemoryCache>,
    collection: &'static str,
}

impl ResourceClient {
    /// Creates a client for `api/<collection>`.
    #[must_use]
    pub fn new(api: ApiClient, cache: Arc<MemoryCache>, collection: &'static str) -> Self {
        Self {
            api,
            cache,
            collection,
        }
    }

    fn collection_url(&self) -> Result<Url, ServiceError> {
        self.api.url(&format!("api/{}", self.collection))
    }

    fn item_url(&self, id: &str) -> Result<Url, ServiceError> {
        let invalid = || ServiceError::InvalidPath {
            path: format!("api/{}/{id}", self.collection),
        };
        if id.trim().is_empty() {
            return Err(invalid());
        }

        let mut url = self.collection_url()?;
        url.path_segments_mut().map_err(|()| invalid())?.push(id);
        Ok(url)
    }

    async fn fetch(&self, url: Url) -> Result<Arc<Value>, ServiceError> {
        if let Some(cached) = self.cache.get(url.as_str()) {
            return Ok(cached);
        }

        let value: Value = self.api.get_json(&url).await?;
        Ok(self.cache.insert(url.as_str(), value))
    }

    /// Fetches the whole collection.
    ///
    /// # Errors
    /// Returns `Decode` if the body is not a JSON array.
    pub async fn list(&self) -> Result<Vec<Value>, ServiceError> {
        let url = self.collection_url()?;
        let value = self.fetch(url.clone()).await?;

        match value.as_ref() {
            Value::Array(items) => {
                debug!(collection = self.collection, count = items.len(), "Listed resources");
                Ok(items.clone())
            }
            _ => Err(ServiceError::Decode {
                path: url.path().to_string(),
                message: "expected a JSON array".to_string(),
            }),
        }
    }

    /// Fetches one item of the collection.
    ///
    /// # Errors
    /// Returns error if the id is blank or the request fails.
    pub async fn get(&self, id: &str) -> Result<Value, ServiceError> {
        let url = self.item_url(id)?;
        Ok(self.fetch(url).await?.as_ref().clone())
    }
}

/// Customer records over HTTP.
pub struct HttpCustomerService {
    resources: ResourceClient,
}

impl HttpCustomerService {
    /// Creates the service.
    #[must_use]
    pub fn new(api: ApiClient, cache: Arc<MemoryCache>) -> Self {
        Self {
            resources: ResourceClient::new(api, cache, "customers"),
        }
    }
}

#[async_trait]
impl CustomerPort for HttpCustomerService {
    async fn list_customers(&self) -> Result<Vec<Value>, ServiceError> {
        self.resources.list().await
    }

    async fn get_customer(&self, id: &str) -> Result<Value, ServiceError> {
        self.resources.get(id).await
    }
}

/// Transactions over HTTP.
pub struct HttpTransactionService {
    resources: ResourceClient,
}

impl HttpTransactionService {
    /// Creates the service.
    #[must_use]
    pub fn new(api: ApiClient, cache: Arc<MemoryCache>) -> Self {
        Self {
            resources: ResourceClient::new(api, cache, "transactions"),
        }
    }
}

#[async_trait]
impl TransactionPort for HttpTransactionService {
    async fn list_transactions(&self) -> Result<Vec<Value>, ServiceError> {
        self.resources.list().await
    }

    async fn get_transaction(&self, id: &str) -> Result<Value, ServiceError> {
        self.resources.get(id).await
    }
}

/// Coupons over HTTP.
pub struct HttpCouponService {
    resources: ResourceClient,
}

impl HttpCouponService {
    /// Creates the service.
    #[must_use]
    pub fn new(api: ApiClient, cache: Arc<MemoryCache>) -> Self {
        Self {
            resources: ResourceClient::new(api, cache, "coupons"),
        }
    }
}

#[async_trait]
impl CouponPort for HttpCouponService {
    async fn list_coupons(&self) -> Result<Vec<Value>, ServiceError> {
        self.resources.list().await
    }

    async fn get_coupon(&self, id: &str) -> Result<Value, ServiceError> {
        self.resources.get(id).await
    }
}

/// Analytics reports over HTTP.
pub struct HttpAnalyticsService {
    resources: ResourceClient,
}

impl HttpAnalyticsService {
    /// Creates the service.
    #[must_use]
    pub fn new(api: ApiClient, cache: Arc<MemoryCache>) -> Self {
        Self {
            resources: ResourceClient::new(api, cache, "analytics"),
        }
    }
}

#[async_trait]
impl AnalyticsPort for HttpAnalyticsService {
    async fn get_report(&self, name: &str) -> Result<Value, ServiceError> {
        self.resources.get(name).await
    }
}

/// Manager and responsible-party records over HTTP.
pub struct HttpManagerService {
    resources: ResourceClient,
}

impl HttpManagerService {
    /// Creates the service.
    #[must_use]
    pub fn new(api: ApiClient, cache: Arc<MemoryCache>) -> Self {
        Self {
            resources: ResourceClient::new(api, cache, "managers"),
        }
    }
}

#[async_trait]
impl ManagerPort for HttpManagerService {
    async fn list_managers(&self) -> Result<Vec<Value>, ServiceError> {
        self.resources.list().await
    }

    async fn get_manager(&self, id: &str) -> Result<Value, ServiceError> {
        self.resources.get(id).await
    }
}
