//! Origin-bound API access and response caching.

mod cache;
mod client;
mod services;

pub use cache::{CacheStats, DEFAULT_CACHE_SIZE, MemoryCache};
pub use client::ApiClient;
pub use services::{
    HttpAnalyticsService, HttpCouponService, HttpCustomerService, HttpManagerService,
    HttpTransactionService, ResourceClient,
};
