//! Composition root: which implementation backs each capability.

use std::sync::Arc;

use tracing::debug;

use super::container::ServiceCollection;
use crate::application::SessionAuthService;
use crate::domain::ports::{
    AnalyticsPort, AuthPort, CouponPort, CustomerPort, ManagerPort, TransactionPort,
};
use crate::infrastructure::api::{
    HttpAnalyticsService, HttpCouponService, HttpCustomerService, HttpManagerService,
    HttpTransactionService,
};

/// Registers the application's default bindings.
pub struct ServiceRegistry;

impl ServiceRegistry {
    /// Binds every capability to its production implementation.
    ///
    /// Session state, the notification dispatcher and the token store are
    /// created per session by the container; the factories here receive them
    /// through the session context.
    pub fn register(services: &mut ServiceCollection) {
        services
            .bind_auth(|ctx| {
                Arc::new(SessionAuthService::new(
                    ctx.token_store.clone(),
                    ctx.auth_state.clone(),
                    Arc::clone(&ctx.host.clock),
                    Arc::clone(&ctx.notifications),
                )) as Arc<dyn AuthPort>
            })
            .bind_customers(|ctx| {
                Arc::new(HttpCustomerService::new(
                    ctx.host.api.clone(),
                    Arc::clone(&ctx.host.cache),
                )) as Arc<dyn CustomerPort>
            })
            .bind_transactions(|ctx| {
                Arc::new(HttpTransactionService::new(
                    ctx.host.api.clone(),
                    Arc::clone(&ctx.host.cache),
                )) as Arc<dyn TransactionPort>
            })
            .bind_coupons(|ctx| {
                Arc::new(HttpCouponService::new(
                    ctx.host.api.clone(),
                    Arc::clone(&ctx.host.cache),
                )) as Arc<dyn CouponPort>
            })
            .bind_analytics(|ctx| {
                Arc::new(HttpAnalyticsService::new(
                    ctx.host.api.clone(),
                    Arc::clone(&ctx.host.cache),
                )) as Arc<dyn AnalyticsPort>
            })
            .bind_managers(|ctx| {
                Arc::new(HttpManagerService::new(
                    ctx.host.api.clone(),
                    Arc::clone(&ctx.host.cache),
                )) as Arc<dyn ManagerPort>
            });

        debug!("Registered default service bindings");
    }
}
