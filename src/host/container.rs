//! Capability bindings and session creation.

use std::sync::Arc;

use tracing::debug;

use super::session::{HostServices, Session, SessionContext};
use crate::domain::errors::StartupError;
use crate::domain::ports::{
    AnalyticsPort, AuthPort, Capability, CouponPort, CustomerPort, ManagerPort, TransactionPort,
};

/// Builds one capability instance for a session.
pub type Factory<T> = Arc<dyn Fn(&SessionContext) -> Arc<T> + Send + Sync>;

/// Capability bindings under construction.
///
/// Binding a capability twice replaces the earlier binding, so each
/// capability has at most one implementation.
pub struct ServiceCollection {
    host: HostServices,
    auth: Option<Factory<dyn AuthPort>>,
    customers: Option<Factory<dyn CustomerPort>>,
    transactions: Option<Factory<dyn TransactionPort>>,
    coupons: Option<Factory<dyn CouponPort>>,
    analytics: Option<Factory<dyn AnalyticsPort>>,
    managers: Option<Factory<dyn ManagerPort>>,
}

impl ServiceCollection {
    /// Creates an empty collection over host-wide services.
    #[must_use]
    pub fn new(host: HostServices) -> Self {
        Self {
            host,
            auth: None,
            customers: None,
            transactions: None,
            coupons: None,
            analytics: None,
            managers: None,
        }
    }

    /// Returns the host-wide services.
    #[must_use]
    pub const fn host(&self) -> &HostServices {
        &self.host
    }

    /// Binds the authentication capability.
    pub fn bind_auth<F>(&mut self, factory: F) -> &mut Self
    where
        F: Fn(&SessionContext) -> Arc<dyn AuthPort> + Send + Sync + 'static,
    {
        self.auth = Some(Arc::new(factory));
        self
    }

    /// Binds the customer records capability.
    pub fn bind_customers<F>(&mut self, factory: F) -> &mut Self
    where
        F: Fn(&SessionContext) -> Arc<dyn CustomerPort> + Send + Sync + 'static,
    {
        self.customers = Some(Arc::new(factory));
        self
    }

    /// Binds the transactions capability.
    pub fn bind_transactions<F>(&mut self, factory: F) -> &mut Self
    where
        F: Fn(&SessionContext) -> Arc<dyn TransactionPort> + Send + Sync + 'static,
    {
        self.transactions = Some(Arc::new(factory));
        self
    }

    /// Binds the coupons capability.
    pub fn bind_coupons<F>(&mut self, factory: F) -> &mut Self
    where
        F: Fn(&SessionContext) -> Arc<dyn CouponPort> + Send + Sync + 'static,
    {
        self.coupons = Some(Arc::new(factory));
        self
    }

    /// Binds the analytics capability.
    pub fn bind_analytics<F>(&mut self, factory: F) -> &mut Self
    where
        F: Fn(&SessionContext) -> Arc<dyn AnalyticsPort> + Send + Sync + 'static,
    {
        self.analytics = Some(Arc::new(factory));
        self
    }

    /// Binds the manager capability.
    pub fn bind_managers<F>(&mut self, factory: F) -> &mut Self
    where
        F: Fn(&SessionContext) -> Arc<dyn ManagerPort> + Send + Sync + 'static,
    {
        self.managers = Some(Arc::new(factory));
        self
    }

    /// Returns whether `capability` has a binding.
    #[must_use]
    pub const fn is_bound(&self, capability: Capability) -> bool {
        match capability {
            Capability::Auth => self.auth.is_some(),
            Capability::Customers => self.customers.is_some(),
            Capability::Transactions => self.transactions.is_some(),
            Capability::Coupons => self.coupons.is_some(),
            Capability::Analytics => self.analytics.is_some(),
            Capability::Managers => self.managers.is_some(),
        }
    }

    /// Freezes the bindings.
    ///
    /// # Errors
    /// Returns `ServiceNotRegistered` naming the first unbound capability.
    pub fn build(self) -> Result<ServiceProvider, StartupError> {
        fn require<T: ?Sized>(
            factory: Option<Factory<T>>,
            capability: Capability,
        ) -> Result<Factory<T>, StartupError> {
            factory.ok_or(StartupError::ServiceNotRegistered(capability))
        }

        let provider = ServiceProvider {
            host: self.host,
            auth: require(self.auth, Capability::Auth)?,
            customers: require(self.customers, Capability::Customers)?,
            transactions: require(self.transactions, Capability::Transactions)?,
            coupons: require(self.coupons, Capability::Coupons)?,
            analytics: require(self.analytics, Capability::Analytics)?,
            managers: require(self.managers, Capability::Managers)?,
        };

        debug!(capabilities = Capability::ALL.len(), "Service provider built");
        Ok(provider)
    }
}

/// Frozen bindings that create sessions.
#[derive(Clone)]
pub struct ServiceProvider {
    host: HostServices,
    auth: Factory<dyn AuthPort>,
    customers: Factory<dyn CustomerPort>,
    transactions: Factory<dyn TransactionPort>,
    coupons: Factory<dyn CouponPort>,
    analytics: Factory<dyn AnalyticsPort>,
    managers: Factory<dyn ManagerPort>,
}

impl ServiceProvider {
    /// Returns the host-wide services.
    #[must_use]
    pub const fn host(&self) -> &HostServices {
        &self.host
    }

    /// Creates a session with fresh state and one instance of every capability.
    #[must_use]
    pub fn create_session(&self) -> Session {
        let context = SessionContext::new(self.host.clone());

        Session::new(
            context.clone(),
            (self.auth)(&context),
            (self.customers)(&context),
            (self.transactions)(&context),
            (self.coupons)(&context),
            (self.analytics)(&context),
            (self.managers)(&context),
        )
    }
}
