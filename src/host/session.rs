//! Per-session service scope.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::application::{NotificationDispatcher, SessionState};
use crate::domain::entities::{AppState, AuthState, SessionId};
use crate::domain::ports::{
    AnalyticsPort, AuthPort, Clock, CouponPort, CustomerPort, KeyValueStoragePort, ManagerPort,
    NotificationPort, TransactionPort,
};
use crate::infrastructure::storage::LocalTokenStore;
use crate::infrastructure::{ApiClient, MemoryCache};

/// Services shared by every session of one host.
#[derive(Clone)]
pub struct HostServices {
    /// HTTP client bound to the application origin.
    pub api: ApiClient,
    /// Local storage backend.
    pub storage: Arc<dyn KeyValueStoragePort>,
    /// Response cache.
    pub cache: Arc<MemoryCache>,
    /// Clock.
    pub clock: Arc<dyn Clock>,
    /// Where notifications go besides the session queue.
    pub notification_sink: Arc<dyn NotificationPort>,
    /// How long a notification stays on screen.
    pub notification_duration: Duration,
}

/// Session-scoped values capability factories build from.
#[derive(Clone)]
pub struct SessionContext {
    /// Session identifier.
    pub id: SessionId,
    /// Application state of this session.
    pub app_state: SessionState<AppState>,
    /// Authentication state of this session.
    pub auth_state: SessionState<AuthState>,
    /// Notification dispatcher of this session.
    pub notifications: Arc<NotificationDispatcher>,
    /// Refresh token persistence helper of this session.
    pub token_store: Arc<LocalTokenStore>,
    /// Host-wide services.
    pub host: HostServices,
}

impl SessionContext {
    pub(crate) fn new(host: HostServices) -> Self {
        let notifications = NotificationDispatcher::new(
            Arc::clone(&host.notification_sink),
            host.notification_duration,
        );
        Self {
            id: SessionId::new(),
            app_state: SessionState::default(),
            auth_state: SessionState::default(),
            notifications: Arc::new(notifications),
            token_store: Arc::new(LocalTokenStore::new(Arc::clone(&host.storage))),
            host,
        }
    }
}

/// One user session: every capability resolved exactly once.
///
/// Cloning a session shares its instances; resolving a capability any number
/// of times within the session yields the same instance.
#[derive(Clone)]
pub struct Session {
    context: SessionContext,
    auth: Arc<dyn AuthPort>,
    customers: Arc<dyn CustomerPort>,
    transactions: Arc<dyn TransactionPort>,
    coupons: Arc<dyn CouponPort>,
    analytics: Arc<dyn AnalyticsPort>,
    managers: Arc<dyn ManagerPort>,
}

impl Session {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        context: SessionContext,
        auth: Arc<dyn AuthPort>,
        customers: Arc<dyn CustomerPort>,
        transactions: Arc<dyn TransactionPort>,
        coupons: Arc<dyn CouponPort>,
        analytics: Arc<dyn AnalyticsPort>,
        managers: Arc<dyn ManagerPort>,
    ) -> Self {
        debug!(session = %context.id, "Session created");
        Self {
            context,
            auth,
            customers,
            transactions,
            coupons,
            analytics,
            managers,
        }
    }

    /// Returns the session identifier.
    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.context.id
    }

    /// Returns the values the capability factories were built from.
    #[must_use]
    pub const fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Returns the application state of this session.
    #[must_use]
    pub const fn app_state(&self) -> &SessionState<AppState> {
        &self.context.app_state
    }

    /// Returns the authentication state of this session.
    #[must_use]
    pub const fn auth_state(&self) -> &SessionState<AuthState> {
        &self.context.auth_state
    }

    /// Returns the notification dispatcher of this session.
    #[must_use]
    pub fn notifications(&self) -> Arc<NotificationDispatcher> {
        Arc::clone(&self.context.notifications)
    }

    /// Returns the refresh token persistence helper.
    #[must_use]
    pub fn token_store(&self) -> Arc<LocalTokenStore> {
        Arc::clone(&self.context.token_store)
    }

    /// Returns the authentication capability.
    #[must_use]
    pub fn auth(&self) -> Arc<dyn AuthPort> {
        Arc::clone(&self.auth)
    }

    /// Returns the customer records capability.
    #[must_use]
    pub fn customers(&self) -> Arc<dyn CustomerPort> {
        Arc::clone(&self.customers)
    }

    /// Returns the transactions capability.
    #[must_use]
    pub fn transactions(&self) -> Arc<dyn TransactionPort> {
        Arc::clone(&self.transactions)
    }

    /// Returns the coupons capability.
    #[must_use]
    pub fn coupons(&self) -> Arc<dyn CouponPort> {
        Arc::clone(&self.coupons)
    }

    /// Returns the analytics capability.
    #[must_use]
    pub fn analytics(&self) -> Arc<dyn AnalyticsPort> {
        Arc::clone(&self.analytics)
    }

    /// Returns the manager capability.
    #[must_use]
    pub fn managers(&self) -> Arc<dyn ManagerPort> {
        Arc::clone(&self.managers)
    }

    /// Ends the session, releasing its instances once every clone is dropped.
    pub fn end(self) {
        info!(session = %self.context.id, "Session ended");
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.context.id)
            .finish_non_exhaustive()
    }
}
