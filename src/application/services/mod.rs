mod auth_service;
mod notification_dispatcher;

pub use auth_service::SessionAuthService;
pub use notification_dispatcher::NotificationDispatcher;
