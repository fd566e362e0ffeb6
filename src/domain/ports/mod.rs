mod analytics_port;
mod auth_port;
mod capability;
mod clock_port;
mod coupon_port;
mod customer_port;
mod key_value_port;
mod manager_port;
mod notification_port;
mod token_storage_port;
mod transaction_port;

pub use analytics_port::AnalyticsPort;
pub use auth_port::AuthPort;
pub use capability::Capability;
pub use clock_port::{Clock, ClockReading};
pub use coupon_port::CouponPort;
pub use customer_port::CustomerPort;
pub use key_value_port::KeyValueStoragePort;
pub use manager_port::ManagerPort;
pub use notification_port::NotificationPort;
pub use token_storage_port::{REFRESH_TOKEN_KEY, TokenStoragePort};
pub use transaction_port::TransactionPort;
