//! Domain error types.

mod service_error;
mod startup_error;
mod storage_error;

pub use service_error::ServiceError;
pub use startup_error::StartupError;
pub use storage_error::StorageError;
