//! Native host: hosting document, service wiring, sessions and the run loop.

/// Host assembly from configuration.
pub mod builder;
/// Capability bindings and session creation.
pub mod container;
/// Hosting document and mount points.
pub mod document;
/// Default capability bindings.
pub mod registry;
/// Host run loop.
pub mod runtime;
/// Per-session service scope.
pub mod session;

pub use builder::{HostBuilder, RootComponent};
pub use container::{Factory, ServiceCollection, ServiceProvider};
pub use document::{DEFAULT_DOCUMENT, HostDocument, MountSelector};
pub use registry::ServiceRegistry;
pub use runtime::{Host, HostEvent, HostHandle};
pub use session::{HostServices, Session, SessionContext};
