//! Fidelity - client core of the Fidelity loyalty and CRM application.
//!
//! This crate is the composition root of the client: it provides the clock
//! and refresh token persistence, wires session-scoped state and the
//! capability services, and boots the host that runs the application.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing session state and services.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Host layer containing the hosting document, service wiring and run loop.
pub mod host;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "fidelity";
