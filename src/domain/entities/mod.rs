//! Domain entity definitions.

mod refresh_token;
mod session;

pub use refresh_token::RefreshToken;
pub use session::{AppState, AuthState, SessionId};
