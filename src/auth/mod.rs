//! Authentication state, the store that owns it, and the route guard that
//! reads it. Screens dispatch through `AuthStore`; nothing else writes the
//! state.
//!
//! Flow Overview: `login` sets `loading` until the API answers, then marks the
//! session authenticated or records a generic error. `check_auth` resolves the
//! tri-state session the guard waits on. `logout` signs the session out.

pub mod guard;
pub mod state;
pub mod store;

pub use guard::{GuardDecision, RouteGuard};
pub use state::{AuthState, SessionStatus};
pub use store::AuthStore;
