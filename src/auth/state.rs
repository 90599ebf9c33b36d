//! Auth state and the reducer that moves it between lifecycle events.
//!
//! The reducer is the only code that writes `AuthState`; `AuthStore` feeds it
//! one `AuthEvent` per pending/fulfilled/rejected step of an operation.

/// What the client currently believes about the server-side session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// No check has resolved yet.
    #[default]
    Unknown,
    Authenticated,
    Unauthenticated,
}

pub const LOGIN_REJECTED: &str = "Invalid Credentials";
pub const CHECK_REJECTED: &str = "Unable to verify session";
pub const LOGOUT_REJECTED: &str = "Logout failed";
pub const REGISTER_REJECTED: &str = "Registration failed";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: SessionStatus,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session == SessionStatus::Authenticated
    }
}

/// Lifecycle steps of the store's async operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    LoginPending,
    LoginFulfilled,
    LoginRejected,
    CheckPending,
    CheckFulfilled(bool),
    CheckRejected,
    LogoutPending,
    LogoutFulfilled,
    LogoutRejected,
    RegisterPending,
    RegisterFulfilled,
    RegisterRejected,
}

pub(crate) fn reduce(state: &mut AuthState, event: AuthEvent) {
    match event {
        AuthEvent::LoginPending | AuthEvent::RegisterPending => {
            state.loading = true;
            state.error = None;
        }
        AuthEvent::LoginFulfilled => {
            state.loading = false;
            state.session = SessionStatus::Authenticated;
        }
        AuthEvent::LoginRejected => {
            state.loading = false;
            state.error = Some(LOGIN_REJECTED.to_string());
        }
        AuthEvent::CheckFulfilled(authenticated) => {
            state.session = if authenticated {
                SessionStatus::Authenticated
            } else {
                SessionStatus::Unauthenticated
            };
        }
        AuthEvent::CheckRejected => {
            // Authentication is never granted on failure; an unresolved
            // session settles as signed out so guards stop waiting.
            if state.session == SessionStatus::Unknown {
                state.session = SessionStatus::Unauthenticated;
            }
            state.error = Some(CHECK_REJECTED.to_string());
        }
        AuthEvent::LogoutFulfilled => {
            state.session = SessionStatus::Unauthenticated;
        }
        AuthEvent::LogoutRejected => {
            state.error = Some(LOGOUT_REJECTED.to_string());
        }
        AuthEvent::RegisterFulfilled => {
            state.loading = false;
        }
        AuthEvent::RegisterRejected => {
            state.loading = false;
            state.error = Some(REGISTER_REJECTED.to_string());
        }
        AuthEvent::CheckPending | AuthEvent::LogoutPending => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: &AuthState, event: AuthEvent) -> AuthState {
        let mut next = state.clone();
        reduce(&mut next, event);
        next
    }

    #[test]
    fn default_state_is_unknown_and_idle() {
        let state = AuthState::default();
        assert_eq!(state.session, SessionStatus::Unknown);
        assert!(!state.is_authenticated());
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn login_pending_sets_loading_and_clears_error() {
        let state = AuthState {
            error: Some(LOGIN_REJECTED.to_string()),
            ..AuthState::default()
        };
        let next = apply(&state, AuthEvent::LoginPending);
        assert!(next.loading);
        assert!(next.error.is_none());
    }

    #[test]
    fn login_fulfilled_authenticates() {
        let pending = apply(&AuthState::default(), AuthEvent::LoginPending);
        let next = apply(&pending, AuthEvent::LoginFulfilled);
        assert!(!next.loading);
        assert!(next.is_authenticated());
    }

    #[test]
    fn login_rejected_sets_generic_error() {
        let pending = apply(&AuthState::default(), AuthEvent::LoginPending);
        let next = apply(&pending, AuthEvent::LoginRejected);
        assert!(!next.loading);
        assert!(!next.is_authenticated());
        assert_eq!(next.error.as_deref(), Some("Invalid Credentials"));
    }

    #[test]
    fn check_fulfilled_leaves_loading_and_error_alone() {
        let state = AuthState {
            session: SessionStatus::Unauthenticated,
            loading: true,
            error: Some("previous".to_string()),
        };
        let next = apply(&state, AuthEvent::CheckFulfilled(true));
        assert!(next.is_authenticated());
        assert!(next.loading);
        assert_eq!(next.error.as_deref(), Some("previous"));

        let next = apply(&next, AuthEvent::CheckFulfilled(false));
        assert_eq!(next.session, SessionStatus::Unauthenticated);
    }

    #[test]
    fn check_pending_is_a_no_op() {
        let state = AuthState {
            session: SessionStatus::Authenticated,
            ..AuthState::default()
        };
        assert_eq!(apply(&state, AuthEvent::CheckPending), state);
        assert_eq!(apply(&state, AuthEvent::LogoutPending), state);
    }

    #[test]
    fn check_rejected_keeps_known_session() {
        let state = AuthState {
            session: SessionStatus::Authenticated,
            ..AuthState::default()
        };
        let next = apply(&state, AuthEvent::CheckRejected);
        assert!(next.is_authenticated());
        assert_eq!(next.error.as_deref(), Some(CHECK_REJECTED));
    }

    #[test]
    fn check_rejected_resolves_unknown_session() {
        let next = apply(&AuthState::default(), AuthEvent::CheckRejected);
        assert_eq!(next.session, SessionStatus::Unauthenticated);
    }

    #[test]
    fn logout_transitions() {
        let state = AuthState {
            session: SessionStatus::Authenticated,
            ..AuthState::default()
        };
        let failed = apply(&state, AuthEvent::LogoutRejected);
        assert!(failed.is_authenticated());
        assert_eq!(failed.error.as_deref(), Some(LOGOUT_REJECTED));

        let next = apply(&state, AuthEvent::LogoutFulfilled);
        assert!(!next.is_authenticated());
        assert_eq!(next.session, SessionStatus::Unauthenticated);
    }

    #[test]
    fn register_transitions_do_not_authenticate() {
        let pending = apply(&AuthState::default(), AuthEvent::RegisterPending);
        assert!(pending.loading);

        let done = apply(&pending, AuthEvent::RegisterFulfilled);
        assert!(!done.loading);
        assert!(!done.is_authenticated());

        let failed = apply(&pending, AuthEvent::RegisterRejected);
        assert!(!failed.loading);
        assert_eq!(failed.error.as_deref(), Some(REGISTER_REJECTED));
    }
}
