use crate::api::{ApiError, Credentials, Registration, SessionApi};
use crate::auth::state::{reduce, AuthEvent, AuthState};
use serde_json::Value;
use tokio::sync::watch;
use tracing::{info, instrument, warn};

/// Owner of the shared `AuthState`.
///
/// Create one at application start and hand it to screens and guards by
/// reference. Readers take a snapshot or subscribe; only the operations below
/// write, each step applied atomically inside the channel's lock.
#[derive(Debug)]
pub struct AuthStore<A> {
    api: A,
    state: watch::Sender<AuthState>,
}

impl<A: SessionApi> AuthStore<A> {
    #[must_use]
    pub fn new(api: A) -> Self {
        let (state, _) = watch::channel(AuthState::default());
        Self { api, state }
    }

    /// Current state, cloned out of the channel.
    #[must_use]
    pub fn snapshot(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every state change from now on.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    #[cfg(test)]
    pub(crate) fn api(&self) -> &A {
        &self.api
    }

    fn apply(&self, event: AuthEvent) {
        // No-op transitions must not wake subscribers.
        self.state.send_if_modified(|state| {
            let before = state.clone();
            reduce(state, event);
            *state != before
        });
    }

    /// Logs in and marks the session authenticated on success.
    ///
    /// # Errors
    /// Returns the API error after recording the rejection in the state.
    #[instrument(skip(self, credentials))]
    pub async fn login(&self, credentials: &Credentials) -> Result<Value, ApiError> {
        self.apply(AuthEvent::LoginPending);

        match self.api.login(credentials).await {
            Ok(body) => {
                self.apply(AuthEvent::LoginFulfilled);
                info!("login succeeded");
                Ok(body)
            }
            Err(err) => {
                warn!(kind = err.kind(), "login rejected: {err}");
                self.apply(AuthEvent::LoginRejected);
                Err(err)
            }
        }
    }

    /// Asks the server whether the session cookie is still valid.
    ///
    /// # Errors
    /// Returns the API error after recording the rejection in the state.
    #[instrument(skip(self))]
    pub async fn check_auth(&self) -> Result<bool, ApiError> {
        self.apply(AuthEvent::CheckPending);

        match self.api.check_session().await {
            Ok(authenticated) => {
                self.apply(AuthEvent::CheckFulfilled(authenticated));
                Ok(authenticated)
            }
            Err(err) => {
                warn!(kind = err.kind(), "session check failed: {err}");
                self.apply(AuthEvent::CheckRejected);
                Err(err)
            }
        }
    }

    /// Ends the server-side session.
    ///
    /// # Errors
    /// Returns the API error after recording the rejection in the state.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.apply(AuthEvent::LogoutPending);

        match self.api.logout().await {
            Ok(()) => {
                self.apply(AuthEvent::LogoutFulfilled);
                info!("logged out");
                Ok(())
            }
            Err(err) => {
                warn!(kind = err.kind(), "logout failed: {err}");
                self.apply(AuthEvent::LogoutRejected);
                Err(err)
            }
        }
    }

    /// Creates an account. Does not sign the user in.
    ///
    /// # Errors
    /// Returns the API error after recording the rejection in the state.
    #[instrument(skip(self, registration))]
    pub async fn register(&self, registration: &Registration) -> Result<Value, ApiError> {
        self.apply(AuthEvent::RegisterPending);

        match self.api.register(registration).await {
            Ok(body) => {
                self.apply(AuthEvent::RegisterFulfilled);
                info!("registration accepted");
                Ok(body)
            }
            Err(err) => {
                warn!(kind = err.kind(), "registration rejected: {err}");
                self.apply(AuthEvent::RegisterRejected);
                Err(err)
            }
        }
    }
}
