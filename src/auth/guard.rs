use crate::api::SessionApi;
use crate::auth::state::{AuthState, SessionStatus};
use crate::auth::store::AuthStore;
use crate::routes::{Navigator, Route};
use std::fmt;
use tokio::sync::watch;
use tracing::debug;

/// What a protected view should show for the current auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// The session check has not resolved; show a loading indicator.
    Loading,
    Render,
    Redirect(Route),
}

impl fmt::Display for GuardDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuardDecision::Loading => f.write_str("loading"),
            GuardDecision::Render => f.write_str("render"),
            GuardDecision::Redirect(route) => write!(f, "redirect to {route}"),
        }
    }
}

#[must_use]
pub fn decide(state: &AuthState) -> GuardDecision {
    match state.session {
        SessionStatus::Unknown => GuardDecision::Loading,
        SessionStatus::Authenticated => GuardDecision::Render,
        SessionStatus::Unauthenticated => GuardDecision::Redirect(Route::Login),
    }
}

/// Gate in front of a protected view.
pub struct RouteGuard<'a, A> {
    store: &'a AuthStore<A>,
}

impl<'a, A: SessionApi> RouteGuard<'a, A> {
    #[must_use]
    pub fn new(store: &'a AuthStore<A>) -> Self {
        Self { store }
    }

    /// Decision for the state as it is right now, without I/O.
    #[must_use]
    pub fn decision(&self) -> GuardDecision {
        decide(&self.store.snapshot())
    }

    /// Checks the session and redirects through `navigator` when signed out.
    ///
    /// A failed check is already recorded in the store, so it only matters
    /// here through the resulting decision.
    pub async fn mount(&self, navigator: &impl Navigator) -> GuardDecision {
        if let Err(err) = self.store.check_auth().await {
            debug!("guard session check failed: {err}");
        }

        let decision = self.decision();
        if let GuardDecision::Redirect(route) = decision {
            navigator.navigate(route);
        }
        decision
    }

    /// Follows later state changes, e.g. a logout from another screen.
    #[must_use]
    pub fn watch(&self) -> GuardWatch {
        GuardWatch {
            rx: self.store.subscribe(),
        }
    }
}

/// Stream of guard decisions, one per published state change.
pub struct GuardWatch {
    rx: watch::Receiver<AuthState>,
}

impl GuardWatch {
    /// Waits for the next state change. `None` once the store is gone.
    pub async fn changed(&mut self) -> Option<GuardDecision> {
        self.rx.changed().await.ok()?;
        Some(decide(&self.rx.borrow_and_update()))
    }
}
