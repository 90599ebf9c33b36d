//! Application route table and the navigation seam used by screens and guards.

use std::fmt;
use std::sync::{Mutex, PoisonError};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`, which only redirects to the login screen.
    Root,
    Login,
    Register,
    /// Landing view after a successful login; protected by the route guard.
    Home,
}

impl Route {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Home => "/home",
        }
    }

    /// Parses a path, ignoring a trailing slash.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };

        match normalized {
            "/" | "" => Some(Route::Root),
            "/login" => Some(Route::Login),
            "/register" => Some(Route::Register),
            "/home" => Some(Route::Home),
            _ => None,
        }
    }

    /// Where the router actually lands when asked for this route.
    #[must_use]
    pub fn resolve(self) -> Self {
        match self {
            Route::Root => Route::Login,
            route => route,
        }
    }

    /// Whether the route must go through the route guard.
    #[must_use]
    pub fn is_protected(self) -> bool {
        matches!(self, Route::Home)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.path())
    }
}

/// Something that can move the user to another screen.
pub trait Navigator {
    fn navigate(&self, route: Route);
}

/// In-memory navigation history.
#[derive(Debug, Default)]
pub struct History {
    entries: Mutex<Vec<Route>>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> Option<Route> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .copied()
    }

    #[must_use]
    pub fn entries(&self) -> Vec<Route> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for History {
    fn navigate(&self, route: Route) {
        let target = route.resolve();
        debug!("navigate {} -> {}", route, target);
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(target);
    }
}
