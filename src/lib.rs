//! # Re-Flash (Login, Registration & Session Client)
//!
//! `reflash` is the client side of the Re-Flash learning app. It owns the
//! login and registration screens, their field validation, and a small state
//! container that tracks whether the remote API considers us signed in.
//!
//! ## Session Model
//!
//! The API keeps the session in a cookie. `GET /login` with Basic auth sets it,
//! `GET /isAuthenticated` reports on it and `GET /api/logout` clears it. The
//! client never holds a token: the HTTP client's cookie jar carries the session.
//!
//! ## Flow Overview
//!
//! 1. A screen (`forms::login`, `forms::register`) collects field input and
//!    validates it locally. Invalid input never reaches the network.
//! 2. Valid input is dispatched to the `AuthStore`, which applies the
//!    pending/fulfilled/rejected transitions around the API call.
//! 3. The route guard and the screens react to the new `AuthState` and
//!    navigate accordingly.
//!
//! Passwords are carried as `SecretString` and must never be logged.

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod forms;
pub mod routes;

#[cfg(test)]
mod testing;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
