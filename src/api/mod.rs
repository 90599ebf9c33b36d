//! Session API client and the helpers shared by its calls.
//!
//! All calls go through one `reqwest::Client` with a cookie store, so the
//! session cookie set by `/login` rides along on every later request. The
//! helpers here keep timeouts and error-body handling consistent; they never
//! see or log the password, which only exists inside the `Authorization`
//! header built by `client::basic_authorization`.

mod client;
mod errors;
mod types;

pub use client::SessionClient;
pub use errors::ApiError;
pub use types::{Credentials, Registration, Role};

use reqwest::Response;
use serde_json::Value;
use std::future::Future;

/// Default request timeout (milliseconds) applied to every call.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
/// Maximum number of error body characters surfaced to callers.
const MAX_ERROR_CHARS: usize = 200;

pub const LOGIN_PATH: &str = "/login";
pub const SESSION_PATH: &str = "/isAuthenticated";
pub const LOGOUT_PATH: &str = "/api/logout";
pub const REGISTER_PATH: &str = "/register";

/// Remote operations the auth store depends on.
///
/// `SessionClient` is the HTTP implementation; the store is generic over this
/// trait so it can be driven by anything that speaks the same contract.
pub trait SessionApi: Send + Sync {
    /// Opens a session with Basic credentials and returns the decoded body.
    fn login(&self, credentials: &Credentials)
        -> impl Future<Output = Result<Value, ApiError>> + Send;

    /// Reports whether the current session cookie is still valid.
    fn check_session(&self) -> impl Future<Output = Result<bool, ApiError>> + Send;

    /// Asks the server to drop the current session.
    fn logout(&self) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// Creates an account and returns the decoded body.
    fn register(
        &self,
        registration: &Registration,
    ) -> impl Future<Output = Result<Value, ApiError>> + Send;
}

/// Maps transport errors into `ApiError` variants with timeout detection.
pub(crate) fn map_request_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        ApiError::Network(format!("Unable to reach the server: {err}"))
    }
}

/// Decodes a JSON body on success and turns any other status into `Auth`.
pub(crate) async fn handle_json_response(response: Response) -> Result<Value, ApiError> {
    let status = response.status();
    let body = response.text().await.map_err(map_request_error)?;

    if status.is_success() {
        decode_body(&body)
    } else {
        Err(ApiError::Auth {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }
}

/// Accepts any successful status and ignores the body.
pub(crate) async fn handle_empty_response(response: Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Auth {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

/// Empty bodies decode to `Null`; anything else must be JSON.
pub(crate) fn decode_body(body: &str) -> Result<Value, ApiError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body)
        .map_err(|err| ApiError::Parse(format!("Failed to decode response: {err}")))
}

/// Prefers the `message` field of a JSON error body, falling back to the raw text.
pub(crate) fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("message").and_then(Value::as_str).map(str::to_string))
        .map_or_else(|| sanitize_body(body), |message| sanitize_body(&message))
}

/// Trims and truncates error bodies before they reach the UI.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
