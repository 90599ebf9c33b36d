//! HTTP implementation of `SessionApi`. The cookie store stands in for the
//! browser's `credentials: include`: whatever session cookie the server sets
//! is replayed on later calls, and nothing else about the session is kept here.

use super::{
    handle_empty_response, handle_json_response, map_request_error, ApiError, Credentials,
    Registration, SessionApi, DEFAULT_TIMEOUT_MS, LOGIN_PATH, LOGOUT_PATH, REGISTER_PATH,
    SESSION_PATH,
};
use crate::{config::AppConfig, APP_USER_AGENT};
use base64ct::{Base64, Encoding};
use reqwest::{header::AUTHORIZATION, Client, StatusCode};
use secrecy::ExposeSecret;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

/// Cookie-carrying client for the Re-Flash session endpoints.
#[derive(Clone, Debug)]
pub struct SessionClient {
    client: Client,
    config: AppConfig,
}

impl SessionClient {
    /// Builds a client for the configured API.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the base URL is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: AppConfig) -> Result<Self, ApiError> {
        config.base_url()?;

        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .cookie_store(true)
            .timeout(Duration::from_millis(DEFAULT_TIMEOUT_MS))
            .build()
            .map_err(|err| ApiError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// `Basic base64(email:password)` header value.
fn basic_authorization(credentials: &Credentials) -> String {
    let pair = format!(
        "{}:{}",
        credentials.email,
        credentials.password.expose_secret()
    );
    format!("Basic {}", Base64::encode_string(pair.as_bytes()))
}

impl SessionApi for SessionClient {
    #[instrument(skip(self, credentials))]
    async fn login(&self, credentials: &Credentials) -> Result<Value, ApiError> {
        let url = self.config.endpoint(LOGIN_PATH);
        debug!("login URL: {}", url);

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, basic_authorization(credentials))
            .send()
            .await
            .map_err(map_request_error)?;

        handle_json_response(response).await
    }

    #[instrument(skip(self))]
    async fn check_session(&self) -> Result<bool, ApiError> {
        let url = self.config.endpoint(SESSION_PATH);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(map_request_error)?;

        // A missing or expired cookie is an answer, not a failure.
        if matches!(
            response.status(),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            debug!("session rejected with {}", response.status());
            return Ok(false);
        }

        let body = handle_json_response(response).await?;
        Ok(matches!(body.get("message"), Some(Value::String(message)) if message == "true"))
    }

    #[instrument(skip(self))]
    async fn logout(&self) -> Result<(), ApiError> {
        let url = self.config.endpoint(LOGOUT_PATH);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(map_request_error)?;

        handle_empty_response(response).await
    }

    #[instrument(skip(self, registration), fields(role = %registration.role))]
    async fn register(&self, registration: &Registration) -> Result<Value, ApiError> {
        let url = self.config.endpoint(REGISTER_PATH);

        let response = self
            .client
            .post(&url)
            .json(registration)
            .send()
            .await
            .map_err(map_request_error)?;

        handle_json_response(response).await
    }
}
