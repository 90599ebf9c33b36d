pub mod login;
pub mod register;

// Internal "interpreter" for `Action`.
mod run;

use crate::api::SessionClient;
use crate::auth::AuthStore;
use crate::config::AppConfig;
use crate::forms::{Field, FieldErrors};
use anyhow::{Context, Result};

#[derive(Debug)]
pub enum Action {
    Login(login::Args),
    Register(register::Args),
}

impl Action {
    // Convenience wrapper so call sites can do `action.execute().await`.
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> Result<()> {
        run::execute(self).await
    }
}

/// Store backed by the HTTP client. The session cookie lives in this store's
/// jar only, so everything that needs the session runs against one store.
pub(crate) fn session_store(api_url: Option<&str>) -> Result<AuthStore<SessionClient>> {
    let config = AppConfig::load(api_url);
    let client = SessionClient::new(config).context("failed to configure the API client")?;
    Ok(AuthStore::new(client))
}

/// `<field>: <message>` lines, in field order.
pub(crate) fn field_error_lines<F: Field>(errors: &FieldErrors<F>) -> Vec<String> {
    errors
        .iter()
        .map(|(field, message)| format!("{}: {message}", field.name()))
        .collect()
}

pub(crate) fn report_field_errors<F: Field>(errors: &FieldErrors<F>) {
    for line in field_error_lines(errors) {
        eprintln!("{line}");
    }
}
