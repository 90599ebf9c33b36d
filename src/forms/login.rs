//! Login screen: email + password, checked locally, then handed to the store.
//! Server and network failures both land on the password field with a generic
//! message so the screen never reveals which credential was wrong.

use super::{password_error, Field, FieldErrors, SubmitOutcome, EMAIL_REQUIRED};
use crate::api::{Credentials, SessionApi};
use crate::auth::AuthStore;
use crate::routes::{Navigator, Route};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

pub const INVALID_LOGIN: &str = "Invalid email or password";
pub const LOGIN_FAILED: &str = "Login failed";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoginField {
    Email,
    Password,
}

impl Field for LoginField {
    fn name(self) -> &'static str {
        match self {
            LoginField::Email => "email",
            LoginField::Password => "password",
        }
    }
}

#[derive(Debug)]
pub struct LoginScreen {
    email: String,
    password: SecretString,
    errors: FieldErrors<LoginField>,
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: SecretString::from(String::new()),
            errors: FieldErrors::new(),
        }
    }
}

impl LoginScreen {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors<LoginField> {
        &self.errors
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.errors.clear(LoginField::Email);
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = SecretString::from(value.into());
        self.errors.clear(LoginField::Password);
    }

    /// Field errors for the current input. Only presence of the email is
    /// checked, not its format.
    #[must_use]
    pub fn validate(&self) -> FieldErrors<LoginField> {
        let mut errors = FieldErrors::new();

        if self.email.is_empty() {
            errors.set(LoginField::Email, EMAIL_REQUIRED);
        }
        if let Some(message) = password_error(self.password.expose_secret()) {
            errors.set(LoginField::Password, message);
        }

        errors
    }

    /// Validates, logs in through `store`, and navigates home on success.
    pub async fn submit<A: SessionApi>(
        &mut self,
        store: &AuthStore<A>,
        navigator: &impl Navigator,
    ) -> SubmitOutcome {
        let errors = self.validate();
        let blocked = errors.has_errors();
        self.errors = errors;
        if blocked {
            debug!("login blocked by {} field error(s)", self.errors.len());
            return SubmitOutcome::Blocked;
        }

        let credentials = Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        };

        match store.login(&credentials).await {
            Ok(_) => {
                navigator.navigate(Route::Home);
                SubmitOutcome::Succeeded
            }
            Err(err) => {
                let message = if err.is_auth() {
                    INVALID_LOGIN
                } else {
                    LOGIN_FAILED
                };
                self.errors.set(LoginField::Password, message);
                SubmitOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::forms::{PASSWORD_REQUIRED, PASSWORD_TOO_SHORT};
    use crate::routes::History;
    use crate::testing::FakeApi;
    use serde_json::json;

    fn filled(email: &str, password: &str) -> LoginScreen {
        let mut screen = LoginScreen::new();
        screen.set_email(email);
        screen.set_password(password);
        screen
    }

    #[tokio::test]
    async fn empty_fields_block_submission_without_calls() {
        for (email, password) in [("", ""), ("a@b.com", ""), ("", "secret")] {
            let store = AuthStore::new(FakeApi::new());
            let history = History::new();
            let mut screen = filled(email, password);

            assert_eq!(
                screen.submit(&store, &history).await,
                SubmitOutcome::Blocked
            );
            assert_eq!(screen.errors().get(LoginField::Email).is_empty(), !email.is_empty());
            assert_eq!(
                screen.errors().get(LoginField::Password).is_empty(),
                !password.is_empty()
            );
            assert!(history.entries().is_empty());
            assert!(store.api().calls().is_empty());
        }
    }

    #[tokio::test]
    async fn blocked_submission_never_reaches_api() {
        let store = AuthStore::new(FakeApi::new());
        let mut screen = filled("", "");
        screen.submit(&store, &History::new()).await;

        assert!(store.api().calls().is_empty());
        assert_eq!(store.snapshot(), crate::auth::AuthState::default());
    }

    #[test]
    fn short_passwords_are_rejected() {
        for password in ["1", "12345", "abcde"] {
            let screen = filled("a@b.com", password);
            assert_eq!(
                screen.validate().get(LoginField::Password),
                PASSWORD_TOO_SHORT
            );
        }
        let screen = filled("a@b.com", "");
        assert_eq!(screen.validate().get(LoginField::Password), PASSWORD_REQUIRED);
    }

    #[test]
    fn email_format_is_not_checked() {
        let screen = filled("not-an-email", "secret");
        assert!(!screen.validate().has_errors());
    }

    #[tokio::test]
    async fn editing_a_field_clears_only_its_error() {
        let store = AuthStore::new(FakeApi::new());
        let mut screen = LoginScreen::new();
        screen.submit(&store, &History::new()).await;
        assert_eq!(screen.errors().len(), 2);

        screen.set_email("a@b.com");
        assert_eq!(screen.errors().get(LoginField::Email), "");
        assert_eq!(screen.errors().get(LoginField::Password), PASSWORD_REQUIRED);

        screen.set_password("secret");
        assert!(screen.errors().is_empty());
    }

    #[tokio::test]
    async fn successful_login_navigates_home() {
        let store = AuthStore::new(FakeApi::new().with_login(Ok(json!({"message": "ok"}))));
        let history = History::new();
        let mut screen = filled("a@b.com", "secret");

        assert_eq!(
            screen.submit(&store, &history).await,
            SubmitOutcome::Succeeded
        );
        assert!(store.snapshot().is_authenticated());
        assert_eq!(history.current(), Some(Route::Home));
        assert!(screen.errors().is_empty());
        assert_eq!(store.api().calls(), vec!["login:a@b.com".to_string()]);
    }

    #[tokio::test]
    async fn rejected_login_shows_generic_password_error() {
        let store = AuthStore::new(FakeApi::new().with_login(Err(ApiError::Auth {
            status: 401,
            message: "bad creds".to_string(),
        })));
        let history = History::new();
        let mut screen = filled("a@b.com", "wrong1");

        assert_eq!(screen.submit(&store, &history).await, SubmitOutcome::Failed);
        assert_eq!(screen.errors().get(LoginField::Password), INVALID_LOGIN);
        assert_eq!(screen.errors().get(LoginField::Email), "");
        assert!(!store.snapshot().is_authenticated());
        assert!(history.entries().is_empty());
    }

    #[tokio::test]
    async fn network_failure_is_reported_distinctly() {
        let store = AuthStore::new(
            FakeApi::new().with_login(Err(ApiError::Network("refused".to_string()))),
        );
        let mut screen = filled("a@b.com", "secret");

        assert_eq!(
            screen.submit(&store, &History::new()).await,
            SubmitOutcome::Failed
        );
        assert_eq!(screen.errors().get(LoginField::Password), LOGIN_FAILED);
    }
}
