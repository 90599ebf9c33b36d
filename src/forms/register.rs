//! Registration screen. Every rule is evaluated on submit and all messages are
//! set together, so the user sees the full list of problems at once. A valid
//! form is sent to `POST /register` through the store; success leads to the
//! login screen.

use super::{
    password_error, valid_email, Field, FieldErrors, SubmitOutcome, EMAIL_INVALID, EMAIL_REQUIRED,
};
use crate::api::{Registration, Role, SessionApi};
use crate::auth::AuthStore;
use crate::routes::{Navigator, Route};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

pub const FULL_NAME_REQUIRED: &str = "Full name is required";
pub const CONFIRM_REQUIRED: &str = "Please confirm your password";
pub const PASSWORDS_DIFFER: &str = "Passwords do not match";
pub const ROLE_REQUIRED: &str = "Please select your role";
pub const TERMS_REQUIRED: &str = "You must agree to the terms and conditions";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const SERVER_UNREACHABLE: &str = "Unable to reach the server";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegisterField {
    FullName,
    Email,
    Password,
    ConfirmPassword,
    Role,
    AgreedToTerms,
}

impl Field for RegisterField {
    fn name(self) -> &'static str {
        match self {
            RegisterField::FullName => "full_name",
            RegisterField::Email => "email",
            RegisterField::Password => "password",
            RegisterField::ConfirmPassword => "confirm_password",
            RegisterField::Role => "role",
            RegisterField::AgreedToTerms => "agreed_to_terms",
        }
    }
}

#[derive(Clone, Debug)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
    pub role: Option<Role>,
    pub agreed_to_terms: bool,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            password: SecretString::from(String::new()),
            confirm_password: SecretString::from(String::new()),
            role: None,
            agreed_to_terms: false,
        }
    }
}

impl RegistrationForm {
    #[must_use]
    pub fn validate(&self) -> FieldErrors<RegisterField> {
        let mut errors = FieldErrors::new();

        if self.full_name.trim().is_empty() {
            errors.set(RegisterField::FullName, FULL_NAME_REQUIRED);
        }

        if self.email.is_empty() {
            errors.set(RegisterField::Email, EMAIL_REQUIRED);
        } else if !valid_email(&self.email) {
            errors.set(RegisterField::Email, EMAIL_INVALID);
        }

        let password = self.password.expose_secret();
        if let Some(message) = password_error(password) {
            errors.set(RegisterField::Password, message);
        }

        let confirm = self.confirm_password.expose_secret();
        if confirm.is_empty() {
            errors.set(RegisterField::ConfirmPassword, CONFIRM_REQUIRED);
        } else if confirm != password {
            errors.set(RegisterField::ConfirmPassword, PASSWORDS_DIFFER);
        }

        if self.role.is_none() {
            errors.set(RegisterField::Role, ROLE_REQUIRED);
        }

        if !self.agreed_to_terms {
            errors.set(RegisterField::AgreedToTerms, TERMS_REQUIRED);
        }

        errors
    }

    /// Request body for a form that passed validation.
    fn to_registration(&self) -> Option<Registration> {
        Some(Registration {
            full_name: self.full_name.trim().to_string(),
            email: self.email.clone(),
            password: self.password.clone(),
            role: self.role?,
        })
    }
}

#[derive(Debug, Default)]
pub struct RegisterScreen {
    form: RegistrationForm,
    errors: FieldErrors<RegisterField>,
}

impl RegisterScreen {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors<RegisterField> {
        &self.errors
    }

    pub fn set_full_name(&mut self, value: impl Into<String>) {
        self.form.full_name = value.into();
        self.errors.clear(RegisterField::FullName);
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.form.email = value.into();
        self.errors.clear(RegisterField::Email);
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.form.password = SecretString::from(value.into());
        self.errors.clear(RegisterField::Password);
    }

    pub fn set_confirm_password(&mut self, value: impl Into<String>) {
        self.form.confirm_password = SecretString::from(value.into());
        self.errors.clear(RegisterField::ConfirmPassword);
    }

    pub fn select_role(&mut self, role: Role) {
        self.form.role = Some(role);
        self.errors.clear(RegisterField::Role);
    }

    pub fn set_agreed_to_terms(&mut self, agreed: bool) {
        self.form.agreed_to_terms = agreed;
        self.errors.clear(RegisterField::AgreedToTerms);
    }

    /// Validates, registers through `store`, and sends the user to login.
    pub async fn submit<A: SessionApi>(
        &mut self,
        store: &AuthStore<A>,
        navigator: &impl Navigator,
    ) -> SubmitOutcome {
        let errors = self.form.validate();
        let blocked = errors.has_errors();
        self.errors = errors;
        if blocked {
            debug!("registration blocked by {} field error(s)", self.errors.len());
            return SubmitOutcome::Blocked;
        }

        let Some(registration) = self.form.to_registration() else {
            self.errors.set(RegisterField::Role, ROLE_REQUIRED);
            return SubmitOutcome::Blocked;
        };

        match store.register(&registration).await {
            Ok(_) => {
                navigator.navigate(Route::Login);
                SubmitOutcome::Succeeded
            }
            Err(err) => {
                let message = if err.is_auth() {
                    REGISTRATION_FAILED
                } else {
                    SERVER_UNREACHABLE
                };
                self.errors.set(RegisterField::Email, message);
                SubmitOutcome::Failed
            }
        }
    }
}
