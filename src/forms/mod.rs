//! Login and registration screens.
//!
//! Each screen owns its field values and a `FieldErrors` map. Validation runs
//! only on submit; editing a field clears that field's error and nothing
//! else. Invalid input never reaches the store or the network.

pub mod login;
pub mod register;

pub use login::{LoginField, LoginScreen};
pub use register::{RegisterField, RegisterScreen, RegistrationForm};

use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;

/// Minimum password length accepted by both screens.
pub const MIN_PASSWORD_LENGTH: usize = 6;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email is invalid";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";

/// A named input on a screen.
pub trait Field: Copy + Ord + fmt::Debug {
    fn name(self) -> &'static str;
}

/// Per-field error messages. An absent or empty message means "no error".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldErrors<F: Field> {
    errors: BTreeMap<F, String>,
}

impl<F: Field> Default for FieldErrors<F> {
    fn default() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }
}

impl<F: Field> FieldErrors<F> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Message for `field`, or `""` when it has none.
    #[must_use]
    pub fn get(&self, field: F) -> &str {
        self.errors.get(&field).map_or("", String::as_str)
    }

    pub fn set(&mut self, field: F, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            self.errors.remove(&field);
        } else {
            self.errors.insert(field, message);
        }
    }

    pub fn clear(&mut self, field: F) {
        self.errors.remove(&field);
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Fields with a message, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> {
        self.errors
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}

/// How a submit attempt ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed; nothing was sent.
    Blocked,
    /// The store accepted the operation and navigation happened.
    Succeeded,
    /// The server or the network refused; the error is on a field.
    Failed,
}

/// Loose `<non-space>@<non-space>.<non-space>` check, searched anywhere in the value.
#[must_use]
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"\S+@\S+\.\S+").is_ok_and(|re| re.is_match(email))
}

/// Shared password rule: required, then a minimum length in characters.
pub(crate) fn password_error(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some(PASSWORD_REQUIRED)
    } else if password.chars().count() < MIN_PASSWORD_LENGTH {
        Some(PASSWORD_TOO_SHORT)
    } else {
        None
    }
}
