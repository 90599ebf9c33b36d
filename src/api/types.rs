//! Request payloads for the session API. `Credentials` and `Registration`
//! carry passwords, so they keep them as `SecretString` and must never be
//! logged.

use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, Serializer};
use std::fmt;

/// Email and password captured by the login screen for a single submission.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }
}

/// Role picked on the registration screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Teacher,
    Student,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Teacher => "teacher",
            Role::Student => "student",
        }
    }

    /// Parses a role name, case-insensitively.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "teacher" => Some(Role::Teacher),
            "student" => Some(Role::Student),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Body of `POST /register`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    #[serde(serialize_with = "serialize_secret")]
    pub password: SecretString,
    pub role: Role,
}

fn serialize_secret<S: Serializer>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn credentials_debug_redacts_password() {
        let credentials = Credentials::new("a@b.com", "secret");
        let debug = format!("{credentials:?}");
        assert!(debug.contains("a@b.com"));
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("\"secret\""));
        assert_eq!(credentials.password.expose_secret(), "secret");
    }

    #[test]
    fn role_parse_accepts_known_roles() {
        assert_eq!(Role::parse("teacher"), Some(Role::Teacher));
        assert_eq!(Role::parse(" Student "), Some(Role::Student));
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::Teacher.to_string(), "teacher");
    }

    #[test]
    fn registration_serializes_camel_case() {
        let registration = Registration {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: SecretString::from("engines".to_string()),
            role: Role::Student,
        };

        let value = serde_json::to_value(&registration).expect("Failed to serialize");
        assert_eq!(
            value,
            json!({
                "fullName": "Ada Lovelace",
                "email": "ada@example.com",
                "password": "engines",
                "role": "student"
            })
        );
    }
}
