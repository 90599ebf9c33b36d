use thiserror::Error;

/// Failures surfaced by the session API client.
///
/// `Auth` means the server answered and refused; everything else means we
/// never got a usable answer. Screens collapse `Auth` into a generic message
/// and report the rest as a connectivity problem.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Auth { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
}

impl ApiError {
    /// True when the server rejected the credentials or session.
    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth { .. })
    }

    /// Short label for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Config(_) => "config",
            ApiError::Network(_) => "network",
            ApiError::Timeout(_) => "timeout",
            ApiError::Auth { .. } => "auth",
            ApiError::Parse(_) => "parse",
        }
    }
}
