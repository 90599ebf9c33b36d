//! Build-time configuration for the API endpoint with an optional runtime
//! override. The default base URL is baked in from `REFLASH_API_BASE_URL` at
//! compile time; the CLI may replace it with `--api-url` / `REFLASH_API_URL`
//! so the same binary can target another deployment without rebuilding.
//! Configuration values are public; do not store secrets here.

use crate::api::ApiError;
use url::Url;

/// Base URL used when nothing was configured at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Client configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("REFLASH_API_BASE_URL")
                .and_then(normalize_runtime_value)
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        }
    }
}

impl AppConfig {
    /// Loads the build-time config and applies a runtime override when present.
    #[must_use]
    pub fn load(api_url_override: Option<&str>) -> Self {
        let mut config = Self::default();
        apply_runtime_override(&mut config, api_url_override.and_then(normalize_runtime_value));
        config
    }

    /// Parses the base URL, rejecting anything that is not http(s).
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the URL is malformed or uses another scheme.
    pub fn base_url(&self) -> Result<Url, ApiError> {
        let url = Url::parse(&self.api_base_url).map_err(|err| {
            ApiError::Config(format!("Invalid API base URL {}: {err}", self.api_base_url))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(ApiError::Config(format!(
                "Unsupported API base URL scheme: {scheme}"
            ))),
        }
    }

    /// Joins the configured base URL and an endpoint path.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        build_url_with_base(&self.api_base_url, path)
    }
}

fn apply_runtime_override(config: &mut AppConfig, api_base_url: Option<String>) {
    if let Some(value) = api_base_url {
        config.api_base_url = value;
    }
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}
