//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! - `TASKDESK_API_URL` - Base URL of the admin API (default: `http://localhost:3003`)

use thiserror::Error;
use url::Url;

/// Default API endpoint when `TASKDESK_API_URL` is not set.
const DEFAULT_API_URL: &str = "http://localhost:3003";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// API client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the admin API, without a trailing slash.
    pub base_url: String,
}

impl ClientConfig {
    /// Create a configuration for the given base URL.
    ///
    /// The URL is validated and any trailing slash is trimmed so paths can
    /// be appended directly.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBaseUrl` if the URL does not parse.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBaseUrl` if `TASKDESK_API_URL` is set to
    /// something that does not parse as a URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url =
            std::env::var("TASKDESK_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_owned());
        Self::new(&base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_owned(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ClientConfig::new("http://localhost:3003/").unwrap();
        assert_eq!(config.base_url, "http://localhost:3003");
    }

    #[test]
    fn test_invalid_url_rejected() {
        let result = ClientConfig::new("not a url");
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_default_points_at_local_endpoint() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:3003");
    }
}
