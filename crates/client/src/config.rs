//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SHOPFRONT_API_BASE_URL` - Base URL of the Shopfront REST API
//!   (e.g., `https://shop.example.com`)
//!
//! ## Optional
//! - `SHOPFRONT_HTTP_TIMEOUT_SECS` - Per-request timeout (default: 30)
//! - `SHOPFRONT_USER_AGENT` - User-Agent header value

use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_USER_AGENT: &str = concat!("shopfront-client/", env!("CARGO_PKG_VERSION"));

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Invalid base URL {0}: {1}")]
    InvalidBaseUrl(String, String),
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Shopfront REST API.
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl ClientConfig {
    /// Build a configuration for the given API base URL with defaults for
    /// everything else.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the URL does not parse or is not HTTP(S).
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = parse_base_url(base_url)?;
        Ok(Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = parse_base_url(&get_required_env("SHOPFRONT_API_BASE_URL")?)?;
        let timeout_secs = get_env_or_default(
            "SHOPFRONT_HTTP_TIMEOUT_SECS",
            &DEFAULT_TIMEOUT_SECS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("SHOPFRONT_HTTP_TIMEOUT_SECS".to_owned(), e.to_string())
        })?;
        let user_agent = get_env_or_default("SHOPFRONT_USER_AGENT", DEFAULT_USER_AGENT);

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            user_agent,
        })
    }

    /// The base URL as a string with no trailing slash, ready for joining
    /// `/api/...` paths.
    #[must_use]
    pub fn base(&self) -> String {
        self.base_url.as_str().trim_end_matches('/').to_owned()
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw)
        .map_err(|e| ConfigError::InvalidBaseUrl(raw.to_owned(), e.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidBaseUrl(
            raw.to_owned(),
            format!("unsupported scheme: {}", url.scheme()),
        ));
    }
    Ok(url)
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_owned()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_http_and_https() {
        assert!(ClientConfig::new("http://localhost:8000").is_ok());
        assert!(ClientConfig::new("https://shop.example.com").is_ok());
    }

    #[test]
    fn test_new_rejects_other_schemes() {
        let err = ClientConfig::new("ftp://shop.example.com").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl(_, _)));
    }

    #[test]
    fn test_new_rejects_garbage() {
        assert!(ClientConfig::new("not a url").is_err());
    }

    #[test]
    fn test_base_strips_trailing_slash() {
        let config = ClientConfig::new("http://localhost:8000/").unwrap();
        assert_eq!(config.base(), "http://localhost:8000");
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("http://localhost:8000").unwrap();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("shopfront-client/"));
    }
}
