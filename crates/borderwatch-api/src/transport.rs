// Shared transport configuration for building reqwest::Client instances.
//
// Every resource façade routes through one client built from this config,
// so base URL, timeout, and default headers are decided in exactly one
// place.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use url::Url;

use crate::error::Error;

/// Default gateway base, matching a locally-run backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Environment variable that overrides the gateway base URL.
pub const BASE_URL_ENV: &str = "BORDERWATCH_API_URL";

/// Transport configuration for the gateway client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Gateway base URL, including the `/api` prefix.
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Config with the base URL taken from `BORDERWATCH_API_URL` when set,
    /// falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        Self::with_base_override(std::env::var(BASE_URL_ENV).ok())
    }

    fn with_base_override(base_url: Option<String>) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            ..Self::default()
        }
    }

    /// Parse the configured base URL.
    pub fn base_url(&self) -> Result<Url, Error> {
        Url::parse(&self.base_url).map_err(Error::InvalidUrl)
    }

    /// Build a `reqwest::Client` from this config.
    ///
    /// JSON is the default content type; individual requests (the
    /// form-encoded login) override it per call.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("borderwatch-api/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(Error::Transport)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{DEFAULT_BASE_URL, TransportConfig};

    #[test]
    fn defaults_point_at_the_local_gateway() {
        let config = TransportConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));

        let url = config.base_url().expect("default URL should parse");
        assert_eq!(url.path(), "/api");
    }

    #[test]
    fn base_override_replaces_url_and_keeps_other_defaults() {
        let config =
            TransportConfig::with_base_override(Some("https://gateway.example.net/api".into()));
        assert_eq!(config.base_url, "https://gateway.example.net/api");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn absent_override_falls_back_to_the_default_url() {
        let config = TransportConfig::with_base_override(None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn invalid_base_url_is_rejected_at_parse_time() {
        let config = TransportConfig {
            base_url: "not a url".into(),
            ..TransportConfig::default()
        };
        assert!(config.base_url().is_err());
    }
}
