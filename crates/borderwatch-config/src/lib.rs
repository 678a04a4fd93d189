//! Configuration for the BorderWatch gateway client.
//!
//! Resolves the gateway address and timeout from defaults overridden by
//! `BORDERWATCH_*` environment variables, and provides a JSON-file
//! [`SessionStore`](borderwatch_api::SessionStore) so the session survives
//! a restart without the core crate depending on any storage backend.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use borderwatch_api::TransportConfig;
use borderwatch_api::transport::DEFAULT_BASE_URL;

mod store;

pub use store::FileSessionStore;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("session file is not valid JSON: {0}")]
    SessionFormat(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Gateway config ──────────────────────────────────────────────────

/// Resolved gateway settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatewayConfig {
    /// Gateway base URL, including the `/api` prefix.
    /// Overridden by `BORDERWATCH_API_URL`.
    pub api_url: String,

    /// Request timeout in seconds. Overridden by `BORDERWATCH_TIMEOUT_SECS`.
    pub timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_owned(),
            timeout_secs: 30,
        }
    }
}

impl GatewayConfig {
    /// Load settings: defaults, then `BORDERWATCH_*` environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Env::prefixed("BORDERWATCH_"));
        Ok(figment.extract()?)
    }

    /// Convert into the transport config the gateway client consumes.
    pub fn into_transport(self) -> TransportConfig {
        TransportConfig {
            base_url: self.api_url,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

// ── Session file path ───────────────────────────────────────────────

/// Resolve the session file path via XDG / platform conventions.
pub fn session_path() -> PathBuf {
    ProjectDirs::from("com", "borderwatch", "borderwatch").map_or_else(
        || {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".local");
            p.push("share");
            p.push("borderwatch");
            p.push("session.json");
            p
        },
        |dirs| dirs.data_dir().join("session.json"),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::GatewayConfig;
    use borderwatch_api::transport::DEFAULT_BASE_URL;

    #[test]
    fn defaults_match_the_local_gateway() {
        figment::Jail::expect_with(|_jail| {
            let config = GatewayConfig::load().expect("defaults should load");
            assert_eq!(config.api_url, DEFAULT_BASE_URL);
            assert_eq!(config.timeout_secs, 30);
            Ok(())
        });
    }

    #[test]
    fn environment_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("BORDERWATCH_API_URL", "https://gateway.example.net/api");
            jail.set_env("BORDERWATCH_TIMEOUT_SECS", "5");

            let config = GatewayConfig::load().expect("env config should load");
            assert_eq!(config.api_url, "https://gateway.example.net/api");

            let transport = config.into_transport();
            assert_eq!(transport.base_url, "https://gateway.example.net/api");
            assert_eq!(transport.timeout.as_secs(), 5);
            Ok(())
        });
    }
}
