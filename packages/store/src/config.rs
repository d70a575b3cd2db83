//! # Backend configuration — `posts.toml`
//!
//! Describes how the app reaches the managed backend service. The value is
//! read once at startup by the binary and handed to the component tree as
//! context; nothing in the workspace initialises the backend globally.
//!
//! ## Structure
//!
//! ```toml
//! [backend]
//! host = "https://posts.example.com"   # omit to use the in-memory backend
//! poll_interval_secs = 5               # live query refresh interval
//! ```
//!
//! The `BACKEND_URL` environment variable overrides `backend.host`.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable holding the backend host URL.
pub const BACKEND_URL_VAR: &str = "BACKEND_URL";

/// Top-level configuration stored in `posts.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub backend: BackendConfig,
}

/// Connection settings for the backend service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend. `None` selects the in-memory backend.
    #[serde(default)]
    pub host: Option<String>,
    /// Seconds between refreshes of live queries. Clamped to at least 1.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u32,
}

fn default_poll_interval() -> u32 {
    5
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            host: None,
            poll_interval_secs: default_poll_interval(),
        }
    }
}

impl BackendConfig {
    /// Config pointing at the given host.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: Some(host.into()),
            ..Self::default()
        }
    }

    /// Builder method to set the live query refresh interval.
    pub fn with_poll_interval(mut self, secs: u32) -> Self {
        self.poll_interval_secs = secs;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "posts.toml"
    }

    /// Parse the `[backend]` table from a TOML document.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(s)?;
        config.backend.validated()
    }

    /// Serialize to TOML, wrapped in the `[backend]` table.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig {
            backend: self.clone(),
        })
    }

    /// Replace the host with `value` when it is present and non-blank.
    pub fn with_host_override(mut self, value: Option<String>) -> Result<Self, ConfigError> {
        if let Some(host) = value.filter(|h| !h.trim().is_empty()) {
            self.host = Some(host.trim().to_string());
        }
        self.validated()
    }

    /// Seconds between live query refreshes, never zero.
    pub fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(u64::from(self.poll_interval_secs.max(1)))
    }

    /// Join the host and `path` with exactly one slash between them.
    pub fn endpoint(&self, path: &str) -> Option<String> {
        let host = self.host.as_deref()?;
        Some(format!(
            "{}/{}",
            host.trim_end_matches('/'),
            path.trim_start_matches('/')
        ))
    }

    fn validated(self) -> Result<Self, ConfigError> {
        match &self.host {
            Some(host) if !(host.starts_with("http://") || host.starts_with("https://")) => {
                Err(ConfigError::InvalidHost(host.clone()))
            }
            _ => Ok(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_table_missing() {
        let config = BackendConfig::from_toml("").unwrap();
        assert_eq!(config, BackendConfig::default());
        assert_eq!(config.poll_interval_secs, 5);
        assert!(config.host.is_none());
    }

    #[test]
    fn test_parse_backend_table() {
        let config = BackendConfig::from_toml(
            r#"
            [backend]
            host = "https://posts.example.com"
            poll_interval_secs = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.host.as_deref(), Some("https://posts.example.com"));
        assert_eq!(config.poll_interval_secs, 2);
    }

    #[test]
    fn test_rejects_host_without_scheme() {
        let err = BackendConfig::from_toml("[backend]\nhost = \"posts.example.com\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHost(_)));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = BackendConfig::new("http://localhost:8000").with_poll_interval(10);
        let text = config.to_toml().unwrap();
        assert!(text.contains("[backend]"));
        assert_eq!(BackendConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_host_override() {
        let config = BackendConfig::new("http://a.example")
            .with_host_override(Some(" https://b.example ".to_string()))
            .unwrap();
        assert_eq!(config.host.as_deref(), Some("https://b.example"));

        let config = BackendConfig::new("http://a.example")
            .with_host_override(Some("".to_string()))
            .unwrap();
        assert_eq!(config.host.as_deref(), Some("http://a.example"));

        assert!(BackendConfig::default()
            .with_host_override(Some("ftp://x".to_string()))
            .is_err());
    }

    #[test]
    fn test_endpoint_joins_with_single_slash() {
        let config = BackendConfig::new("https://posts.example.com/");
        assert_eq!(
            config.endpoint("/api/session/user").as_deref(),
            Some("https://posts.example.com/api/session/user")
        );
        assert_eq!(BackendConfig::default().endpoint("api"), None);
    }

    #[test]
    fn test_poll_interval_never_zero() {
        let config = BackendConfig::default().with_poll_interval(0);
        assert_eq!(config.poll_interval(), std::time::Duration::from_secs(1));
    }
}
