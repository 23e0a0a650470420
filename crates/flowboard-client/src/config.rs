//! Client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

/// Default timeout for HTTP requests: 30 seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the flowboard HTTP client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the flowboard API, e.g. `https://api.example.com/v1/`.
    pub base_url: Url,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub http_timeout: u64,

    /// User-Agent header to send with requests.
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ClientConfig {
    /// Creates a configuration for the given API base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            http_timeout: default_timeout_secs(),
            user_agent: None,
        }
    }

    /// Returns the timeout as a Duration, using the default if zero.
    pub fn effective_timeout(&self) -> Duration {
        if self.http_timeout == 0 {
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        } else {
            Duration::from_secs(self.http_timeout)
        }
    }

    /// Returns the effective user agent, using the default if not set.
    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(Self::default_user_agent)
    }

    fn default_user_agent() -> String {
        format!("flowboard/{}", env!("CARGO_PKG_VERSION"))
    }

    /// Builds an endpoint URL relative to the configured base.
    pub fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path)
    }

    /// Set the timeout in seconds.
    #[must_use]
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.http_timeout = timeout_secs;
        self
    }

    /// Set the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://api.example.com/v1/").unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::new(base());
        assert_eq!(config.http_timeout, 30);
        assert!(config.user_agent.is_none());
        assert_eq!(config.effective_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_builder_pattern() {
        let config = ClientConfig::new(base())
            .with_timeout(120)
            .with_user_agent("editor-shell/2.0");
        assert_eq!(config.http_timeout, 120);
        assert_eq!(config.user_agent.as_deref(), Some("editor-shell/2.0"));
    }

    #[test]
    fn test_effective_timeout_uses_default_when_zero() {
        let config = ClientConfig::new(base()).with_timeout(0);
        assert_eq!(
            config.effective_timeout(),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        );
    }

    #[test]
    fn test_effective_user_agent_uses_default_when_none() {
        let config = ClientConfig::new(base());
        assert!(config.effective_user_agent().starts_with("flowboard/"));
    }

    #[test]
    fn test_endpoint_joins_relative_paths() {
        let config = ClientConfig::new(base());
        assert_eq!(
            config.endpoint("operations").unwrap().as_str(),
            "https://api.example.com/v1/operations"
        );
        assert_eq!(
            config.endpoint("pipelines/abc/run").unwrap().as_str(),
            "https://api.example.com/v1/pipelines/abc/run"
        );
    }
}
