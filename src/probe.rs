//! Liveness probe for the local web app
//!
//! A single HTTP GET against the server's base URL. Any response at all
//! means a listener is bound; only connect failures and timeouts count as
//! "not running". No retries, no custom headers, body discarded.

use reqwest::Client;
use std::time::Duration;

use crate::core::Config;

/// One-shot liveness probe against the web app
#[derive(Clone)]
pub struct ServerProbe {
    client: Client,
    base_url: String,
}

impl ServerProbe {
    /// Create a probe from configuration
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(config.server_url(), config.probe.timeout_secs)
    }

    /// Create a probe with a custom base URL and timeout
    pub fn with_base_url(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// The URL this probe targets
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check whether the server is reachable
    ///
    /// Returns true for any HTTP response regardless of status code. The
    /// response body is discarded.
    pub async fn is_alive(&self) -> bool {
        self.client.get(&self.base_url).send().await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;

    #[test]
    fn test_probe_creation() {
        let probe = ServerProbe::new(&Config::default());
        assert_eq!(probe.base_url(), "http://127.0.0.1:5102");
    }

    #[tokio::test]
    async fn test_probe_unbound_port_is_dead() {
        // Nothing listens on this address
        let probe = ServerProbe::with_base_url("http://127.0.0.1:1", 1);
        assert!(!probe.is_alive().await);
    }
}
