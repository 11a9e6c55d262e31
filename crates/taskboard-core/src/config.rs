// ── Runtime client configuration ──
//
// Describes *where* the API lives and how to talk to it. Never touches
// disk: the front end builds a `ClientConfig` and hands it in.

use std::time::Duration;

use taskboard_api::TransportConfig;
use url::Url;

/// Configuration for one API endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base, e.g. `http://localhost:3000`.
    pub api_base: Url,
    /// Per-request timeout.
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    /// Config for `api_base` with default timeout and user agent.
    pub fn new(api_base: Url) -> Self {
        let transport = TransportConfig::default();
        Self {
            api_base,
            timeout: transport.timeout,
            user_agent: transport.user_agent,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub(crate) fn transport(&self) -> TransportConfig {
        TransportConfig {
            timeout: self.timeout,
            user_agent: self.user_agent.clone(),
        }
    }
}
