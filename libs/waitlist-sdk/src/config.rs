use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

/// Where the two endpoints live and how long to wait for them.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL the endpoint paths are resolved against (e.g. "https://example.com/api/")
    pub base_url: Url,

    /// Confirmation mail endpoint, relative to `base_url` (default: "notify")
    pub notify_path: String,

    /// Insert endpoint, relative to `base_url` (default: "waitlist")
    pub waitlist_path: String,

    /// TCP + TLS handshake timeout (default: 5s)
    pub connect_timeout: Duration,

    /// Total request/response timeout (default: 30s)
    pub timeout: Duration,
}

impl ClientConfig {
    pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a config with default paths and timeouts.
    ///
    /// A missing trailing slash is added so that the paths resolve under the
    /// base instead of replacing its last segment.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let mut base_url = Url::parse(base_url)?;

        if base_url.cannot_be_a_base() {
            return Err(ConfigError::Invalid(format!(
                "{base_url} cannot be used as a base URL"
            )));
        }

        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            base_url,
            notify_path: "notify".to_string(),
            waitlist_path: "waitlist".to_string(),
            connect_timeout: Self::DEFAULT_CONNECT_TIMEOUT,
            timeout: Self::DEFAULT_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn notify_url(&self) -> Result<Url, ConfigError> {
        Ok(self.base_url.join(&self.notify_path)?)
    }

    pub fn waitlist_url(&self) -> Result<Url, ConfigError> {
        Ok(self.base_url.join(&self.waitlist_path)?)
    }
}
