use async_trait::async_trait;
use waitlist_types::JoinRequest;

use crate::error::TransportError;

/// The two remote calls a submission makes. Each returns the HTTP status.
#[async_trait]
pub trait WaitlistApi: Send + Sync {
    /// POST the signup to the confirmation mail endpoint.
    async fn notify(&self, request: &JoinRequest) -> Result<u16, TransportError>;

    /// POST the signup to the waitlist insert endpoint.
    async fn create_entry(&self, request: &JoinRequest) -> Result<u16, TransportError>;
}

#[cfg(feature = "client")]
pub use http::HttpWaitlistApi;

#[cfg(feature = "client")]
mod http {
    use async_trait::async_trait;
    use url::Url;
    use waitlist_types::JoinRequest;

    use super::WaitlistApi;
    use crate::{
        config::ClientConfig,
        error::{ConfigError, TransportError},
    };

    /// `WaitlistApi` over HTTP with bounded timeouts.
    pub struct HttpWaitlistApi {
        http_client: reqwest::Client,
        notify_url: Url,
        waitlist_url: Url,
    }

    impl HttpWaitlistApi {
        pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
            let http_client = reqwest::Client::builder()
                .connect_timeout(config.connect_timeout)
                .timeout(config.timeout)
                .build()
                .map_err(|e| ConfigError::Invalid(format!("Failed to build HTTP client: {e}")))?;

            Ok(Self {
                http_client,
                notify_url: config.notify_url()?,
                waitlist_url: config.waitlist_url()?,
            })
        }

        async fn post(&self, url: &Url, request: &JoinRequest) -> Result<u16, TransportError> {
            let response = self
                .http_client
                .post(url.clone())
                .json(request)
                .send()
                .await
                .map_err(|e| {
                    if e.is_timeout() {
                        TransportError::Timeout
                    } else {
                        TransportError::Network(e)
                    }
                })?;

            Ok(response.status().as_u16())
        }
    }

    #[async_trait]
    impl WaitlistApi for HttpWaitlistApi {
        async fn notify(&self, request: &JoinRequest) -> Result<u16, TransportError> {
            self.post(&self.notify_url, request).await
        }

        async fn create_entry(&self, request: &JoinRequest) -> Result<u16, TransportError> {
            self.post(&self.waitlist_url, request).await
        }
    }
}
