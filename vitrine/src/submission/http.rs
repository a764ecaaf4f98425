//! HTTP delivery of contact form snapshots.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::Transport;
use crate::config::TransportConfig;
use crate::error::{ConfigError, SubmitError};
use crate::form::FormSnapshot;

/// POSTs each snapshot as a JSON object to a backend endpoint.
///
/// Any 2xx response counts as accepted. Other statuses become
/// [`SubmitError::Http`], connection failures [`SubmitError::Network`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoint: Url,
    http_client: Client,
    timeout: Duration,
}

impl HttpTransport {
    /// Create a transport for `endpoint`.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, ConfigError> {
        let endpoint = Url::parse(endpoint)?;
        let http_client = Client::builder().build()?;
        Ok(Self {
            endpoint,
            http_client,
            timeout,
        })
    }

    /// Create a transport from config. `None` when no endpoint is configured.
    pub fn from_config(config: &TransportConfig) -> Result<Option<Self>, ConfigError> {
        config
            .endpoint
            .as_deref()
            .map(|endpoint| Self::new(endpoint, config.timeout()))
            .transpose()
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, snapshot: &FormSnapshot) -> Result<(), SubmitError> {
        log::info!("Posting {} field(s) to {}", snapshot.len(), self.endpoint);

        let response = self
            .http_client
            .post(self.endpoint.clone())
            .timeout(self.timeout)
            .json(snapshot)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            log::warn!("Endpoint {} answered {}", self.endpoint, status);
            Err(SubmitError::Http {
                status: status.as_u16(),
            })
        }
    }
}
