//! HTTP client for the chart endpoint.

use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

use crate::chart::ChartResponse;

/// Configuration for the history client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout (separate from the request timeout).
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("chala/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur during a download.
#[derive(Error, Debug)]
pub enum DownloadError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error status with no usable payload.
    #[error("Server error: {status}")]
    ServerError {
        /// HTTP status code.
        status: u16,
    },
}

/// HTTP client for the chart endpoint.
#[derive(Debug, Clone)]
pub struct HistoryClient {
    client: Client,
    config: ClientConfig,
}

impl HistoryClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issues one GET for a chart payload and decodes it.
    ///
    /// Client-error statuses are not short-circuited: the provider
    /// answers them with a JSON body whose `chart.error` carries the
    /// reason, and that description is worth more than the bare status.
    pub(crate) async fn fetch_chart(&self, url: &str) -> Result<ChartResponse, DownloadError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status.is_server_error() {
            return Err(DownloadError::ServerError {
                status: status.as_u16(),
            });
        }
        Ok(response.json::<ChartResponse>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("chala/"));
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = HistoryClient::with_defaults();
        assert!(client.is_ok());
    }
}
