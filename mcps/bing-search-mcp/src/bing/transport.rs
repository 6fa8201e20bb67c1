//! HTTP transport for Bing requests
//!
//! The client only needs a single GET. [`HttpTransport`] is the seam where a
//! fake can stand in for the network.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::error::{BingError, BingResult};
use super::request::BingRequest;
use crate::config::{BingConfig, ConfigError};

/// Raw response handed to the decoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes a built request
///
/// Implementations must map connection-level failures to
/// [`BingError::Transport`] (or [`BingError::Timeout`]) and must not retry.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, request: &BingRequest) -> BingResult<TransportResponse>;
}

/// Transport backed by `reqwest`
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    timeout: Duration,
}

impl ReqwestTransport {
    pub fn new(config: &BingConfig) -> BingResult<Self> {
        if config.timeout_seconds == 0 {
            return Err(BingError::Transport(ConfigError::ZeroTimeout.to_string()));
        }

        let timeout = config.timeout();
        // The key header must never follow a Location to another host
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(&config.user_agent)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| BingError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, timeout })
    }

    fn map_error(&self, err: reqwest::Error) -> BingError {
        if err.is_timeout() {
            BingError::Timeout(self.timeout)
        } else {
            // Drop the URL so nothing from the request leaks into messages
            BingError::Transport(err.without_url().to_string())
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, request: &BingRequest) -> BingResult<TransportResponse> {
        let mut builder = self.client.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await.map_err(|e| self.map_error(e))?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| self.map_error(e))?;

        debug!(status, bytes = body.len(), "received Bing response");

        Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })
    }
}
