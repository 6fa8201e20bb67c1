//! Error types for Bing search operations

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur when calling the Bing search APIs
#[derive(Error, Debug)]
pub enum BingError {
    /// The request never produced a response (DNS, connect, TLS, reset)
    #[error("transport error: {0}")]
    Transport(String),

    /// The request did not complete within the configured timeout
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The service answered with a non-success status
    #[error("Bing API error {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message from the service's error body, or the raw body
        message: String,
    },

    /// The payload was not JSON or did not match the expected shape
    #[error("failed to decode Bing response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl BingError {
    /// Whether the failure happened before any response arrived
    pub fn is_transport(&self) -> bool {
        matches!(self, BingError::Transport(_) | BingError::Timeout(_))
    }
}

/// Result type alias for Bing operations
pub type BingResult<T> = Result<T, BingError>;
