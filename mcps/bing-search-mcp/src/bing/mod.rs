//! Bing Search API client
//!
//! One typed call, [`BingClient::search`], serves every endpoint: the result
//! shape names its [`SearchKind`], the kind picks the path and fixed
//! parameters, and the body is decoded straight into the shape.
//!
//! # Example
//!
//! ```rust,ignore
//! use bing_search_mcp::{BingClient, BingConfig};
//!
//! let client = BingClient::new(BingConfig::new("https://api.cognitive.microsoft.com", key))?;
//! let news = client.fetch_news_search("red panda", 5).await?;
//! for article in news.articles() {
//!     println!("{:?}", article.name);
//! }
//! ```

pub mod decode;
pub mod error;
pub mod request;
pub mod transport;

use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

pub use decode::decode;
pub use error::{BingError, BingResult};
pub use request::{build_request, BingRequest, SearchKind, SUBSCRIPTION_KEY_HEADER};
pub use transport::{HttpTransport, ReqwestTransport, TransportResponse};

use crate::config::BingConfig;
use crate::types::{NewsSearchResult, WebSearchResult};

/// A result shape that one Bing endpoint returns
pub trait BingResponse: DeserializeOwned + Send {
    const KIND: SearchKind;
}

impl BingResponse for WebSearchResult {
    const KIND: SearchKind = SearchKind::Web;
}

impl BingResponse for NewsSearchResult {
    const KIND: SearchKind = SearchKind::News;
}

/// Client for the Bing Web and News Search APIs
///
/// Holds read-only configuration and a shared transport, so it can be cloned
/// or shared across tasks freely.
#[derive(Clone)]
pub struct BingClient {
    config: BingConfig,
    transport: Arc<dyn HttpTransport>,
}

impl BingClient {
    /// Create a client that talks to the network through `reqwest`
    pub fn new(config: BingConfig) -> BingResult<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client over any transport
    pub fn with_transport(config: BingConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &BingConfig {
        &self.config
    }

    /// Run a web search
    pub async fn fetch_web_search(&self, query: &str, count: u32) -> BingResult<WebSearchResult> {
        self.search(query, count).await
    }

    /// Run a news search limited to the past month
    pub async fn fetch_news_search(
        &self,
        query: &str,
        count: u32,
    ) -> BingResult<NewsSearchResult> {
        self.search(query, count).await
    }

    /// Build, send and decode one search call
    ///
    /// Transport failures return before the decoder runs. A non-success
    /// status becomes [`BingError::Api`]. Nothing is retried.
    #[instrument(skip(self), fields(kind = %R::KIND))]
    pub async fn search<R: BingResponse>(&self, query: &str, count: u32) -> BingResult<R> {
        let request = build_request(R::KIND, query, count, &self.config);
        debug!(url = %request.url, "sending Bing request");

        let response = self.transport.get(&request).await.inspect_err(|e| {
            warn!(error = %e, "Bing request failed");
        })?;

        if !response.is_success() {
            let err = decode::api_error(response.status, &response.body);
            warn!(error = %err, "Bing returned an error status");
            return Err(err);
        }

        decode(&response.body).inspect_err(|e| {
            warn!(error = %e, "could not decode Bing response");
        })
    }
}
