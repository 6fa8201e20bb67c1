//! Bing Search MCP Library
//!
//! Typed client for the Bing Web Search and Bing News Search APIs, plus an
//! MCP server exposing both as tools.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use bing_search_mcp::{BingClient, BingConfig};
//!
//! let client = BingClient::new(BingConfig::new("https://api.cognitive.microsoft.com", key))?;
//! let web = client.fetch_web_search("red panda", 5).await?;
//! if let Some(pages) = &web.web_pages {
//!     println!("{:?} matches", pages.total_estimated_matches);
//! }
//! ```
//!
//! # Configuration
//! Set `BING_SUBSCRIPTION_KEY` (and optionally `BING_MKT`, `BING_ENDPOINT`)
//! or configure in `~/.binks/bing-search.toml`

pub mod bing;
pub mod config;
pub mod logging;
pub mod server;
pub mod types;

// Re-export the client surface
pub use bing::{BingClient, BingError, BingResponse, BingResult, SearchKind};
pub use config::{BingConfig, Config, ConfigError};

// Re-export main server type and its parameter types
pub use server::{BingSearchMcpServer, NewsSearchParams, WebSearchParams};

pub use types::{NewsSearchResult, WebSearchResult};
