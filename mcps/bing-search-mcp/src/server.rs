//! MCP Server implementation for Bing search
//!
//! Exposes the typed client as tools. Each tool returns the decoded result
//! tree as pretty-printed JSON.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::bing::{BingClient, BingError};
use crate::config::{Config, SearchConfig};

/// Largest count the Bing API accepts in one call
pub const MAX_COUNT: u32 = 50;

/// The main Bing Search MCP Server
#[derive(Clone)]
pub struct BingSearchMcpServer {
    client: BingClient,
    search: SearchConfig,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Parameter Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct WebSearchParams {
    /// The search query
    #[schemars(description = "The web search query string")]
    pub query: String,
    /// Number of results to request
    #[schemars(description = "Number of results to request (default from config, max 50)")]
    pub count: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct NewsSearchParams {
    /// The search query
    #[schemars(description = "The news search query string")]
    pub query: String,
    /// Number of results to request
    #[schemars(description = "Number of articles to request (default from config, max 50)")]
    pub count: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ConfigStatus<'a> {
    endpoint: &'a str,
    market: &'a str,
    subscription_key_set: bool,
    default_count: u32,
    timeout_seconds: u64,
}

// ============================================================================
// Helpers
// ============================================================================

fn json_success<T: Serialize>(data: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn bing_to_mcp_error(err: BingError) -> McpError {
    McpError::internal_error(err.to_string(), None)
}

fn validate_query(query: &str) -> Result<&str, McpError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(McpError::invalid_params("query cannot be empty", None));
    }
    Ok(trimmed)
}

impl BingSearchMcpServer {
    fn resolve_count(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.search.default_count)
            .clamp(1, MAX_COUNT)
    }

    fn config_status(&self) -> ConfigStatus<'_> {
        let bing = self.client.config();
        ConfigStatus {
            endpoint: &bing.endpoint,
            market: &bing.market,
            subscription_key_set: bing.has_subscription_key(),
            default_count: self.search.default_count,
            timeout_seconds: bing.timeout_seconds,
        }
    }
}

// ============================================================================
// Tool Router Implementation
// ============================================================================

#[tool_router]
impl BingSearchMcpServer {
    pub fn new(config: Config) -> Result<Self, BingError> {
        let client = BingClient::new(config.bing)?;
        Ok(Self::with_client(client, config.search))
    }

    /// Build a server around an existing client (e.g. one with a fake transport)
    pub fn with_client(client: BingClient, search: SearchConfig) -> Self {
        if !client.config().has_subscription_key() {
            tracing::warn!("No Bing subscription key configured; requests will be rejected");
        }

        Self {
            client,
            search,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Search the web with Bing. Returns web pages, images, news, videos and ranking metadata.")]
    async fn bing_web_search(
        &self,
        Parameters(params): Parameters<WebSearchParams>,
    ) -> Result<CallToolResult, McpError> {
        let query = validate_query(&params.query)?;
        let count = self.resolve_count(params.count);

        tracing::info!("Web search for: {} (count: {})", query, count);

        let result = self
            .client
            .fetch_web_search(query, count)
            .await
            .map_err(bing_to_mcp_error)?;

        json_success(&result)
    }

    #[tool(description = "Search Bing News for articles from the past month. Returns titles, URLs, providers and publish dates.")]
    async fn bing_news_search(
        &self,
        Parameters(params): Parameters<NewsSearchParams>,
    ) -> Result<CallToolResult, McpError> {
        let query = validate_query(&params.query)?;
        let count = self.resolve_count(params.count);

        tracing::info!("News search for: {} (count: {})", query, count);

        let result = self
            .client
            .fetch_news_search(query, count)
            .await
            .map_err(bing_to_mcp_error)?;

        json_success(&result)
    }

    #[tool(description = "Get the Bing client configuration (the subscription key is never shown).")]
    async fn get_config(&self) -> Result<CallToolResult, McpError> {
        json_success(&self.config_status())
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for BingSearchMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Bing Search MCP Server - provides Bing Web Search and Bing News Search \
                 (past month) as tools. Results keep the service's ranking order."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
