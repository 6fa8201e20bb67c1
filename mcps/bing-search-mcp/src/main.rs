//! Bing Search MCP Server
//!
//! Bing Web Search and Bing News Search exposed as MCP tools over stdio.
//!
//! # Configuration
//! Set `BING_SUBSCRIPTION_KEY` or configure in `~/.binks/bing-search.toml`

use bing_search_mcp::{logging, BingSearchMcpServer, Config};
use rmcp::{transport::stdio, ServiceExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing("bing_search_mcp")?;

    tracing::info!("Starting Bing Search MCP Server");

    let config = Config::load()?;
    if let Err(e) = config.validate() {
        // Keep serving; get_config shows which setting is missing
        tracing::warn!("Configuration incomplete: {}", e);
    }
    tracing::info!(
        "Bing endpoint: {} (market: {})",
        config.bing.endpoint,
        config.bing.market
    );

    let server = BingSearchMcpServer::new(config)?;
    let service = server.serve(stdio()).await?;

    tracing::info!("Server running, waiting for requests...");
    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}
