//! serp-web server entry point.
//!
//! This is the main binary that boots the MCP server on stdio transport.
//! Logging goes to stderr to avoid interfering with the JSON-RPC protocol on stdout.

use anyhow::{Context, Result};
use rmcp::service::serve_server;
use rmcp::transport::io::stdio;
use serp_client::{SearchService, SerpClient};
use serp_core::{AppConfig, SearchCache, SystemClock};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod handler;
mod tools;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load().context("failed to load configuration")?;
    if config.require_api_token().is_err() {
        tracing::warn!("BRIGHTDATA_API_TOKEN is not set; web_search calls will fail until it is configured");
    }

    let cache = Arc::new(SearchCache::new(Arc::new(SystemClock), config.cache_ttl()));
    let client = SerpClient::from_app_config(&config).context("failed to build SERP client")?;
    let service = Arc::new(SearchService::new(client, cache.clone()));

    tracing::info!(zone = %config.zone, ttl_secs = config.cache_ttl_secs, "Starting serp-web server on stdio transport");

    let handler = handler::SerpWebServer::new(service);
    let transport = stdio();
    let server = serve_server(handler, transport).await?;

    server.waiting().await?;

    cache.clear();
    tracing::info!("serp-web server stopped");

    Ok(())
}
