//! MCP server handler implementation.
//!
//! This module defines the main server handler that
//! routes tool calls to the appropriate implementations.
use crate::tools::{
    cache::{purge_impl, stats_impl},
    web_search::{WebSearchParams, search_impl},
};

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};
use serp_client::SearchService;
use std::sync::Arc;

/// The main MCP server handler for serp-web.
#[derive(Clone)]
pub struct SerpWebServer {
    tool_router: ToolRouter<Self>,
    service: Arc<SearchService>,
}

/// Tool router implementation using the #[tool_router] macro.
///
/// This macro generates the routing logic that maps tool names to handler methods.
#[tool_router]
impl SerpWebServer {
    /// Create a new server handler around a shared search service.
    pub fn new(service: Arc<SearchService>) -> Self {
        Self { tool_router: Self::tool_router(), service }
    }

    /// Search the web through the SERP provider.
    ///
    /// Results are cached for the configured TTL; failures are reported in the
    /// response rather than as protocol errors.
    #[tool(
        description = "Search Google through the SERP provider. Returns normalized results (title, snippet, link) and a formatted text block, optionally ranked by keywords."
    )]
    async fn web_search(&self, params: Parameters<WebSearchParams>) -> Result<CallToolResult, McpError> {
        search_impl(&self.service, params.0).await
    }

    #[tool(description = "Report the number of cached search responses and the cache TTL.")]
    async fn cache_stats(&self) -> Result<CallToolResult, McpError> {
        stats_impl(self.service.cache()).await
    }

    #[tool(description = "Delete expired search cache entries. Returns the number deleted.")]
    async fn cache_purge(&self) -> Result<CallToolResult, McpError> {
        purge_impl(self.service.cache()).await
    }
}

impl ServerHandler for SerpWebServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "serp-web".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing::{CountingTransport, service_with};

    #[test]
    fn test_registers_all_tools() {
        let (service, _transport) = service_with(Some("token"), CountingTransport::organic(1));
        let server = SerpWebServer::new(Arc::new(service));

        let mut names: Vec<String> = server.tool_router.list_all().into_iter().map(|t| t.name.to_string()).collect();
        names.sort();
        assert_eq!(names, ["cache_purge", "cache_stats", "web_search"]);
    }

    #[test]
    fn test_server_info() {
        let (service, _transport) = service_with(None, CountingTransport::organic(1));
        let info = SerpWebServer::new(Arc::new(service)).get_info();
        assert_eq!(info.server_info.name, "serp-web");
    }
}
