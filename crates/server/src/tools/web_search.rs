//! web_search tool implementation.
//!
//! Runs a cached SERP search and returns the normalized response together
//! with a rendered text block for the model.

use rmcp::{ErrorData as McpError, model::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serp_client::{SearchRequest, SearchService, format_results};
use serp_core::{Error, SearchResponse};

/// Input parameters for web_search tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct WebSearchParams {
    /// Search query (required).
    pub query: String,

    /// Number of results (default 10). Zero or negative returns no results.
    #[serde(default)]
    pub num_results: Option<i64>,

    /// Country code (default "us"). Currently has no effect on results.
    #[serde(default)]
    pub country: Option<String>,

    /// Keywords used to rank the formatted results by relevance.
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
}

/// Output structure for web_search tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WebSearchOutput {
    /// The normalized search response.
    pub response: SearchResponse,
    /// Results rendered as plain text, ranked by `keywords` if given.
    pub formatted: String,
}

/// Implementation of the web_search tool.
pub async fn search_impl(service: &SearchService, params: WebSearchParams) -> Result<CallToolResult, McpError> {
    if params.query.trim().is_empty() {
        return Err(Error::InvalidInput("query cannot be empty".into()).into());
    }

    let mut req = SearchRequest::new(params.query);
    if let Some(n) = params.num_results {
        req = req.with_num_results(usize::try_from(n).unwrap_or(0));
    }
    if let Some(country) = params.country {
        req = req.with_country(country);
    }

    let response = service.search(&req).await;
    let formatted = format_results(&response.results, params.keywords.as_deref());
    let success = response.success;

    let output = WebSearchOutput { response, formatted };
    let json = serde_json::to_string_pretty(&output).map_err(Error::from)?;

    if success {
        Ok(CallToolResult::success(vec![Content::text(json)]))
    } else {
        Ok(CallToolResult::error(vec![Content::text(json)]))
    }
}
