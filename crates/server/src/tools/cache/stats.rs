//! cache_stats tool implementation.
//!
//! Reports the size and TTL of the search cache.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serp_core::{Error, SearchCache};

/// Output from the cache_stats tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CacheStatsOutput {
    /// Entries held, including expired ones not yet read or purged.
    pub entries: usize,
    /// Entry lifetime in seconds.
    pub ttl_secs: i64,
}

/// Implementation of the cache_stats tool.
pub async fn stats_impl(cache: &SearchCache) -> Result<CallToolResult, McpError> {
    let output = CacheStatsOutput { entries: cache.len(), ttl_secs: cache.ttl().num_seconds() };
    let json = serde_json::to_string_pretty(&output).map_err(Error::from)?;

    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serp_core::{SearchResponse, SearchResult};

    #[tokio::test]
    async fn test_stats_impl() {
        let cache = SearchCache::with_defaults();
        cache.set("serp::a::10", SearchResponse::ok(vec![SearchResult::new("A", "a", "")]));

        let result = stats_impl(&cache).await.unwrap();
        let text = &result.content[0].as_text().unwrap().text;
        let output: CacheStatsOutput = serde_json::from_str(text).unwrap();

        assert_eq!(output.entries, 1);
        assert_eq!(output.ttl_secs, 1800);
    }
}
