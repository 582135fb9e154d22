//! cache_purge tool implementation.
//!
//! Deletes expired search cache entries. Expiry is otherwise only applied
//! when an entry is read.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serp_core::{Error, SearchCache};

/// Output from the cache_purge tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CachePurgeOutput {
    /// Number of entries deleted.
    pub deleted: usize,
}

/// Implementation of the cache_purge tool.
pub async fn purge_impl(cache: &SearchCache) -> Result<CallToolResult, McpError> {
    let deleted = cache.purge_expired();
    tracing::info!(deleted, "purged expired search cache entries");

    let output = CachePurgeOutput { deleted };
    let json = serde_json::to_string_pretty(&output).map_err(Error::from)?;

    Ok(CallToolResult::success(vec![Content::text(json)]))
}
