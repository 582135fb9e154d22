//! Normalized search result schema.
//!
//! Every provider response shape is reduced to these types before it
//! reaches the cache or a caller.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Maximum snippet length, in characters.
pub const SNIPPET_MAX_CHARS: usize = 300;

/// A single normalized search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SearchResult {
    /// Result title (may be empty).
    pub title: String,
    /// Result snippet, at most [`SNIPPET_MAX_CHARS`] characters.
    pub snippet: String,
    /// Result URL (empty for synthetic results).
    pub link: String,
}

impl SearchResult {
    /// Build a result, truncating the snippet to [`SNIPPET_MAX_CHARS`].
    pub fn new(title: impl Into<String>, snippet: &str, link: impl Into<String>) -> Self {
        Self { title: title.into(), snippet: truncate_chars(snippet, SNIPPET_MAX_CHARS), link: link.into() }
    }
}

/// Outcome of a search call.
///
/// `success == false` always comes with an empty result list and an error
/// message; a successful response never carries an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SearchResponse {
    pub success: bool,
    pub results: Vec<SearchResult>,
    pub error: Option<String>,
}

impl SearchResponse {
    /// Successful response. An empty list is still a success.
    pub fn ok(results: Vec<SearchResult>) -> Self {
        Self { success: true, results, error: None }
    }

    /// Failed response with no results.
    pub fn failure(error: impl Into<String>) -> Self {
        Self { success: false, results: Vec::new(), error: Some(error.into()) }
    }

    /// Get the number of results.
    pub fn result_count(&self) -> usize {
        self.results.len()
    }
}

/// Truncate a string to at most `max` characters, respecting char boundaries.
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
