//! Strategies for payloads carrying a list of result objects.

use serde_json::Value;
use serp_core::SearchResult;

use super::{ExtractStrategy, first_str};

/// Reads results from a list field such as `organic` or `results`.
#[derive(Debug, Clone)]
pub struct ListStrategy {
    name: &'static str,
    field: &'static str,
    snippet_keys: [&'static str; 2],
}

impl ListStrategy {
    /// Standard SERP `organic` list; snippet prefers `description`.
    pub fn organic() -> Self {
        Self { name: "organic", field: "organic", snippet_keys: ["description", "snippet"] }
    }

    /// Generic `results` list; snippet prefers `snippet`.
    pub fn results() -> Self {
        Self { name: "results", field: "results", snippet_keys: ["snippet", "description"] }
    }
}

impl ExtractStrategy for ListStrategy {
    fn name(&self) -> &'static str {
        self.name
    }

    fn attempt(&self, payload: &Value, limit: usize) -> Option<Vec<SearchResult>> {
        let items = payload.get(self.field)?.as_array()?;

        let results = items
            .iter()
            .take(limit)
            .filter(|item| item.is_object())
            .map(|item| {
                SearchResult::new(
                    first_str(item, &["title"]),
                    first_str(item, &self.snippet_keys),
                    first_str(item, &["link", "url"]),
                )
            })
            .collect();

        Some(results)
    }
}
