//! Result extraction from provider payloads.
//!
//! Provider responses arrive in several shapes. Each shape is handled by an
//! [`ExtractStrategy`]; the [`Extractor`] tries them in priority order and
//! uses the first one whose precondition holds, even if it yields nothing.
//!
//! ### Default order
//! 1. `organic` list (standard SERP format)
//! 2. `results` list
//! 3. `raw` text, best-effort sentence matching
//!
//! A payload none of them recognizes produces an empty list.

pub mod list;
pub mod raw_text;

pub use list::ListStrategy;
pub use raw_text::RawTextStrategy;

use serde_json::Value;
use serp_core::SearchResult;

/// One way of reading results out of a payload.
pub trait ExtractStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Extract at most `limit` results.
    ///
    /// Returns `None` when the payload does not have the shape this strategy
    /// handles, so the next strategy can be tried.
    fn attempt(&self, payload: &Value, limit: usize) -> Option<Vec<SearchResult>>;
}

/// Ordered list of extraction strategies.
pub struct Extractor {
    strategies: Vec<Box<dyn ExtractStrategy>>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(vec![
            Box::new(ListStrategy::organic()),
            Box::new(ListStrategy::results()),
            Box::new(RawTextStrategy::default()),
        ])
    }
}

impl std::fmt::Debug for Extractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.strategies.iter().map(|s| s.name())).finish()
    }
}

impl Extractor {
    pub fn new(strategies: Vec<Box<dyn ExtractStrategy>>) -> Self {
        Self { strategies }
    }

    /// Extract up to `limit` results using the first applicable strategy.
    pub fn extract(&self, payload: &Value, limit: usize) -> Vec<SearchResult> {
        for strategy in &self.strategies {
            if let Some(results) = strategy.attempt(payload, limit) {
                tracing::debug!(strategy = strategy.name(), count = results.len(), "extracted search results");
                return results;
            }
        }

        tracing::debug!("no extraction strategy matched payload");
        Vec::new()
    }
}

/// First of `keys` holding a string value, or `""`.
pub(crate) fn first_str<'a>(item: &'a Value, keys: &[&str]) -> &'a str {
    keys.iter().find_map(|key| item.get(*key).and_then(Value::as_str)).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use serp_core::SNIPPET_MAX_CHARS;

    #[test]
    fn test_organic_wins_over_results() {
        let payload = json!({
            "organic": [{"title": "Organic", "description": "from organic", "link": "https://a"}],
            "results": [{"title": "Generic", "snippet": "from results", "link": "https://b"}]
        });

        let results = Extractor::default().extract(&payload, 10);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Organic");
    }

    #[test]
    fn test_empty_organic_does_not_fall_through() {
        let payload = json!({
            "organic": [],
            "results": [{"title": "Generic"}],
            "raw": "Great hotel wifi that every guest will enjoy."
        });

        assert!(Extractor::default().extract(&payload, 10).is_empty());
    }

    #[test]
    fn test_results_before_raw() {
        let payload = json!({
            "results": [{"title": "Generic", "snippet": "s"}],
            "raw": "The hotel room was clean and the wifi was fast."
        });

        let results = Extractor::default().extract(&payload, 10);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Generic");
    }

    #[test]
    fn test_unrecognized_payload_is_empty() {
        let payload = json!({"knowledge_graph": {"title": "x"}});
        assert!(Extractor::default().extract(&payload, 10).is_empty());
        assert!(Extractor::default().extract(&json!("text"), 10).is_empty());
    }

    #[test]
    fn test_snippet_bound_across_strategies() {
        let long = format!("The hotel wifi {}.", "a".repeat(600));
        let payloads = [
            json!({"organic": [{"description": long}]}),
            json!({"results": [{"snippet": long}]}),
            json!({"raw": long}),
        ];

        for payload in &payloads {
            let results = Extractor::default().extract(payload, 10);
            assert_eq!(results.len(), 1, "payload {payload}");
            assert!(results[0].snippet.chars().count() <= SNIPPET_MAX_CHARS);
        }
    }

    #[test]
    fn test_first_str() {
        let item = json!({"description": 5, "snippet": "s"});
        assert_eq!(first_str(&item, &["description", "snippet"]), "s");
        assert_eq!(first_str(&item, &["missing"]), "");
    }

    #[test]
    fn test_debug_lists_strategy_names() {
        let debug = format!("{:?}", Extractor::default());
        assert_eq!(debug, r#"["organic", "results", "raw_text"]"#);
    }
}
