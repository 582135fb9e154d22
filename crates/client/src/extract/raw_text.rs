//! Best-effort extraction from unstructured text.
//!
//! This is the lowest-confidence strategy. It does no parsing: it scans the
//! text for sentence-like spans that mention one of a fixed set of
//! hospitality keywords and turns each into a synthetic result with no link.

use regex::Regex;
use serde_json::Value;
use serp_core::SearchResult;
use std::sync::LazyLock;

use super::ExtractStrategy;

/// A span starting at a letter, ending in sentence punctuation, that mentions a keyword.
///
/// The whole pattern is case-insensitive, so the leading `[A-Z]` also accepts
/// lowercase letters.
static SENTENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[A-Z][^.!?]*(?:review|hotel|wifi|guest|stay|room|service|clean)[^.!?]*[.!?]")
        .expect("sentence pattern is valid")
});

/// Matches this short or shorter are dropped.
const MIN_MATCH_CHARS: usize = 30;

/// Reads sentences out of a `raw` text field.
///
/// Applies only when the payload has a `raw` string and neither an `organic`
/// nor a `results` field.
#[derive(Debug, Clone, Default)]
pub struct RawTextStrategy;

impl ExtractStrategy for RawTextStrategy {
    fn name(&self) -> &'static str {
        "raw_text"
    }

    fn attempt(&self, payload: &Value, limit: usize) -> Option<Vec<SearchResult>> {
        if payload.get("organic").is_some() || payload.get("results").is_some() {
            return None;
        }
        let text = payload.get("raw")?.as_str()?;

        // Numbering follows match position, so dropped short matches leave gaps.
        let results = SENTENCE
            .find_iter(text)
            .take(limit)
            .enumerate()
            .filter(|(_, m)| m.as_str().chars().count() > MIN_MATCH_CHARS)
            .map(|(idx, m)| SearchResult::new(format!("Result {}", idx + 1), m.as_str(), ""))
            .collect();

        Some(results)
    }
}
