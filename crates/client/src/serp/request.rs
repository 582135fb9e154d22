//! Search request types and outbound URL construction.

use serde::Serialize;
use serp_core::cache::cache_key;

/// Default number of results requested.
pub const DEFAULT_NUM_RESULTS: usize = 10;

/// Default country code.
pub const DEFAULT_COUNTRY: &str = "us";

/// Search engine URL the provider is asked to fetch.
const SEARCH_URL_BASE: &str = "https://www.google.com/search";

/// Interface language pinned on every outbound search.
const SEARCH_LOCALE: &str = "en";

/// A caller's search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Search query. Not validated here.
    pub query: String,

    /// Maximum number of results to extract. Zero yields an empty list.
    pub num_results: usize,

    /// Country code. Accepted but currently not used for the cache key or
    /// the outbound request.
    pub country: String,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into(), num_results: DEFAULT_NUM_RESULTS, country: DEFAULT_COUNTRY.to_string() }
    }

    pub fn with_num_results(mut self, num_results: usize) -> Self {
        self.num_results = num_results;
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Cache key for this request (case-folded query plus count).
    pub fn cache_key(&self) -> String {
        cache_key(&self.query, self.num_results)
    }

    /// Search URL embedding the percent-encoded query.
    pub fn search_url(&self) -> String {
        format!(
            "{SEARCH_URL_BASE}?q={}&num={}&hl={SEARCH_LOCALE}",
            urlencoding::encode(&self.query),
            self.num_results
        )
    }
}

/// JSON body sent to the provider.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProviderBody {
    pub zone: String,
    pub url: String,
    pub format: String,
}
