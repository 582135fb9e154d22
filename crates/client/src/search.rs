//! Cached search service.
//!
//! Ties the provider client, the extractor and the search cache together.
//! Every outcome, including provider failures, comes back as a
//! `SearchResponse`.

use serp_core::{SearchCache, SearchResponse, truncate_chars};
use std::sync::Arc;

use crate::extract::Extractor;
use crate::serp::{SearchRequest, SerpClient};

/// Search entry point shared by all callers in the process.
#[derive(Debug)]
pub struct SearchService {
    client: SerpClient,
    cache: Arc<SearchCache>,
    extractor: Extractor,
}

impl SearchService {
    /// Create a service with the default extraction strategies.
    pub fn new(client: SerpClient, cache: Arc<SearchCache>) -> Self {
        Self { client, cache, extractor: Extractor::default() }
    }

    /// Replace the extraction strategies.
    pub fn with_extractor(mut self, extractor: Extractor) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn cache(&self) -> &Arc<SearchCache> {
        &self.cache
    }

    /// Run a search, serving from the cache when possible.
    ///
    /// Only non-empty result lists are cached; failures and empty successes
    /// are recomputed on the next call.
    pub async fn search(&self, req: &SearchRequest) -> SearchResponse {
        if let Err(e) = self.client.credential() {
            return SearchResponse::failure(e.to_string());
        }

        let key = req.cache_key();
        let query = truncate_chars(&req.query, 50);

        if let Some(cached) = self.cache.get(&key) {
            tracing::debug!(%query, "cache hit for search query");
            return cached;
        }

        let payload = match self.client.fetch(req).await {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(%query, code = e.code(), "search failed: {}", e);
                return SearchResponse::failure(e.to_string());
            }
        };

        let response = SearchResponse::ok(self.extractor.extract(&payload, req.num_results));
        tracing::debug!(%query, count = response.result_count(), "search completed");

        if !response.results.is_empty() {
            self.cache.set(key, response.clone());
        }

        response
    }
}
