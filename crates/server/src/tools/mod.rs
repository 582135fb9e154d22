//! MCP tool implementations.
//!
//! This module contains all tools exposed by the serp-web server.

pub mod cache;
pub mod web_search;

pub use web_search::{WebSearchOutput, WebSearchParams};

#[cfg(test)]
pub(crate) mod testing {
    //! Provider double shared by the tool tests.

    use async_trait::async_trait;
    use serde_json::json;
    use serp_client::{
        ProviderReply, ProviderRequest, SearchService, SerpClient, SerpConfig, SerpError, Transport,
    };
    use serp_core::SearchCache;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Answers every call with the same `organic` payload and counts calls.
    pub struct CountingTransport {
        body: String,
        calls: AtomicUsize,
    }

    impl CountingTransport {
        pub fn organic(n: usize) -> Arc<Self> {
            let items: Vec<_> = (1..=n)
                .map(|i| json!({"title": format!("Result {i}"), "description": "hotel wifi", "link": format!("https://{i}.example")}))
                .collect();
            Arc::new(Self { body: json!({ "organic": items }).to_string(), calls: AtomicUsize::new(0) })
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Transport for CountingTransport {
        async fn post(&self, _request: &ProviderRequest) -> Result<ProviderReply, SerpError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(ProviderReply { status: 200, body: self.body.clone() })
        }
    }

    pub fn service_with(token: Option<&str>, transport: Arc<CountingTransport>) -> (SearchService, Arc<CountingTransport>) {
        let config = SerpConfig { api_token: token.map(str::to_string), ..Default::default() };
        let client = SerpClient::with_transport(config, transport.clone()).unwrap();
        (SearchService::new(client, Arc::new(SearchCache::with_defaults())), transport)
    }
}
