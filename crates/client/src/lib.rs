//! Client code for serp-web.
//!
//! This crate provides the SERP provider client, payload extraction, the
//! cached search service and result formatting shared by the server.

pub mod extract;
pub mod format;
pub mod search;
pub mod serp;

pub use extract::{ExtractStrategy, Extractor, ListStrategy, RawTextStrategy};
pub use format::{format_results, rank_results};
pub use search::SearchService;
pub use serp::{
    ProviderBody, ProviderReply, ProviderRequest, ReqwestTransport, SearchRequest, SerpClient, SerpConfig, SerpError,
    Transport,
};
