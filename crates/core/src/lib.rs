//! Core types and shared functionality for serp-web.
//!
//! This crate provides:
//! - In-memory TTL cache for search responses
//! - The normalized search result schema
//! - Unified error types
//! - Configuration structures

pub mod cache;
pub mod config;
pub mod error;
pub mod types;

pub use cache::{CacheEntry, Clock, ManualClock, SearchCache, SystemClock};
pub use config::{AppConfig, ConfigError};
pub use error::Error;
pub use types::{SNIPPET_MAX_CHARS, SearchResponse, SearchResult, truncate_chars};
