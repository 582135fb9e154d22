//! Cache-related MCP tools.
//!
//! This module provides tools for inspecting and maintaining the search cache.

pub mod purge;
pub mod stats;

pub use purge::purge_impl;
pub use stats::stats_impl;
