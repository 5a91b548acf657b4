// src/fetch/mod.rs
// =============================================================================
// This module downloads pages into the on-disk cache.
//
// Submodules:
// - client: builds the shared HTTP client and classifies request errors
// - page: streams one response body into <cache-dir>/<key>.html
// =============================================================================

mod client;
mod page;

pub use client::{build_client, DEFAULT_TIMEOUT};
pub use page::{fetch_page, FetchReport};
