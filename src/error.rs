// src/error.rs
// =============================================================================
// Typed errors for every stage of the pipeline.
//
// - ConfigError: the run cannot start at all (bad mode, unreadable list)
// - FetchError: one source could not be downloaded into the cache
// - ExtractError: one cached page could not be turned into a report
//
// main.rs wraps these in anyhow for printing. Inside the pipeline we keep
// them typed so each source's outcome says exactly which stage broke.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no such option {0} (expected 1 = links, 2 = images)")]
    UnknownMode(i64),

    #[error("could not read source list {path}: {source}")]
    SourceList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not create cache directory {path}: {source}")]
    CacheDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid request for '{url}': {message}")]
    Request { url: String, message: String },

    #[error("request to '{url}' timed out after {secs}s")]
    Timeout { url: String, secs: u64 },

    #[error("connection to '{url}' failed: {message}")]
    Connect { url: String, message: String },

    #[error("transport error for '{url}': {message}")]
    Transport { url: String, message: String },

    #[error("could not write cache file {path}: {source}")]
    CacheWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("could not read cached page {path}: {source}")]
    CacheRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write report {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
