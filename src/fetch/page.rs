// src/fetch/page.rs
// =============================================================================
// Downloads one source into the cache.
//
// Order of operations:
// 1. Send the GET (bounded by the timeout)
// 2. Only once a response arrived, create <cache-dir>/<key>.html
// 3. Stream the body into it chunk by chunk, byte-for-byte
//
// The HTTP status does not matter: a 404 page is still markup and still
// gets cached. If the body stream breaks halfway, the partial file stays
// and the interruption is reported back instead of failing the source.
// =============================================================================

use std::path::Path;
use std::time::Duration;

use futures::StreamExt;
use reqwest::Client;
use serde::Serialize;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use super::client::categorize_error;
use crate::error::FetchError;
use crate::sources::Source;

/// What a successful fetch left behind in the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchReport {
    /// HTTP status code of the response
    pub status: u16,
    /// Bytes written to the cache file
    pub bytes: u64,
    /// Set when the body stream failed after the file was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interrupted: Option<String>,
}

// Fetches one source and caches its body
//
// Parameters:
//   client: the shared HTTP client
//   source: which URL to fetch and which cache key to write under
//   cache_dir: where the cache lives (must already exist)
//   timeout: per-request timeout
//
// Returns: FetchReport on success, FetchError when nothing could be cached
pub async fn fetch_page(
    client: &Client,
    source: &Source,
    cache_dir: &Path,
    timeout: Duration,
) -> Result<FetchReport, FetchError> {
    let response = client
        .get(&source.url)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| categorize_error(&source.url, e, timeout))?;

    let status = response.status().as_u16();
    debug!(url = %source.url, status, "response received");

    let path = source.page_path(cache_dir);
    let cache_error = |e: std::io::Error| FetchError::CacheWrite {
        path: path.clone(),
        source: e,
    };

    let mut file = tokio::fs::File::create(&path).await.map_err(cache_error)?;
    let mut body = response.bytes_stream();
    let mut bytes = 0u64;
    let mut interrupted = None;

    while let Some(chunk) = body.next().await {
        match chunk {
            Ok(chunk) => {
                file.write_all(&chunk).await.map_err(cache_error)?;
                bytes += chunk.len() as u64;
            }
            Err(e) => {
                warn!(url = %source.url, error = %e, "body stream interrupted, keeping partial page");
                interrupted = Some(e.to_string());
                break;
            }
        }
    }

    // tokio files hand writes to a background thread; flush waits for them
    file.flush().await.map_err(cache_error)?;

    Ok(FetchReport {
        status,
        bytes,
        interrupted,
    })
}
