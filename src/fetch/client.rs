// src/fetch/client.rs
// =============================================================================
// The HTTP client shared by every fetch task, plus error classification.
//
// One Client for the whole run:
// - reqwest keeps a connection pool inside it
// - cloning it is cheap (it's an Arc internally)
//
// The timeout is applied per request in page.rs, so it bounds connect and
// body download together.
// =============================================================================

use std::time::Duration;

use reqwest::Client;

use crate::error::FetchError;

/// Per-request timeout when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

// Creates the HTTP client
//
// Redirects are followed (reqwest's default policy, up to 10 hops), so a
// page that moved still gets cached under the hostname from the list.
pub fn build_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(concat!("link-harvester/", env!("CARGO_PKG_VERSION")))
        .build()
}

// Categorizes different error types from reqwest
//
// reqwest errors can happen for many reasons:
// - The URL could not be turned into a request at all (empty, no scheme)
// - Network timeout
// - DNS resolution or connection failure
// - Anything else that went wrong on the wire
pub(crate) fn categorize_error(url: &str, error: reqwest::Error, timeout: Duration) -> FetchError {
    let url = url.to_string();

    if error.is_builder() {
        FetchError::Request {
            url,
            message: error.to_string(),
        }
    } else if error.is_timeout() {
        FetchError::Timeout {
            url,
            secs: timeout.as_secs(),
        }
    } else if error.is_connect() {
        FetchError::Connect {
            url,
            message: error.to_string(),
        }
    } else {
        FetchError::Transport {
            url,
            message: error.to_string(),
        }
    }
}
