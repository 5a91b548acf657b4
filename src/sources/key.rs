// src/sources/key.rs
// =============================================================================
// Hostnames and cache keys.
//
// Both the cached page (<key>.html) and the report (<key>.txt) are named by
// the source's cache key. The key is the hostname, except when several
// sources share a hostname: then the 2nd, 3rd, ... get "-2", "-3", ...
// appended in list order. No two tasks ever write the same file.
//
// The bare hostname (not the key) is what relative links get prefixed with.
// =============================================================================

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use url::{Host, Url};

/// One URL to fetch and extract from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// The URL exactly as it appeared in the list (quotes already stripped)
    pub url: String,
    /// Hostname of the URL, "" when the URL does not parse
    pub host: String,
    /// Unique file stem for this run
    pub cache_key: String,
}

impl Source {
    /// Builds sources for a whole list, assigning unique cache keys.
    pub fn from_urls(urls: Vec<String>) -> Vec<Source> {
        let mut seen: HashMap<String, usize> = HashMap::new();

        urls.into_iter()
            .map(|url| {
                let host = hostname_of(&url);
                let count = seen.entry(host.clone()).or_insert(0);
                *count += 1;

                let cache_key = if *count == 1 {
                    host.clone()
                } else {
                    format!("{}-{}", host, count)
                };

                Source { url, host, cache_key }
            })
            .collect()
    }

    /// Where the fetched markup for this source lives: `<dir>/<key>.html`
    pub fn page_path(&self, cache_dir: &Path) -> PathBuf {
        cache_dir.join(format!("{}.html", self.cache_key))
    }

    /// Where the extracted report for this source lives: `<dir>/<key>.txt`
    pub fn report_path(&self, cache_dir: &Path) -> PathBuf {
        cache_dir.join(format!("{}.txt", self.cache_key))
    }
}

// Extracts the hostname from a URL
//
// A URL that fails to parse, or has no host, yields "" instead of an error.
// IPv6 hosts come back without their brackets.
//
// Examples:
//   "http://example.com/a?b" -> "example.com"
//   "http://[::1]:8080/"     -> "::1"
//   "not a url"              -> ""
pub fn hostname_of(url: &str) -> String {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(_) => return String::new(),
    };

    match parsed.host() {
        Some(Host::Domain(domain)) => domain.to_string(),
        Some(Host::Ipv4(addr)) => addr.to_string(),
        Some(Host::Ipv6(addr)) => addr.to_string(),
        None => String::new(),
    }
}
