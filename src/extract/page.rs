// src/extract/page.rs
// =============================================================================
// Disk side of extraction: read <key>.html, write <key>.txt.
//
// The whole page and the whole result list are held in memory for the
// duration of one extraction. The report is truncated and rewritten on
// every run, so re-running never accumulates lines.
// =============================================================================

use std::path::Path;

use tracing::debug;

use crate::error::ExtractError;
use crate::extract::{scan_tokens, tokenize, Mode, ReportLine};
use crate::sources::Source;

/// Extracts one cached page into its report file.
///
/// Returns the number of `Link:` lines written.
pub async fn extract_page(
    cache_dir: &Path,
    source: &Source,
    mode: Mode,
) -> Result<usize, ExtractError> {
    let page_path = source.page_path(cache_dir);
    let bytes = tokio::fs::read(&page_path)
        .await
        .map_err(|e| ExtractError::CacheRead {
            path: page_path.clone(),
            source: e,
        })?;

    // Pages are cached byte-for-byte, so they may not be valid UTF-8
    let markup = String::from_utf8_lossy(&bytes);
    let lines = scan_tokens(tokenize(&markup), mode, &source.host);
    let links = lines
        .iter()
        .filter(|l| matches!(l, ReportLine::Link(_)))
        .count();

    let report_path = source.report_path(cache_dir);
    tokio::fs::write(&report_path, render_report(&lines))
        .await
        .map_err(|e| ExtractError::ReportWrite {
            path: report_path.clone(),
            source: e,
        })?;

    debug!(key = %source.cache_key, links, "report written");
    Ok(links)
}

// One line per report entry, every line newline-terminated
fn render_report(lines: &[ReportLine]) -> String {
    lines.iter().map(|line| format!("{}\n", line)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(url: &str) -> Source {
        Source::from_urls(vec![url.to_string()]).remove(0)
    }

    #[tokio::test]
    async fn test_writes_report_next_to_page() {
        let dir = tempfile::tempdir().unwrap();
        let src = source("http://example.com");
        std::fs::write(src.page_path(dir.path()), r#"<a href="/about">About</a>"#).unwrap();

        let links = extract_page(dir.path(), &src, Mode::Links).await.unwrap();

        assert_eq!(links, 1);
        let report = std::fs::read_to_string(dir.path().join("example.com.txt")).unwrap();
        assert_eq!(report, "Link: example.com/about\nName: About\n\n");
    }

    #[tokio::test]
    async fn test_missing_page_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let src = source("http://nowhere.example");

        let err = extract_page(dir.path(), &src, Mode::Links).await.unwrap_err();

        assert!(matches!(err, ExtractError::CacheRead { .. }));
        assert!(!src.report_path(dir.path()).exists());
    }

    #[tokio::test]
    async fn test_rerun_overwrites_report() {
        let dir = tempfile::tempdir().unwrap();
        let src = source("http://example.com");
        std::fs::write(src.page_path(dir.path()), r#"<img src="http://cdn.example.com/x.png">"#).unwrap();

        extract_page(dir.path(), &src, Mode::Images).await.unwrap();
        let first = std::fs::read_to_string(src.report_path(dir.path())).unwrap();
        extract_page(dir.path(), &src, Mode::Images).await.unwrap();
        let second = std::fs::read_to_string(src.report_path(dir.path())).unwrap();

        assert_eq!(first, "Link: http://cdn.example.com/x.png\n");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_page_without_matches_gives_empty_report() {
        let dir = tempfile::tempdir().unwrap();
        let src = source("http://example.com");
        std::fs::write(src.page_path(dir.path()), "<p>nothing here</p>").unwrap();

        let links = extract_page(dir.path(), &src, Mode::Links).await.unwrap();

        assert_eq!(links, 0);
        assert_eq!(std::fs::read_to_string(src.report_path(dir.path())).unwrap(), "");
    }
}
