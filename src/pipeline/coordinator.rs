// src/pipeline/coordinator.rs
// =============================================================================
// The streaming pipeline.
//
// How it works:
// 1. Spawn one fetch task per source. Each holds a clone of the completion
//    sender and sends exactly one FetchEvent, success or failure.
// 2. Drop our own sender. The channel now closes exactly when the last
//    fetch task has finished, with no counter to get wrong.
// 3. Drain the channel. Every cached page immediately gets an extraction
//    task in a JoinSet, so extraction overlaps with the remaining fetches.
// 4. Once the channel is closed, join the remaining extractions.
//
// Per source:  Pending -> Fetching -> Cached -> Extracting -> Done
//                              \-> Failed           \-> Failed
//
// No source can fail the batch. Failures are collected as outcomes and the
// caller decides the exit status from the summary.
// =============================================================================

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::Client;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use super::outcome::{RunSummary, SourceOutcome, Stage};
use crate::error::{ExtractError, FetchError};
use crate::extract::{extract_page, Mode};
use crate::fetch::{fetch_page, FetchReport};
use crate::sources::Source;

/// Settings shared by every task in a run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub mode: Mode,
    /// Directory holding <key>.html and <key>.txt; must exist
    pub cache_dir: PathBuf,
    /// Per-request fetch timeout
    pub timeout: Duration,
}

// The completion signal: one per fetch task
struct FetchEvent {
    index: usize,
    result: Result<FetchReport, FetchError>,
}

// What an extraction task hands back when joined
struct ExtractDone {
    index: usize,
    report: FetchReport,
    result: Result<usize, ExtractError>,
}

// Runs the whole pipeline over `sources`
//
// Parameters:
//   sources: the sources, with unique cache keys (see Source::from_urls)
//   config: mode, cache directory and timeout
//   client: shared HTTP client
//
// Returns: one outcome per source, in the same order as `sources`
pub async fn run_pipeline(sources: Vec<Source>, config: RunConfig, client: Client) -> RunSummary {
    let started = Instant::now();
    let sources = Arc::new(sources);
    let config = Arc::new(config);

    let (tx, mut rx) = mpsc::unbounded_channel::<FetchEvent>();

    for index in 0..sources.len() {
        let tx = tx.clone();
        let client = client.clone();
        let sources = Arc::clone(&sources);
        let config = Arc::clone(&config);

        tokio::spawn(async move {
            let source = &sources[index];
            debug!(url = %source.url, "fetching");
            let result = fetch_page(&client, source, &config.cache_dir, config.timeout).await;
            // The receiver lives until every sender is gone, so this cannot fail
            let _ = tx.send(FetchEvent { index, result });
        });
    }

    // Only the fetch tasks hold senders now
    drop(tx);

    let mut outcomes: Vec<Option<SourceOutcome>> = vec![None; sources.len()];
    let mut fetched = vec![false; sources.len()];
    let mut extractions = JoinSet::new();

    while let Some(FetchEvent { index, result }) = rx.recv().await {
        let source = &sources[index];

        match result {
            Ok(report) => {
                info!(key = %source.cache_key, status = report.status, bytes = report.bytes, "cached");
                fetched[index] = true;

                let sources = Arc::clone(&sources);
                let config = Arc::clone(&config);
                extractions.spawn(async move {
                    let result = extract_page(&config.cache_dir, &sources[index], config.mode).await;
                    ExtractDone { index, report, result }
                });
            }
            Err(e) => {
                warn!(url = %source.url, error = %e, "fetch failed");
                outcomes[index] = Some(SourceOutcome::failed(source, Stage::Fetch, e));
            }
        }
    }

    while let Some(joined) = extractions.join_next().await {
        let ExtractDone { index, report, result } = match joined {
            Ok(done) => done,
            Err(e) => {
                // Which source it was is recovered below from the gap it leaves
                warn!(error = %e, "extraction task did not complete");
                continue;
            }
        };
        let source = &sources[index];

        let mut outcome = match result {
            Ok(links) => {
                debug!(key = %source.cache_key, links, "extracted");
                SourceOutcome::done(source, links, report.status)
            }
            Err(e) => {
                warn!(key = %source.cache_key, error = %e, "extraction failed");
                let mut failed = SourceOutcome::failed(source, Stage::Extract, e);
                failed.http_status = Some(report.status);
                failed
            }
        };
        if let Some(interrupted) = report.interrupted {
            outcome.warnings.push(format!("body stream interrupted: {}", interrupted));
        }
        outcomes[index] = Some(outcome);
    }

    let outcomes = outcomes
        .into_iter()
        .enumerate()
        .map(|(index, outcome)| {
            outcome.unwrap_or_else(|| {
                let stage = if fetched[index] { Stage::Extract } else { Stage::Fetch };
                SourceOutcome::failed(&sources[index], stage, "task ended without reporting a result")
            })
        })
        .collect();

    RunSummary {
        mode: config.mode,
        outcomes,
        elapsed: started.elapsed(),
    }
}
