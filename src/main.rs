// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Validate the mode before touching the network or the disk
// 3. Load the source list and create the cache directory
// 4. Run the fetch -> extract pipeline
// 5. Print the summary and exit with a proper code
//    (0 = every source done, 1 = some sources failed, 2 = could not run)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;        // src/cli.rs - command-line parsing
mod error;      // src/error.rs - typed errors
mod extract;    // src/extract/ - tokenizing and report writing
mod fetch;      // src/fetch/ - downloading pages into the cache
mod pipeline;   // src/pipeline/ - task coordination
mod sources;    // src/sources/ - source list and cache keys

#[cfg(test)]
mod testutil;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use error::ConfigError;
use extract::Mode;
use pipeline::{RunConfig, RunSummary};
use sources::Source;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            // Configuration problems and anything else that stops the run
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Diagnostics go to stderr so stdout stays clean for --json
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "link_harvester=debug"
    } else {
        "link_harvester=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

// Everything run() needs once configuration has been checked
struct Prepared {
    sources: Vec<Source>,
    config: RunConfig,
    origin: String,
}

// Validates the arguments, loads the sources and creates the cache directory
//
// The mode is checked first: a bad mode must not cause any network or file
// activity. Nothing in here talks to the network.
async fn prepare(cli: &Cli) -> Result<Prepared, ConfigError> {
    let mode = Mode::from_option(cli.option)?;

    let (urls, origin) = if cli.urls.is_empty() {
        let urls = sources::read_source_list(&cli.file)?;
        (urls, sources::describe_source_list(&cli.file))
    } else {
        let urls = cli.urls.iter().map(|u| sources::clean_source(u)).collect();
        (urls, "the command line".to_string())
    };

    tokio::fs::create_dir_all(&cli.cache_dir)
        .await
        .map_err(|e| ConfigError::CacheDir {
            path: cli.cache_dir.clone(),
            source: e,
        })?;

    Ok(Prepared {
        sources: Source::from_urls(urls),
        config: RunConfig {
            mode,
            cache_dir: cli.cache_dir.clone(),
            timeout: Duration::from_secs(cli.timeout),
        },
        origin,
    })
}

async fn run(cli: Cli) -> Result<i32> {
    let Prepared {
        sources,
        config,
        origin,
    } = prepare(&cli).await?;

    let client = fetch::build_client().context("failed to create HTTP client")?;

    if !cli.json {
        println!("🔍 Harvesting {:?} from {} source(s)", config.mode, sources.len());
    }

    let summary = pipeline::run_pipeline(sources, config, client).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary, &origin);
    }

    Ok(summary.exit_code())
}

// Prints the human-readable summary
fn print_summary(summary: &RunSummary, origin: &str) {
    let failed: Vec<_> = summary.failed().collect();

    if failed.is_empty() {
        println!("✅ Successfully parsed data from {}", origin);
    } else {
        println!("⚠️  Parsed data from {} with {} failure(s)", origin, failed.len());
    }
    println!("⏱️  Parsed in {} seconds", summary.elapsed.as_secs_f64());

    println!("📊 Summary:");
    println!("   ✅ Done: {}", summary.done_count());
    println!("   ❌ Failed: {}", failed.len());
    println!("   📋 Total: {}", summary.outcomes.len());

    for outcome in failed {
        if let pipeline::SourceStatus::Failed { stage, error } = &outcome.status {
            println!("   {:?} failed for '{}': {}", stage, outcome.url, error);
        }
    }
    for outcome in &summary.outcomes {
        for warning in &outcome.warnings {
            println!("   ⚠️  {}: {}", outcome.cache_key, warning);
        }
    }
}
