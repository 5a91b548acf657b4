// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// a Rust struct and attributes (the #[...] things).
//
// Usage:
//   link-harvester                       # links from ./links.txt
//   link-harvester -o 2 -f sites.txt     # images from sites.txt
//   link-harvester https://example.com   # a fixed set given inline
// =============================================================================

use std::path::PathBuf;

use clap::Parser;

use crate::fetch::DEFAULT_TIMEOUT;

#[derive(Parser, Debug)]
#[command(
    name = "link-harvester",
    version,
    about = "Fetch a list of pages concurrently and extract their links or images",
    long_about = "link-harvester downloads every page in a source list into a cache directory, \
                  then extracts either <a href> targets (with their text) or <img src> sources \
                  into one report file per page."
)]
pub struct Cli {
    /// What to extract: 1 = links (<a href>), 2 = images (<img src>)
    ///
    /// Kept as a plain number so that an unknown value gets our own error
    /// message instead of clap's.
    #[arg(short = 'o', long = "option", default_value_t = 1, allow_negative_numbers = true)]
    pub option: i64,

    /// File with one URL per line ("-" reads standard input)
    #[arg(short = 'f', long = "file", default_value = "./links.txt")]
    pub file: PathBuf,

    /// URLs to process instead of reading the file
    pub urls: Vec<String>,

    /// Where fetched pages and reports are written
    #[arg(long, default_value = "./parsed")]
    pub cache_dir: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Print the run summary as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging (RUST_LOG overrides this)
    #[arg(short, long)]
    pub verbose: bool,
}
