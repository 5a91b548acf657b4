// src/sources/mod.rs
// =============================================================================
// This module turns the user's input into the list of sources to process.
//
// Submodules:
// - list: reads the newline-delimited source list file (or stdin)
// - key: derives each source's hostname and its unique cache key
// =============================================================================

mod key;
mod list;

pub use key::Source;
pub use list::{clean_source, describe_source_list, read_source_list};
