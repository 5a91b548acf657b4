// src/extract/mod.rs
// =============================================================================
// This module turns a cached page into a report of links or images.
//
// Submodules:
// - mode: which tag/attribute pair we are looking for (links or images)
// - tokens: flattens HTML into a stream of start tags and text nodes
// - scan: walks the token stream and produces report lines
// - page: reads the cached page from disk and writes the report file
// =============================================================================

mod mode;
mod page;
mod scan;
mod tokens;

pub use mode::Mode;
pub use page::extract_page;
pub use scan::{scan_tokens, ReportLine};
pub use tokens::{tokenize, Token};
