// src/pipeline/mod.rs
// =============================================================================
// This module runs the two-stage fetch -> extract pipeline.
//
// Submodules:
// - coordinator: spawns the tasks and joins them
// - outcome: what happened to each source, and the run summary
// =============================================================================

mod coordinator;
mod outcome;

pub use coordinator::{run_pipeline, RunConfig};
pub use outcome::{RunSummary, SourceStatus};
