//! Top-level error type for running the suite.

use crate::alloc::AllocError;

/// Errors surfaced by the benchmark suite.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// An allocator failed during a phase.
    #[error(transparent)]
    Alloc(#[from] AllocError),
    /// The configuration cannot be run.
    #[error("invalid benchmark configuration: {0}")]
    Config(String),
}
