//! Runs the standard heap-versus-slab suite and prints the comparison table.
//!
//! Takes no arguments and reads no environment. Progress is logged to
//! stderr; stdout carries only the report.

use anyhow::{Context, Result};
use slabbench::{BenchConfig, Suite};
use tracing::Level;

#[cfg(feature = "alloc-mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[cfg(feature = "alloc-snmalloc")]
#[global_allocator]
static GLOBAL: snmalloc_rs::SnMalloc = snmalloc_rs::SnMalloc;

#[cfg(feature = "alloc-jemalloc")]
#[global_allocator]
static GLOBAL: jemallocator::Jemalloc = jemallocator::Jemalloc;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let suite = Suite::new(BenchConfig::default()).context("invalid built-in configuration")?;
    tracing::info!(seed = suite.seed(), "starting benchmark suite");

    let report = suite.run().context("benchmark phase failed")?;
    print!("{report}");

    Ok(())
}
