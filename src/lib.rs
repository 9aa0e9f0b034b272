//! # `slabbench` - Heap vs. Slab Allocation Latency
//!
//! Measures the per-operation cost of allocating and releasing fixed-size
//! 64-byte records under four access patterns, once through the process
//! heap and once through a fixed-block slab allocator carved from a
//! pre-sized arena, and reports the ratio.
//!
//! ## Workloads
//!
//! | Workload | Pattern | Ops counted |
//! |---|---|---|
//! | Linear Allocation | `N` allocations in index order | `N` |
//! | Linear Deallocation | the same `N` records freed in one fixed order | `N` |
//! | Hot Churn | `ITER` x (`BATCH` allocs, then `BATCH` frees in reverse) | `ITER * BATCH * 2` |
//! | Swiss Cheese Churn | random slot toggles over a power-of-two table | `ITERATIONS` |
//!
//! ## Methodology
//!
//! - **Deterministic workload**: random slots come from a 32-bit xorshift
//!   generator owned by the phase that uses it, so a fixed seed reproduces
//!   the exact toggle sequence.
//! - **Monotonic timing**: each span is measured with `std::time::Instant`;
//!   bookkeeping buffers are sized before the span starts, so only
//!   allocator calls are timed.
//! - **Scoped arenas**: a slab's [`Arena`](alloc::Arena) is reserved for one
//!   phase and released on `Drop`, including on early return.
//! - **Strictly sequential**: no phase overlaps another.
//!
//! ## Example
//!
//! ```rust
//! use slabbench::{BenchConfig, Suite};
//!
//! let config = BenchConfig {
//!     linear_count: 1_000,
//!     churn_batch: 10,
//!     churn_iterations: 10,
//!     swiss_slots: 64,
//!     swiss_iterations: 1_000,
//!     swiss_warmup: slabbench::config::SwissWarmup::symmetric(32),
//!     seed: Some(1),
//!     ..BenchConfig::default()
//! };
//!
//! let report = Suite::new(config).unwrap().run().unwrap();
//! assert_eq!(report.results.len(), 4);
//! println!("{report}");
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]

pub mod alloc;
pub mod config;
pub mod error;
pub mod metrics;
pub mod record;
pub mod report;
pub mod suite;
pub mod workload;

pub use alloc::{AllocError, Arena, HeapAllocator, RecordAllocator, SlabAllocator};
pub use config::BenchConfig;
pub use error::BenchError;
pub use metrics::{BenchmarkResult, Measurement};
pub use record::Record;
pub use report::Report;
pub use suite::Suite;
