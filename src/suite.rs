//! The full heap-versus-slab comparison.
//!
//! Phases run strictly one after another: each workload on the heap, then on
//! a slab over a freshly reserved arena sized for that workload. The arena
//! lives in a block scope per phase and is released before the next phase
//! starts.

use crate::alloc::{Arena, HeapAllocator, SlabAllocator};
use crate::config::BenchConfig;
use crate::error::BenchError;
use crate::metrics::{BenchmarkResult, Measurement};
use crate::report::Report;
use crate::workload::{churn, linear, swiss, LinearTimings, SlotTable, XorShift32};

/// Row label for Linear Allocation.
pub const LINEAR_ALLOC_LABEL: &str = "Allocation (Linear)";
/// Row label for Linear Deallocation.
pub const LINEAR_FREE_LABEL: &str = "Deallocation (Linear)";
/// Row label for Swiss-Cheese Churn.
pub const SWISS_LABEL: &str = "Swiss Cheese Churn";

/// Row label for Hot Churn with the given batch size.
pub fn churn_label(batch: usize) -> String {
    format!("Hot Churn ({batch} batch)")
}

/// A validated configuration with its seed resolved.
#[derive(Debug, Clone)]
pub struct Suite {
    config: BenchConfig,
    seed: u32,
}

impl Suite {
    /// Validates `config` and fixes the generator seed.
    ///
    /// # Errors
    /// Returns [`BenchError::Config`] if the configuration is invalid.
    pub fn new(config: BenchConfig) -> Result<Self, BenchError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(crate::workload::xorshift::clock_seed);
        tracing::debug!(seed, "suite seed");
        Ok(Self { config, seed })
    }

    /// The configuration in use.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Seed handed to every Swiss-Cheese run.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Runs every workload on both allocators and collects the rows.
    ///
    /// # Errors
    /// Propagates the first [`BenchError`]; no later phase runs.
    pub fn run(&self) -> Result<Report, BenchError> {
        let mut report = Report::new();

        let (allocate, free) = self.run_linear()?;
        report.push(allocate);
        report.push(free);
        report.push(self.run_churn()?);
        report.push(self.run_swiss()?);

        Ok(report)
    }

    /// Linear Allocation and Linear Deallocation rows.
    ///
    /// # Errors
    /// Propagates allocator failures.
    pub fn run_linear(&self) -> Result<(BenchmarkResult, BenchmarkResult), BenchError> {
        let count = self.config.linear_count;
        let order = self.config.free_order;

        let baseline = linear::run(&mut HeapAllocator::new(), count, order)?;
        log_linear("heap", &baseline);

        let candidate = {
            let mut arena = Arena::new(count)?;
            let mut slab = SlabAllocator::init(&mut arena);
            linear::run(&mut slab, count, order)?
        };
        log_linear("slab", &candidate);

        Ok((
            BenchmarkResult::compare(LINEAR_ALLOC_LABEL, baseline.allocate, candidate.allocate),
            BenchmarkResult::compare(LINEAR_FREE_LABEL, baseline.free, candidate.free),
        ))
    }

    /// Hot Churn row.
    ///
    /// # Errors
    /// Propagates allocator failures.
    pub fn run_churn(&self) -> Result<BenchmarkResult, BenchError> {
        let batch = self.config.churn_batch;
        let iterations = self.config.churn_iterations;

        let baseline = churn::run(&mut HeapAllocator::new(), iterations, batch)?;
        log_phase("hot_churn", "heap", &baseline);

        let candidate = {
            let mut arena = Arena::new(batch)?;
            let mut slab = SlabAllocator::init(&mut arena);
            churn::run(&mut slab, iterations, batch)?
        };
        log_phase("hot_churn", "slab", &candidate);

        Ok(BenchmarkResult::compare(churn_label(batch), baseline, candidate))
    }

    /// Swiss-Cheese Churn row.
    ///
    /// Both runs draw the same slot sequence from a fresh generator seeded
    /// with [`Suite::seed`]. Warm-up counts come from
    /// [`BenchConfig::swiss_warmup`].
    ///
    /// # Errors
    /// Propagates allocator failures.
    pub fn run_swiss(&self) -> Result<BenchmarkResult, BenchError> {
        let slots = self.config.swiss_slots;
        let iterations = self.config.swiss_iterations;
        let warmup = self.config.swiss_warmup;
        let mut table = SlotTable::new(slots);

        let baseline = swiss::run(
            &mut HeapAllocator::new(),
            &mut table,
            XorShift32::new(self.seed),
            warmup.baseline,
            iterations,
        )?;
        log_phase("swiss_cheese", "heap", &baseline);

        let candidate = {
            let mut arena = Arena::new(slots)?;
            let mut slab = SlabAllocator::init(&mut arena);
            swiss::run(
                &mut slab,
                &mut table,
                XorShift32::new(self.seed),
                warmup.candidate,
                iterations,
            )?
        };
        log_phase("swiss_cheese", "slab", &candidate);

        Ok(BenchmarkResult::compare(SWISS_LABEL, baseline, candidate))
    }
}

fn log_linear(allocator: &str, timings: &LinearTimings) {
    log_phase("linear_alloc", allocator, &timings.allocate);
    log_phase("linear_free", allocator, &timings.free);
}

fn log_phase(workload: &str, allocator: &str, m: &Measurement) {
    tracing::info!(
        workload,
        allocator,
        operations = m.operations,
        elapsed_ns = m.elapsed_ns,
        ns_per_op = m.ns_per_op(),
        "phase complete"
    );
}
