//! Workload sizes and seeding.
//!
//! [`BenchConfig::default`] reproduces the standard suite. Smaller
//! configurations are built in code for tests and benches.

use crate::error::BenchError;
use crate::workload::FreeOrder;
use serde::{Deserialize, Serialize};

/// Records allocated by the linear phases.
pub const NUM_RECORDS: usize = 1_000_000;
/// Records per Hot Churn batch.
pub const CHURN_BATCH: usize = 100;
/// Hot Churn rounds.
pub const CHURN_ITER: usize = 10_000;
/// Slab warm-up count for Swiss-Cheese.
pub const SWISS_WARMUP: usize = 10_000;
/// Swiss-Cheese timed steps.
pub const SWISS_ITERATIONS: usize = 1_000_000;
/// Swiss-Cheese slot table length. Must be a power of two.
pub const SWISS_NUM_ACTIVE: usize = 16_384;
/// Index mask for the slot table.
pub const SWISS_MASK: usize = SWISS_NUM_ACTIVE - 1;

const _: () = assert!(SWISS_NUM_ACTIVE.is_power_of_two());

/// Slots pre-filled before the Swiss-Cheese loop, per allocator.
///
/// The defaults differ (half the table for the heap, a fixed count for the
/// slab). That asymmetry is kept so results stay comparable with earlier
/// runs; [`SwissWarmup::symmetric`] removes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwissWarmup {
    /// Warm-up count for the heap baseline.
    pub baseline: usize,
    /// Warm-up count for the slab candidate.
    pub candidate: usize,
}

impl SwissWarmup {
    /// Same warm-up count for both allocators.
    pub const fn symmetric(count: usize) -> Self {
        Self {
            baseline: count,
            candidate: count,
        }
    }
}

impl Default for SwissWarmup {
    fn default() -> Self {
        Self {
            baseline: SWISS_NUM_ACTIVE / 2,
            candidate: SWISS_WARMUP,
        }
    }
}

/// Full benchmark configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Records allocated, then freed, by the linear phases.
    pub linear_count: usize,
    /// Records per Hot Churn batch.
    pub churn_batch: usize,
    /// Hot Churn rounds.
    pub churn_iterations: usize,
    /// Swiss-Cheese slot table length (power of two).
    pub swiss_slots: usize,
    /// Swiss-Cheese timed steps.
    pub swiss_iterations: usize,
    /// Swiss-Cheese warm-up counts.
    pub swiss_warmup: SwissWarmup,
    /// Linear Deallocation order, shared by both allocators.
    pub free_order: FreeOrder,
    /// Generator seed. `None` seeds from the wall clock at suite start.
    pub seed: Option<u32>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            linear_count: NUM_RECORDS,
            churn_batch: CHURN_BATCH,
            churn_iterations: CHURN_ITER,
            swiss_slots: SWISS_NUM_ACTIVE,
            swiss_iterations: SWISS_ITERATIONS,
            swiss_warmup: SwissWarmup::default(),
            free_order: FreeOrder::default(),
            seed: None,
        }
    }
}

impl BenchConfig {
    /// Checks that every phase has work to time and that the slot table can
    /// be masked.
    ///
    /// # Errors
    /// Returns [`BenchError::Config`] describing the first violated rule.
    pub fn validate(&self) -> Result<(), BenchError> {
        let counts = [
            ("linear_count", self.linear_count),
            ("churn_batch", self.churn_batch),
            ("churn_iterations", self.churn_iterations),
            ("swiss_iterations", self.swiss_iterations),
        ];
        for (name, value) in counts {
            if value == 0 {
                return Err(BenchError::Config(format!("{name} must be non-zero")));
            }
        }
        if !self.swiss_slots.is_power_of_two() {
            return Err(BenchError::Config(format!(
                "swiss_slots must be a power of two, got {}",
                self.swiss_slots
            )));
        }
        let warmup = self.swiss_warmup;
        if warmup.baseline > self.swiss_slots || warmup.candidate > self.swiss_slots {
            return Err(BenchError::Config(format!(
                "swiss warm-up ({}, {}) exceeds {} slots",
                warmup.baseline, warmup.candidate, self.swiss_slots
            )));
        }
        Ok(())
    }
}
