//! Timing and derived per-operation metrics.
//!
//! Drivers produce a [`Measurement`] (elapsed nanoseconds plus operation
//! count) from a [`Stopwatch`]. [`BenchmarkResult::compare`] turns a
//! baseline/candidate pair into per-op costs and a speedup ratio. Everything
//! here is a pure function of its inputs.

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Monotonic timer for one timed span.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    /// Starts timing.
    #[inline]
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    /// Stops timing and pairs the elapsed time with `operations`.
    #[inline]
    pub fn stop(self, operations: u64) -> Measurement {
        let elapsed_ns = u64::try_from(self.start.elapsed().as_nanos()).unwrap_or(u64::MAX);
        Measurement {
            elapsed_ns,
            operations,
        }
    }
}

/// Raw output of one workload run against one allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    /// Wall time of the timed span in nanoseconds.
    pub elapsed_ns: u64,
    /// Allocator calls made inside the span.
    pub operations: u64,
}

impl Measurement {
    /// Creates a measurement from already-known values.
    pub const fn new(elapsed_ns: u64, operations: u64) -> Self {
        Self {
            elapsed_ns,
            operations,
        }
    }

    /// Mean cost of one operation in nanoseconds.
    ///
    /// `operations` must be non-zero.
    #[inline]
    pub fn ns_per_op(&self) -> f64 {
        debug_assert!(self.operations > 0, "measurement has no operations");
        self.elapsed_ns as f64 / self.operations as f64
    }
}

/// One row of the comparison: the same workload on both allocators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Workload label.
    pub operation: String,
    /// Baseline (heap) cost per operation.
    pub ns_per_op_baseline: f64,
    /// Candidate (slab) cost per operation.
    pub ns_per_op_candidate: f64,
    /// `ns_per_op_baseline / ns_per_op_candidate`.
    pub speedup: f64,
}

impl BenchmarkResult {
    /// Derives per-op costs and speedup from two measurements.
    pub fn compare(operation: impl Into<String>, baseline: Measurement, candidate: Measurement) -> Self {
        let ns_per_op_baseline = baseline.ns_per_op();
        let ns_per_op_candidate = candidate.ns_per_op();
        Self {
            operation: operation.into(),
            ns_per_op_baseline,
            ns_per_op_candidate,
            speedup: ns_per_op_baseline / ns_per_op_candidate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ns_per_op() {
        assert_eq!(Measurement::new(1_000, 100).ns_per_op(), 10.0);
        assert_eq!(Measurement::new(5, 2).ns_per_op(), 2.5);
    }

    #[test]
    fn test_speedup_twice_as_fast() {
        let r = BenchmarkResult::compare("x", Measurement::new(200, 100), Measurement::new(100, 100));
        assert_eq!(r.ns_per_op_baseline, 2.0);
        assert_eq!(r.ns_per_op_candidate, 1.0);
        assert_eq!(r.speedup, 2.0);
        assert_eq!(format!("{:.2}", r.speedup), "2.00");
    }

    #[test]
    fn test_speedup_normalises_op_counts() {
        // Same per-op cost, different run lengths.
        let r = BenchmarkResult::compare("x", Measurement::new(3_000, 1_000), Measurement::new(300, 100));
        assert_eq!(r.speedup, 1.0);
    }

    #[test]
    fn test_compare_is_pure() {
        let b = Measurement::new(123_456, 789);
        let c = Measurement::new(65_432, 789);
        assert_eq!(BenchmarkResult::compare("x", b, c), BenchmarkResult::compare("x", b, c));
    }

    #[test]
    fn test_stopwatch_counts_operations() {
        let m = Stopwatch::start().stop(7);
        assert_eq!(m.operations, 7);
    }
}
