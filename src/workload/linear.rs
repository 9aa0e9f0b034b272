//! Linear Allocation and Linear Deallocation.
//!
//! Allocates `count` records in index order, then frees all of them in one
//! fixed order. The two phases are timed separately; the address vector is
//! sized before either span starts.

use crate::alloc::{AllocError, RecordAllocator};
use crate::metrics::{Measurement, Stopwatch};
use crate::record::Record;
use core::ptr::NonNull;
use serde::{Deserialize, Serialize};

/// Order in which Linear Deallocation walks the allocated addresses.
///
/// Both allocators of a comparison must use the same order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreeOrder {
    /// Ascending index: first allocated, first freed.
    Forward,
    /// Descending index: last allocated, first freed.
    #[default]
    Reverse,
}

/// Timings of one allocate-all / free-all cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearTimings {
    /// Linear Allocation span.
    pub allocate: Measurement,
    /// Linear Deallocation span.
    pub free: Measurement,
}

/// Runs Linear Allocation followed by Linear Deallocation on `alloc`.
///
/// On return every record allocated here has been freed.
///
/// # Errors
/// Propagates [`AllocError`] if `alloc` runs out before `count` records.
/// Records allocated before the failure are freed first.
pub fn run<A: RecordAllocator>(alloc: &mut A, count: usize, order: FreeOrder) -> Result<LinearTimings, AllocError> {
    let mut records = Vec::with_capacity(count);

    let allocate = match allocate_linear(alloc, &mut records, count) {
        Ok(m) => m,
        Err(e) => {
            // SAFETY: every entry came from `alloc` and is still outstanding.
            unsafe { free_linear(alloc, &mut records, order) };
            return Err(e);
        }
    };

    // SAFETY: as above.
    let free = unsafe { free_linear(alloc, &mut records, order) };

    Ok(LinearTimings { allocate, free })
}

fn allocate_linear<A: RecordAllocator>(
    alloc: &mut A,
    records: &mut Vec<NonNull<Record>>,
    count: usize,
) -> Result<Measurement, AllocError> {
    let timer = Stopwatch::start();
    for _ in 0..count {
        records.push(alloc.allocate()?);
    }
    Ok(timer.stop(count as u64))
}

/// Frees and drains every entry of `records`.
///
/// # Safety
/// Every entry must be outstanding from `alloc`.
unsafe fn free_linear<A: RecordAllocator>(
    alloc: &mut A,
    records: &mut Vec<NonNull<Record>>,
    order: FreeOrder,
) -> Measurement {
    let count = records.len();
    let timer = Stopwatch::start();
    match order {
        FreeOrder::Forward => {
            for &record in records.iter() {
                alloc.free(record);
            }
        }
        FreeOrder::Reverse => {
            for &record in records.iter().rev() {
                alloc.free(record);
            }
        }
    }
    let m = timer.stop(count as u64);
    records.clear();
    m
}
