//! Hot Churn: allocate a small batch, free it in reverse, repeat.
//!
//! The same handful of blocks is recycled every iteration while it is still
//! cache-resident, isolating the allocator's fast path.

use crate::alloc::{AllocError, RecordAllocator};
use crate::metrics::{Measurement, Stopwatch};

/// Runs `iterations` rounds of `batch` allocations followed by `batch` frees.
///
/// The reported operation count is `iterations * batch * 2`: each allocate
/// and each free counts once.
///
/// # Errors
/// Propagates [`AllocError`] if `alloc` cannot hold `batch` records at once.
/// The partial batch is freed before returning.
pub fn run<A: RecordAllocator>(alloc: &mut A, iterations: usize, batch: usize) -> Result<Measurement, AllocError> {
    let mut held = Vec::with_capacity(batch);

    let timer = Stopwatch::start();
    for _ in 0..iterations {
        for _ in 0..batch {
            match alloc.allocate() {
                Ok(record) => held.push(record),
                Err(e) => {
                    while let Some(record) = held.pop() {
                        // SAFETY: allocated from `alloc` in this batch.
                        unsafe { alloc.free(record) };
                    }
                    return Err(e);
                }
            }
        }
        while let Some(record) = held.pop() {
            // SAFETY: allocated from `alloc` in this batch.
            unsafe { alloc.free(record) };
        }
    }

    Ok(timer.stop((iterations * batch * 2) as u64))
}
