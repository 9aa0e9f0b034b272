//! `Tracked` — an accounting wrapper around any [`RecordAllocator`].
//!
//! Counts operations and keeps the set of outstanding addresses so callers
//! can check that a workload leaves nothing behind and never receives an
//! address that is already live. The bookkeeping costs a hash lookup per
//! call, so it is meant for verification runs, not timed ones.

use crate::alloc::{AllocError, RecordAllocator};
use crate::record::Record;
use core::ptr::NonNull;
use std::collections::HashSet;

/// Operation counters collected by [`Tracked`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AllocStats {
    /// Successful `allocate` calls.
    pub allocations: u64,
    /// `free` calls.
    pub frees: u64,
    /// `allocate` calls that returned an error.
    pub failures: u64,
    /// Successful allocations that returned an address already outstanding.
    pub aliased: u64,
    /// `free` calls on an address that was not outstanding.
    pub foreign_frees: u64,
    /// Highest number of simultaneously outstanding records.
    pub peak_outstanding: usize,
}

/// Wraps an allocator and records every address it hands out.
#[derive(Debug)]
pub struct Tracked<A> {
    inner: A,
    live: HashSet<usize>,
    stats: AllocStats,
}

impl<A: RecordAllocator> Tracked<A> {
    /// Wraps `inner`.
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            live: HashSet::new(),
            stats: AllocStats::default(),
        }
    }

    /// Records currently allocated and not yet freed.
    pub fn outstanding(&self) -> usize {
        self.live.len()
    }

    /// Returns `true` if `record` is currently outstanding.
    pub fn is_live(&self, record: NonNull<Record>) -> bool {
        self.live.contains(&(record.as_ptr() as usize))
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> AllocStats {
        self.stats
    }

    /// The wrapped allocator.
    pub fn inner(&self) -> &A {
        &self.inner
    }
}

impl<A: RecordAllocator> RecordAllocator for Tracked<A> {
    fn allocate(&mut self) -> Result<NonNull<Record>, AllocError> {
        match self.inner.allocate() {
            Ok(record) => {
                self.stats.allocations += 1;
                if !self.live.insert(record.as_ptr() as usize) {
                    self.stats.aliased += 1;
                }
                self.stats.peak_outstanding = self.stats.peak_outstanding.max(self.live.len());
                Ok(record)
            }
            Err(e) => {
                self.stats.failures += 1;
                Err(e)
            }
        }
    }

    unsafe fn free(&mut self, record: NonNull<Record>) {
        self.stats.frees += 1;
        if !self.live.remove(&(record.as_ptr() as usize)) {
            self.stats.foreign_frees += 1;
        }
        self.inner.free(record);
    }

    fn capacity(&self) -> Option<usize> {
        self.inner.capacity()
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::{Arena, HeapAllocator, SlabAllocator};

    #[test]
    fn test_tracked_counts() {
        let mut heap = Tracked::new(HeapAllocator::new());
        let a = heap.allocate().unwrap();
        let b = heap.allocate().unwrap();
        assert_eq!(heap.outstanding(), 2);
        assert!(heap.is_live(a));

        unsafe { heap.free(a) };
        assert!(!heap.is_live(a));
        assert_eq!(heap.outstanding(), 1);

        unsafe { heap.free(b) };
        let stats = heap.stats();
        assert_eq!(stats.allocations, 2);
        assert_eq!(stats.frees, 2);
        assert_eq!(stats.aliased, 0);
        assert_eq!(stats.foreign_frees, 0);
        assert_eq!(stats.peak_outstanding, 2);
    }

    #[test]
    fn test_tracked_counts_failures() {
        let mut arena = Arena::new(1).unwrap();
        let mut slab = Tracked::new(SlabAllocator::init(&mut arena));

        let a = slab.allocate().unwrap();
        assert!(slab.allocate().is_err());
        assert_eq!(slab.stats().failures, 1);
        assert_eq!(slab.capacity(), Some(1));
        assert_eq!(slab.name(), "slab");

        unsafe { slab.free(a) };
        assert_eq!(slab.inner().outstanding(), 0);
    }
}
