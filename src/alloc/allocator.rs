//! The allocator contract shared by the heap baseline and the slab.

use crate::record::Record;
use core::ptr::NonNull;

/// The capability contract every allocator under test satisfies.
///
/// An implementation serves records of one fixed size. Each successful
/// `allocate` returns an address that is not currently outstanding; `free`
/// makes an outstanding address eligible for reuse.
///
/// All workload drivers are generic over this trait, so the timed loops are
/// monomorphized per allocator and carry no dynamic dispatch.
pub trait RecordAllocator {
    /// Allocates one record.
    ///
    /// # Errors
    /// Returns [`AllocError::Exhausted`] if every block is outstanding.
    fn allocate(&mut self) -> Result<NonNull<Record>, AllocError>;

    /// Returns a record to the allocator.
    ///
    /// # Safety
    /// `record` must have been returned by `allocate` on this same allocator
    /// and must not have been freed since.
    unsafe fn free(&mut self, record: NonNull<Record>);

    /// Maximum number of simultaneously outstanding records, if bounded.
    fn capacity(&self) -> Option<usize> {
        None
    }

    /// Short human-readable label used in logs.
    fn name(&self) -> &'static str;
}

impl<A: RecordAllocator + ?Sized> RecordAllocator for &mut A {
    #[inline]
    fn allocate(&mut self) -> Result<NonNull<Record>, AllocError> {
        (**self).allocate()
    }

    #[inline]
    unsafe fn free(&mut self, record: NonNull<Record>) {
        (**self).free(record);
    }

    fn capacity(&self) -> Option<usize> {
        (**self).capacity()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// The error type for allocation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AllocError {
    /// Every block of a bounded allocator is outstanding.
    #[error("allocator exhausted: all {capacity} blocks are outstanding")]
    Exhausted {
        /// Block count of the exhausted pool.
        capacity: usize,
    },
    /// The requested arena size is zero or overflows `isize`.
    #[error("invalid arena layout for {capacity} records")]
    Layout {
        /// Requested record count.
        capacity: usize,
    },
}
