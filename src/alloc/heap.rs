//! `HeapAllocator` — the baseline that forwards to the global allocator.
//!
//! The struct holds no state: every record is an individual allocation from
//! whatever `#[global_allocator]` the process runs with (the platform
//! allocator unless a feature selects another one).

use crate::alloc::{AllocError, RecordAllocator};
use crate::record::Record;
use core::alloc::Layout;
use core::ptr::NonNull;
use std::alloc::{alloc, dealloc, handle_alloc_error};

/// The general-purpose heap, reached through `std::alloc`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeapAllocator;

impl HeapAllocator {
    const LAYOUT: Layout = Layout::new::<Record>();

    /// Creates a heap allocator handle.
    pub const fn new() -> Self {
        Self
    }
}

impl RecordAllocator for HeapAllocator {
    /// Never returns an error: allocation failure aborts through
    /// `handle_alloc_error`.
    #[inline]
    fn allocate(&mut self) -> Result<NonNull<Record>, AllocError> {
        // SAFETY: `Record` has non-zero size.
        let ptr = unsafe { alloc(Self::LAYOUT) };
        match NonNull::new(ptr.cast::<Record>()) {
            Some(record) => Ok(record),
            None => handle_alloc_error(Self::LAYOUT),
        }
    }

    #[inline]
    unsafe fn free(&mut self, record: NonNull<Record>) {
        dealloc(record.as_ptr().cast::<u8>(), Self::LAYOUT);
    }

    fn name(&self) -> &'static str {
        "heap"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heap_alloc() {
        let mut heap = HeapAllocator::new();
        let ptr = heap.allocate().unwrap();

        assert_eq!(ptr.as_ptr() as usize % core::mem::align_of::<Record>(), 0);
        assert_eq!(heap.capacity(), None);

        unsafe {
            ptr.as_ptr().cast::<u64>().write(42);
            assert_eq!(ptr.as_ptr().cast::<u64>().read(), 42);
            heap.free(ptr);
        }
    }

    #[test]
    fn test_heap_layout_is_plain_malloc_size() {
        assert_eq!(HeapAllocator::LAYOUT.size(), 64);
        assert!(HeapAllocator::LAYOUT.align() <= 16);
    }

    #[test]
    fn test_heap_distinct_addresses() {
        let mut heap = HeapAllocator::new();
        let a = heap.allocate().unwrap();
        let b = heap.allocate().unwrap();
        assert_ne!(a, b);
        unsafe {
            heap.free(a);
            heap.free(b);
        }
    }
}
