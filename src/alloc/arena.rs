//! `Arena` — a scoped, contiguous region sized for an exact record count.
//!
//! The arena owns its memory for the duration of one benchmark phase and
//! returns it to the global allocator on `Drop`, so release happens on every
//! exit path. Allocators borrow the arena mutably, which keeps the region
//! alive for as long as any allocator over it exists.

use crate::alloc::AllocError;
use crate::record::{Record, ARENA_ALIGN, RECORD_SIZE};
use core::alloc::Layout;
use core::ptr::NonNull;
use std::alloc::{alloc, dealloc, handle_alloc_error};

/// Contiguous backing memory for `capacity` records.
pub struct Arena {
    memory: NonNull<Record>,
    capacity: usize,
    layout: Layout,
}

impl Arena {
    /// Reserves room for exactly `capacity` records.
    ///
    /// # Errors
    /// Returns [`AllocError::Layout`] if `capacity` is zero or the total size
    /// overflows.
    pub fn new(capacity: usize) -> Result<Self, AllocError> {
        if capacity == 0 {
            return Err(AllocError::Layout { capacity });
        }
        let layout = capacity
            .checked_mul(RECORD_SIZE)
            .and_then(|size| Layout::from_size_align(size, ARENA_ALIGN).ok())
            .ok_or(AllocError::Layout { capacity })?;

        // SAFETY: `layout` has non-zero size.
        let ptr = unsafe { alloc(layout) };
        let Some(memory) = NonNull::new(ptr.cast::<Record>()) else {
            handle_alloc_error(layout);
        };

        tracing::debug!(capacity, bytes = layout.size(), "arena reserved");

        Ok(Self {
            memory,
            capacity,
            layout,
        })
    }

    /// Number of records the arena holds.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Size of the region in bytes.
    #[inline]
    pub fn size_bytes(&self) -> usize {
        self.layout.size()
    }

    /// Pointer to the first block.
    #[inline]
    pub(crate) fn base(&self) -> NonNull<Record> {
        self.memory
    }

    /// Returns `true` if `ptr` points at the start of a block inside the arena.
    pub fn contains(&self, ptr: NonNull<Record>) -> bool {
        let start = self.memory.as_ptr() as usize;
        let end = start + self.layout.size();
        let p = ptr.as_ptr() as usize;
        p >= start && p < end && (p - start) % core::mem::size_of::<Record>() == 0
    }
}

impl Drop for Arena {
    fn drop(&mut self) {
        // SAFETY: `memory` was allocated in `new` with exactly `layout`.
        unsafe {
            dealloc(self.memory.as_ptr().cast::<u8>(), self.layout);
        }
        tracing::debug!(capacity = self.capacity, "arena released");
    }
}

impl core::fmt::Debug for Arena {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Arena")
            .field("base", &self.memory)
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_sizing() {
        let arena = Arena::new(1000).unwrap();
        assert_eq!(arena.capacity(), 1000);
        assert_eq!(arena.size_bytes(), 64 * 1000);
    }

    #[test]
    fn test_arena_base_on_cache_line() {
        for capacity in [1, 3, 100] {
            let arena = Arena::new(capacity).unwrap();
            assert_eq!(arena.base().as_ptr() as usize % ARENA_ALIGN, 0);
        }
    }

    #[test]
    fn test_arena_rejects_zero_capacity() {
        assert_eq!(Arena::new(0).unwrap_err(), AllocError::Layout { capacity: 0 });
    }

    #[test]
    fn test_arena_rejects_overflow() {
        assert!(matches!(Arena::new(usize::MAX), Err(AllocError::Layout { .. })));
    }

    #[test]
    fn test_arena_contains() {
        let arena = Arena::new(4).unwrap();
        let base = arena.base();
        assert!(arena.contains(base));

        unsafe {
            let last = NonNull::new_unchecked(base.as_ptr().add(3));
            assert!(arena.contains(last));

            let past_end = NonNull::new_unchecked(base.as_ptr().add(4));
            assert!(!arena.contains(past_end));

            let misaligned = NonNull::new_unchecked(base.as_ptr().cast::<u8>().add(8).cast::<Record>());
            assert!(!arena.contains(misaligned));
        }
    }
}
