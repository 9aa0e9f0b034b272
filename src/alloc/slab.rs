//! `SlabAllocator` — a fixed-block allocator over a borrowed `Arena`.
//!
//! Every block has the size of one [`Record`]. Vacant blocks form an
//! intrusive singly linked free list: the first `usize` of a vacant block
//! holds the index of the next vacant block. Allocation pops the head and
//! `free` pushes onto it, so both are O(1) and reuse is LIFO.

use crate::alloc::{AllocError, Arena, RecordAllocator};
use crate::record::Record;
use core::ptr::NonNull;

/// End-of-list marker stored in the last vacant block.
const NIL: usize = usize::MAX;

/// A fixed-block allocator bound to one arena for its whole lifetime.
pub struct SlabAllocator<'arena> {
    arena: &'arena mut Arena,
    base: NonNull<Record>,
    free_head: Option<usize>,
    free_count: usize,
}

impl<'arena> SlabAllocator<'arena> {
    /// Carves `arena` into blocks and threads them onto the free list.
    ///
    /// Blocks are handed out in ascending address order until the first
    /// `free`.
    pub fn init(arena: &'arena mut Arena) -> Self {
        let base = arena.base();
        let capacity = arena.capacity();

        // SAFETY: every index below `capacity` lies inside the arena, and each
        // block is aligned for `usize`.
        unsafe {
            let mut p = base.as_ptr();
            for i in 0..capacity - 1 {
                p.cast::<usize>().write(i + 1);
                p = p.add(1);
            }
            p.cast::<usize>().write(NIL);
        }

        tracing::debug!(capacity, "slab initialised");

        Self {
            arena,
            base,
            free_head: Some(0),
            free_count: capacity,
        }
    }

    /// Number of blocks currently handed out.
    #[inline]
    pub fn outstanding(&self) -> usize {
        self.arena.capacity() - self.free_count
    }

    /// Number of blocks available without a `free`.
    #[inline]
    pub fn available(&self) -> usize {
        self.free_count
    }
}

impl RecordAllocator for SlabAllocator<'_> {
    #[inline]
    fn allocate(&mut self) -> Result<NonNull<Record>, AllocError> {
        let Some(idx) = self.free_head else {
            return Err(AllocError::Exhausted {
                capacity: self.arena.capacity(),
            });
        };

        // SAFETY: `idx` came from the free list, so it indexes a vacant block
        // whose first word holds the next link.
        unsafe {
            let ptr = self.base.as_ptr().add(idx);
            let next = ptr.cast::<usize>().read();
            self.free_head = if next == NIL { None } else { Some(next) };
            self.free_count -= 1;
            Ok(NonNull::new_unchecked(ptr))
        }
    }

    #[inline]
    unsafe fn free(&mut self, record: NonNull<Record>) {
        debug_assert!(self.arena.contains(record), "record does not belong to this slab");

        let idx = record.as_ptr().offset_from(self.base.as_ptr()) as usize;
        record.as_ptr().cast::<usize>().write(self.free_head.unwrap_or(NIL));
        self.free_head = Some(idx);
        self.free_count += 1;
    }

    fn capacity(&self) -> Option<usize> {
        Some(self.arena.capacity())
    }

    fn name(&self) -> &'static str {
        "slab"
    }
}
