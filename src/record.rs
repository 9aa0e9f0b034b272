//! `Record` — the fixed-size value every workload allocates.
//!
//! The benchmark never reads or writes record contents; only the address
//! handed out by an allocator is tracked. The type exists so that both
//! allocators serve exactly the same size and alignment. The alignment is
//! word-sized, so the heap baseline stays on the plain `malloc` path.

/// Size in bytes of one record (and of one slab block).
pub const RECORD_SIZE: usize = 64;

/// An opaque 64-byte value with word alignment.
#[repr(C)]
pub struct Record {
    _words: [u64; RECORD_SIZE / 8],
}

/// Alignment of the arena base. Blocks inside an arena start on cache lines;
/// heap records carry only the alignment of [`Record`].
pub const ARENA_ALIGN: usize = 64;

// The slab free list stores the next free index inside a vacant block.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<Record>() == RECORD_SIZE);
    assert!(mem::align_of::<Record>() <= 16);
    assert!(mem::align_of::<Record>() >= mem::align_of::<usize>());
    assert!(mem::size_of::<Record>() >= mem::size_of::<usize>());
};
