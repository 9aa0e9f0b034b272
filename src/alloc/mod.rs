//! Allocators under test and the contract they share.

pub mod allocator;
pub mod arena;
pub mod heap;
pub mod slab;
pub mod tracked;

pub use allocator::{AllocError, RecordAllocator};
pub use arena::Arena;
pub use heap::HeapAllocator;
pub use slab::SlabAllocator;
pub use tracked::{AllocStats, Tracked};
