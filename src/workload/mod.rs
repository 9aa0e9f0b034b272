//! Workload drivers and the pieces they share.
//!
//! Every driver is generic over [`RecordAllocator`](crate::alloc::RecordAllocator),
//! times only allocator calls, and leaves no record outstanding when it
//! returns.

pub mod churn;
pub mod linear;
pub mod slot_table;
pub mod swiss;
pub mod xorshift;

pub use linear::{FreeOrder, LinearTimings};
pub use slot_table::SlotTable;
pub use swiss::{SwissCheese, Toggle};
pub use xorshift::XorShift32;
