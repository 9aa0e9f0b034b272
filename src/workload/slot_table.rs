//! `SlotTable` — a power-of-two table of optional record addresses.
//!
//! The table owns no memory: every entry borrows an address whose record is
//! owned by an allocator elsewhere. Clearing an entry therefore never frees
//! the record; freeing is the caller's job (see [`SlotTable::release_all`]).
//! The live count is always derived by scanning, never cached.

use crate::alloc::RecordAllocator;
use crate::record::Record;
use core::ptr::NonNull;

/// Fixed-length table of `Option<NonNull<Record>>`.
#[derive(Debug)]
pub struct SlotTable {
    slots: Box<[Option<NonNull<Record>>]>,
}

impl SlotTable {
    /// Creates an all-empty table of `len` slots.
    ///
    /// # Panics
    /// Panics if `len` is not a power of two.
    pub fn new(len: usize) -> Self {
        assert!(len.is_power_of_two(), "slot table length {len} is not a power of two");
        Self {
            slots: vec![None; len].into_boxed_slice(),
        }
    }

    /// Number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`: a table has at least one slot.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Mask that maps a random word onto a slot index.
    #[inline]
    pub fn mask(&self) -> usize {
        self.slots.len() - 1
    }

    /// Entry at `slot`.
    #[inline]
    pub fn get(&self, slot: usize) -> Option<NonNull<Record>> {
        self.slots[slot]
    }

    /// Stores `record` in `slot`, returning the previous entry.
    #[inline]
    pub fn insert(&mut self, slot: usize, record: NonNull<Record>) -> Option<NonNull<Record>> {
        self.slots[slot].replace(record)
    }

    /// Empties `slot` and returns what it held. Does not free the record.
    #[inline]
    pub fn take(&mut self, slot: usize) -> Option<NonNull<Record>> {
        self.slots[slot].take()
    }

    /// Count of occupied slots, computed by scanning.
    pub fn live(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Occupied entries in slot order.
    pub fn iter_live(&self) -> impl Iterator<Item = (usize, NonNull<Record>)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, s)| s.map(|r| (i, r)))
    }

    /// Resets every slot to empty without freeing anything.
    pub fn clear(&mut self) {
        self.slots.fill(None);
    }

    /// Frees every live record through `alloc` and empties its slot.
    ///
    /// Returns the number of records freed.
    ///
    /// # Safety
    /// Every live entry must have been allocated by `alloc` and still be
    /// outstanding.
    pub unsafe fn release_all<A: RecordAllocator>(&mut self, alloc: &mut A) -> usize {
        let mut freed = 0;
        for slot in self.slots.iter_mut() {
            if let Some(record) = slot.take() {
                alloc.free(record);
                freed += 1;
            }
        }
        freed
    }
}
