//! Swiss-Cheese Churn: random toggles over a fixed-size slot table.
//!
//! Each step draws `slot = rng & mask`. An occupied slot is freed and
//! emptied; an empty slot receives a fresh record. One branch and one mask
//! per step, so the working set settles around half occupancy with live
//! records scattered at random.

use crate::alloc::{AllocError, RecordAllocator};
use crate::metrics::{Measurement, Stopwatch};
use crate::workload::{SlotTable, XorShift32};

/// What one step did to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggle {
    /// The slot was empty and now holds a new record.
    Filled(usize),
    /// The slot held a record, which was freed.
    Vacated(usize),
}

impl Toggle {
    /// Slot index the step touched.
    pub fn slot(self) -> usize {
        match self {
            Self::Filled(s) | Self::Vacated(s) => s,
        }
    }
}

/// Stepping engine bound to one allocator and one slot table.
///
/// Every address in the table came from `alloc`. Dropping the engine frees
/// whatever is still live, so no record outlives the phase.
pub struct SwissCheese<'a, A: RecordAllocator> {
    alloc: &'a mut A,
    table: &'a mut SlotTable,
    rng: XorShift32,
}

impl<'a, A: RecordAllocator> SwissCheese<'a, A> {
    /// Binds `alloc` and `table`. The table is cleared first.
    pub fn new(alloc: &'a mut A, table: &'a mut SlotTable, rng: XorShift32) -> Self {
        table.clear();
        Self { alloc, table, rng }
    }

    /// Fills slots `0..count` with one record each.
    ///
    /// `count` must not exceed the table length.
    ///
    /// # Errors
    /// Propagates [`AllocError`] from the allocator.
    pub fn warm_up(&mut self, count: usize) -> Result<(), AllocError> {
        debug_assert!(
            count <= self.table.len(),
            "warm-up of {count} exceeds {} slots",
            self.table.len()
        );
        for slot in 0..count {
            if self.table.get(slot).is_none() {
                let record = self.alloc.allocate()?;
                self.table.insert(slot, record);
            }
        }
        Ok(())
    }

    /// Performs one toggle.
    ///
    /// # Errors
    /// Propagates [`AllocError`] if filling a slot fails.
    #[inline]
    pub fn step(&mut self) -> Result<Toggle, AllocError> {
        let slot = self.rng.next_masked(self.table.mask());
        match self.table.take(slot) {
            Some(record) => {
                // SAFETY: the table only holds outstanding records from `alloc`.
                unsafe { self.alloc.free(record) };
                Ok(Toggle::Vacated(slot))
            }
            None => {
                let record = self.alloc.allocate()?;
                self.table.insert(slot, record);
                Ok(Toggle::Filled(slot))
            }
        }
    }

    /// Times `iterations` steps.
    ///
    /// # Errors
    /// Propagates [`AllocError`] from the first failing step.
    pub fn run(&mut self, iterations: usize) -> Result<Measurement, AllocError> {
        let timer = Stopwatch::start();
        for _ in 0..iterations {
            self.step()?;
        }
        Ok(timer.stop(iterations as u64))
    }

    /// Frees every live record and empties the table. Returns how many were freed.
    pub fn teardown(&mut self) -> usize {
        // SAFETY: the table only holds outstanding records from `alloc`.
        unsafe { self.table.release_all(&mut *self.alloc) }
    }

    /// The slot table.
    pub fn table(&self) -> &SlotTable {
        &*self.table
    }

    /// The allocator under test.
    pub fn allocator(&self) -> &A {
        &*self.alloc
    }
}

impl<A: RecordAllocator> Drop for SwissCheese<'_, A> {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Runs one full Swiss-Cheese phase: warm-up, timed loop, teardown.
///
/// # Errors
/// Propagates [`AllocError`]; live records are freed in either case.
pub fn run<A: RecordAllocator>(
    alloc: &mut A,
    table: &mut SlotTable,
    rng: XorShift32,
    warmup: usize,
    iterations: usize,
) -> Result<Measurement, AllocError> {
    let mut engine = SwissCheese::new(alloc, table, rng);
    engine.warm_up(warmup)?;
    let measurement = engine.run(iterations)?;
    let remaining = engine.teardown();
    tracing::debug!(allocator = engine.allocator().name(), remaining, "swiss-cheese teardown");
    Ok(measurement)
}
