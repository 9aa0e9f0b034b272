use proptest::prelude::*;
use slabbench::alloc::{Arena, HeapAllocator, SlabAllocator, Tracked};
use slabbench::workload::{SlotTable, SwissCheese, Toggle, XorShift32};

proptest! {
    #[test]
    fn test_live_slots_match_outstanding_slab(
        seed in any::<u32>(),
        log_slots in 1u32..10,
        warmup_frac in 0usize..=100,
        steps in 0usize..5_000,
    ) {
        let slots = 1usize << log_slots;
        let warmup = slots * warmup_frac / 100;

        let mut arena = Arena::new(slots).unwrap();
        let mut slab = Tracked::new(SlabAllocator::init(&mut arena));
        let mut table = SlotTable::new(slots);

        {
            let mut engine = SwissCheese::new(&mut slab, &mut table, XorShift32::new(seed));
            engine.warm_up(warmup).unwrap();
            prop_assert_eq!(engine.table().live(), engine.allocator().outstanding());

            for _ in 0..steps {
                let toggle = engine.step().unwrap();
                let slot = toggle.slot();
                match toggle {
                    Toggle::Filled(_) => {
                        let record = engine.table().get(slot).unwrap();
                        prop_assert!(engine.allocator().is_live(record));
                    }
                    Toggle::Vacated(_) => prop_assert!(engine.table().get(slot).is_none()),
                }
                prop_assert_eq!(engine.table().live(), engine.allocator().outstanding());
            }
            prop_assert_eq!(engine.allocator().stats().aliased, 0);
        }

        prop_assert_eq!(table.live(), 0);
        prop_assert_eq!(slab.outstanding(), 0);
        prop_assert_eq!(slab.stats().foreign_frees, 0);
    }

    #[test]
    fn test_live_slots_match_outstanding_heap(seed in any::<u32>(), steps in 0usize..2_000) {
        let mut heap = Tracked::new(HeapAllocator::new());
        let mut table = SlotTable::new(128);

        {
            let mut engine = SwissCheese::new(&mut heap, &mut table, XorShift32::new(seed));
            engine.warm_up(64).unwrap();
            engine.run(steps).unwrap();
            prop_assert_eq!(engine.table().live(), engine.allocator().outstanding());
            let freed = engine.teardown();
            prop_assert_eq!(engine.allocator().outstanding(), 0);
            prop_assert!(freed <= 128);
        }

        prop_assert_eq!(heap.outstanding(), 0);
    }
}
