use proptest::prelude::*;
use pulsetop::engine::history::{Channel, HistoryStore};

proptest! {
    #[test]
    fn length_never_exceeds_capacity(
        samples in prop::collection::vec(-1000.0f64..100_000.0, 0..200),
        capacity in 1usize..64,
    ) {
        let mut store = HistoryStore::new(capacity);
        for &s in &samples {
            store.push(Channel::Cpu, s);
            prop_assert!(store.len(Channel::Cpu) <= capacity);
        }
    }

    #[test]
    fn snapshot_is_suffix_of_pushes_in_order(
        samples in prop::collection::vec(0.0f64..100.0, 0..200),
    ) {
        let mut store = HistoryStore::new(40);
        for &s in &samples {
            store.push(Channel::Network, s);
        }
        let snap = store.snapshot(Channel::Network);
        let expected: Vec<f64> = samples
            .iter()
            .copied()
            .skip(samples.len().saturating_sub(40))
            .collect();
        prop_assert_eq!(snap, expected);
    }

    #[test]
    fn stored_samples_are_always_finite(
        samples in prop::collection::vec(
            prop_oneof![
                Just(f64::NAN),
                Just(f64::INFINITY),
                Just(f64::NEG_INFINITY),
                0.0f64..100.0,
            ],
            1..100,
        ),
    ) {
        let mut store = HistoryStore::new(40);
        for &s in &samples {
            store.push(Channel::Disk, s);
        }
        for v in store.snapshot(Channel::Disk) {
            prop_assert!(v.is_finite());
        }
    }

    #[test]
    fn channels_never_bleed_into_each_other(
        cpu in prop::collection::vec(0.0f64..100.0, 0..80),
        memory in prop::collection::vec(0.0f64..100.0, 0..80),
    ) {
        let mut store = HistoryStore::new(40);
        for &s in &cpu {
            store.push(Channel::Cpu, s);
        }
        for &s in &memory {
            store.push(Channel::Memory, s);
        }
        prop_assert_eq!(store.len(Channel::Cpu), cpu.len().min(40));
        prop_assert_eq!(store.len(Channel::Memory), memory.len().min(40));
    }
}
