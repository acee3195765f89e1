//! Property tests over random reference strings.
//!
//! Small page alphabets keep hits and evictions frequent.

use std::collections::HashSet;

use pagesim::memory::OptimalReplacer;
use pagesim::{detect, run, FrameStore, Policy, Replacer};
use proptest::prelude::*;

fn reference_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..8, 0..60)
}

/// Optimal replacer whose next use is recomputed by scanning the suffix.
struct ScanningOptimal<'a> {
    reference: &'a [u8],
}

impl Replacer<u8> for ScanningOptimal<'_> {
    fn record_access(&mut self, _page: &u8, _step: usize) {}

    fn victim(&mut self, frames: &FrameStore<u8>, step: usize) -> Option<u8> {
        let next_use = |page: &u8| {
            self.reference[step + 1..]
                .iter()
                .position(|p| p == page)
                .map(|offset| step + 1 + offset)
                .unwrap_or(usize::MAX)
        };

        let mut victim: Option<(u8, usize)> = None;
        for page in frames.iter() {
            let next = next_use(page);
            if victim.map_or(true, |(_, furthest)| next > furthest) {
                victim = Some((*page, next));
            }
        }
        victim.map(|(page, _)| page)
    }
}

proptest! {
    /// Fault counts are bounded and history has one entry per reference plus one.
    #[test]
    fn prop_result_shape(reference in reference_strategy(), capacity in 1usize..6) {
        for policy in Policy::ALL {
            let result = run(policy, &reference, capacity).unwrap();

            prop_assert!(result.fault_count <= reference.len());
            prop_assert_eq!(result.history.len(), reference.len() + 1);
            prop_assert_eq!(result.steps.len(), reference.len());
            prop_assert!(result.history.iter().all(|frames| frames.len() <= capacity));
        }
    }

    /// No snapshot ever holds the same page twice.
    #[test]
    fn prop_snapshots_are_unique(reference in reference_strategy(), capacity in 1usize..6) {
        for policy in Policy::ALL {
            let result = run(policy, &reference, capacity).unwrap();
            for frames in &result.history {
                let distinct: HashSet<_> = frames.iter().collect();
                prop_assert_eq!(distinct.len(), frames.len());
            }
        }
    }

    /// Optimal is a lower bound for FIFO and LRU.
    #[test]
    fn prop_optimal_is_lower_bound(reference in reference_strategy(), capacity in 1usize..6) {
        let optimal = run(Policy::Optimal, &reference, capacity).unwrap().fault_count;
        let fifo = run(Policy::Fifo, &reference, capacity).unwrap().fault_count;
        let lru = run(Policy::Lru, &reference, capacity).unwrap().fault_count;

        prop_assert!(optimal <= fifo);
        prop_assert!(optimal <= lru);
    }

    /// LRU never faults more when given more frames.
    #[test]
    fn prop_lru_is_monotone(reference in reference_strategy()) {
        let anomalies = detect(Policy::Lru, &reference, &[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        prop_assert!(anomalies.is_empty());
    }

    /// Optimal is a stack algorithm too.
    #[test]
    fn prop_optimal_is_monotone(reference in reference_strategy()) {
        let anomalies = detect(Policy::Optimal, &reference, &[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        prop_assert!(anomalies.is_empty());
    }

    /// With room for every distinct page, only first references fault.
    #[test]
    fn prop_enough_frames_only_cold_misses(reference in reference_strategy(), extra in 0usize..3) {
        let distinct = reference.iter().collect::<HashSet<_>>().len();
        let capacity = distinct.max(1) + extra;

        for policy in Policy::ALL {
            let result = run(policy, &reference, capacity).unwrap();
            prop_assert_eq!(result.fault_count, distinct);
            prop_assert_eq!(result.evictions().count(), 0);
        }
    }

    /// Running twice yields identical results.
    #[test]
    fn prop_run_is_idempotent(reference in reference_strategy(), capacity in 1usize..6) {
        for policy in Policy::ALL {
            prop_assert_eq!(
                run(policy, &reference, capacity).unwrap(),
                run(policy, &reference, capacity).unwrap()
            );
        }
    }

    /// The precomputed next-use index evicts exactly what a suffix scan would.
    #[test]
    fn prop_optimal_matches_suffix_scan(reference in reference_strategy(), capacity in 1usize..6) {
        let mut scanning = ScanningOptimal { reference: &reference };
        let scanned =
            pagesim::simulate(&mut scanning, Policy::Optimal, &reference, capacity).unwrap();

        let mut indexed = OptimalReplacer::new(&reference);
        let precomputed =
            pagesim::simulate(&mut indexed, Policy::Optimal, &reference, capacity).unwrap();

        prop_assert_eq!(scanned, precomputed);
    }
}
