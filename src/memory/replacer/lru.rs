//! LRU (Least-Recently-Used) replacement policy.

use std::collections::HashMap;

use crate::common::Page;
use crate::memory::replacer::Replacer;
use crate::memory::FrameStore;

/// An LRU eviction policy.
///
/// Keeps a usage clock mapping each page to the position of its most recent
/// reference. The victim is the resident page with the oldest clock value.
///
/// # Tie-breaking
/// Every position in a reference string holds exactly one page, so two
/// resident pages never share a clock value. Should they ever tie, the first
/// one in frame store order wins.
pub struct LruReplacer<P: Page> {
    /// Page -> position of its most recent reference.
    last_used: HashMap<P, usize>,
}

impl<P: Page> LruReplacer<P> {
    /// Create a new LRU replacer.
    pub fn new() -> Self {
        Self {
            last_used: HashMap::new(),
        }
    }

    /// Position of the most recent reference to `page`, if any.
    pub fn last_used(&self, page: &P) -> Option<usize> {
        self.last_used.get(page).copied()
    }
}

impl<P: Page> Default for LruReplacer<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Page> Replacer<P> for LruReplacer<P> {
    fn record_access(&mut self, page: &P, step: usize) {
        self.last_used.insert(page.clone(), step);
    }

    fn victim(&mut self, frames: &FrameStore<P>, _step: usize) -> Option<P> {
        let mut victim: Option<(&P, usize)> = None;

        for page in frames.iter() {
            let used = self.last_used(page);
            debug_assert!(used.is_some(), "resident page {:?} was never accessed", page);
            let used = used.unwrap_or(0);
            match victim {
                Some((_, oldest)) if used >= oldest => {}
                _ => victim = Some((page, used)),
            }
        }

        victim.map(|(page, _)| page.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(
        replacer: &mut LruReplacer<char>,
        frames: &mut FrameStore<char>,
        page: char,
        step: usize,
    ) {
        replacer.record_access(&page, step);
        if !frames.contains(&page) {
            frames.insert(page).unwrap();
        }
    }

    #[test]
    fn test_lru_evicts_least_recent() {
        let mut replacer = LruReplacer::new();
        let mut frames = FrameStore::new(3).unwrap();

        reference(&mut replacer, &mut frames, 'a', 0);
        reference(&mut replacer, &mut frames, 'b', 1);
        reference(&mut replacer, &mut frames, 'c', 2);
        reference(&mut replacer, &mut frames, 'a', 3); // 'a' is now most recent

        assert_eq!(replacer.victim(&frames, 4), Some('b'));
    }

    #[test]
    fn test_lru_clock_updated_on_every_reference() {
        let mut replacer = LruReplacer::new();
        let mut frames = FrameStore::new(2).unwrap();

        reference(&mut replacer, &mut frames, 'x', 0);
        assert_eq!(replacer.last_used(&'x'), Some(0));

        reference(&mut replacer, &mut frames, 'x', 5);
        assert_eq!(replacer.last_used(&'x'), Some(5));
        assert_eq!(replacer.last_used(&'y'), None);
    }

    #[test]
    fn test_lru_tie_goes_to_first_in_store_order() {
        let mut replacer = LruReplacer::new();
        let mut frames = FrameStore::new(2).unwrap();

        // Same clock value for both, only possible when driven by hand.
        frames.insert('p').unwrap();
        frames.insert('q').unwrap();
        replacer.record_access(&'q', 4);
        replacer.record_access(&'p', 4);

        assert_eq!(replacer.victim(&frames, 5), Some('p'));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "was never accessed")]
    fn test_lru_unrecorded_resident_page() {
        let mut replacer = LruReplacer::new();
        let mut frames = FrameStore::new(2).unwrap();

        frames.insert('p').unwrap();
        reference(&mut replacer, &mut frames, 'q', 0);

        replacer.victim(&frames, 1);
    }

    #[test]
    fn test_lru_empty_store() {
        let mut replacer = LruReplacer::<char>::new();
        let frames = FrameStore::new(1).unwrap();
        assert_eq!(replacer.victim(&frames, 0), None);
    }
}
