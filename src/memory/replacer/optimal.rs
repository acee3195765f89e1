//! Optimal (Belady's MIN) replacement policy.
//!
//! Clairvoyant: it reads the rest of the reference string to evict the page
//! whose next use lies furthest in the future. Not realizable online, but a
//! lower bound on the faults any policy can achieve.

use std::collections::HashMap;

use crate::common::Page;
use crate::memory::replacer::Replacer;
use crate::memory::FrameStore;

/// Next-use marker for a page that is never referenced again.
pub const NEVER: usize = usize::MAX;

/// An Optimal eviction policy.
///
/// # Next-use index
/// Instead of re-scanning the remaining reference string on every fault, the
/// replacer precomputes `next[i]`: the next position after `i` holding the same
/// page, or [`NEVER`]. Every access at position `i` stores `next[i]` as the
/// page's upcoming use. A resident page was last referenced at some `r <= i`
/// and not since, so `next[r]` is exactly its first use after `i`.
///
/// # Tie-breaking
/// Among pages sharing the furthest next use (in practice: several pages that
/// are never used again), the first one in frame store order is evicted.
pub struct OptimalReplacer<P: Page> {
    /// Position -> next position referencing the same page.
    next: Vec<usize>,

    /// Page -> its next use after the most recent reference.
    upcoming: HashMap<P, usize>,
}

impl<P: Page> OptimalReplacer<P> {
    /// Create a replacer for one run over `reference`.
    pub fn new(reference: &[P]) -> Self {
        Self {
            next: next_occurrences(reference),
            upcoming: HashMap::new(),
        }
    }

    /// Next use of `page` after the most recently recorded step.
    ///
    /// Pages that were never recorded report [`NEVER`].
    pub fn next_use(&self, page: &P) -> usize {
        self.upcoming.get(page).copied().unwrap_or(NEVER)
    }
}

impl<P: Page> Replacer<P> for OptimalReplacer<P> {
    fn record_access(&mut self, page: &P, step: usize) {
        let next = self.next.get(step).copied().unwrap_or(NEVER);
        self.upcoming.insert(page.clone(), next);
    }

    fn victim(&mut self, frames: &FrameStore<P>, _step: usize) -> Option<P> {
        let mut victim: Option<(&P, usize)> = None;

        for page in frames.iter() {
            let next = self.next_use(page);
            match victim {
                Some((_, furthest)) if next <= furthest => {}
                _ => victim = Some((page, next)),
            }
        }

        victim.map(|(page, _)| page.clone())
    }
}

/// Build the next-occurrence index for `reference`.
///
/// `result[i]` is the smallest `j > i` with `reference[j] == reference[i]`,
/// or [`NEVER`].
pub fn next_occurrences<P: Page>(reference: &[P]) -> Vec<usize> {
    let mut next = vec![NEVER; reference.len()];
    let mut seen: HashMap<&P, usize> = HashMap::new();

    for (i, page) in reference.iter().enumerate().rev() {
        if let Some(j) = seen.insert(page, i) {
            next[i] = j;
        }
    }
    next
}
