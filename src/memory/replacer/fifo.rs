//! FIFO (First-In-First-Out) replacement policy.
//!
//! Only the order of admission matters; hits never reorder the queue. This
//! is the policy that exhibits Belady's anomaly.

use std::collections::VecDeque;

use crate::common::Page;
use crate::memory::replacer::Replacer;
use crate::memory::FrameStore;

/// A FIFO eviction policy.
///
/// Evicts pages in the order they were admitted to the frame store.
pub struct FifoReplacer<P: Page> {
    /// Resident pages in admission order (front = oldest).
    queue: VecDeque<P>,
}

impl<P: Page> FifoReplacer<P> {
    /// Create a new FIFO replacer.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl<P: Page> Default for FifoReplacer<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Page> Replacer<P> for FifoReplacer<P> {
    /// Hits do not change FIFO order.
    fn record_access(&mut self, _page: &P, _step: usize) {}

    fn record_admission(&mut self, page: &P) {
        self.queue.push_back(page.clone());
    }

    /// Returns the oldest admitted page that is still resident.
    fn victim(&mut self, frames: &FrameStore<P>, _step: usize) -> Option<P> {
        while let Some(page) = self.queue.pop_front() {
            if frames.contains(&page) {
                return Some(page);
            }
            // Evicted behind our back, skip it
        }
        frames.oldest().cloned()
    }
}
