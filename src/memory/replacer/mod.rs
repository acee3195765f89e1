//! Eviction policy implementations (replacers).
//!
//! Implements:
//! - [`FifoReplacer`] - evicts the earliest-admitted page
//! - [`LruReplacer`] - evicts the least recently referenced page
//! - [`OptimalReplacer`] - evicts the page whose next use is furthest away
//!
//! [`Policy`] names a replacer and builds one for a given reference string,
//! so the simulator can swap policies at runtime.

mod fifo;
mod lru;
mod optimal;

use std::fmt;
use std::str::FromStr;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;

use crate::common::{Error, Page, Result};
use crate::memory::FrameStore;

/// An eviction policy driven by the simulator.
///
/// For every reference the simulator calls [`record_access`](Self::record_access)
/// first. On a fault with a full store it asks for a [`victim`](Self::victim),
/// evicts it, then admits the new page and reports it through
/// [`record_admission`](Self::record_admission).
pub trait Replacer<P: Page> {
    /// Record that `page` is referenced at position `step` (hit or fault).
    fn record_access(&mut self, page: &P, step: usize);

    /// Record that `page` was admitted into the frame store.
    fn record_admission(&mut self, _page: &P) {}

    /// Choose the resident page to evict for the fault at `step`.
    ///
    /// Returns `None` only if `frames` is empty.
    fn victim(&mut self, frames: &FrameStore<P>, step: usize) -> Option<P>;
}

/// The available eviction policies.
///
/// Parses case-insensitively (`fifo`, `lru`, `optimal`, `opt`, `min`).
///
/// # Example
/// ```
/// use pagesim::Policy;
///
/// let policy: Policy = "lru".parse().unwrap();
/// assert_eq!(policy, Policy::Lru);
/// assert_eq!(policy.to_string(), "LRU");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Policy {
    /// First-In-First-Out.
    Fifo,
    /// Least-Recently-Used.
    Lru,
    /// Belady's clairvoyant MIN.
    Optimal,
}

impl Policy {
    /// Every policy, in display order.
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Optimal];

    /// Build a fresh replacer for one run over `reference`.
    pub fn replacer<'a, P: Page + 'a>(&self, reference: &'a [P]) -> Box<dyn Replacer<P> + 'a> {
        match self {
            Policy::Fifo => Box::new(FifoReplacer::new()),
            Policy::Lru => Box::new(LruReplacer::new()),
            Policy::Optimal => Box::new(OptimalReplacer::new(reference)),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Optimal => "Optimal",
        };
        f.pad(name)
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "lru" => Ok(Policy::Lru),
            "optimal" | "opt" | "min" => Ok(Policy::Optimal),
            other => Err(Error::InvalidInput(format!(
                "unknown policy '{}' (expected fifo, lru or optimal)",
                other
            ))),
        }
    }
}
