//! Simulated physical memory.
//!
//! # Components
//! - [`FrameStore`] - The resident set, bounded by a frame count
//! - [`replacer`] - Eviction policy implementations and [`Policy`]

mod frame_store;
pub mod replacer;

pub use frame_store::FrameStore;
pub use replacer::{FifoReplacer, LruReplacer, OptimalReplacer, Policy, Replacer};
