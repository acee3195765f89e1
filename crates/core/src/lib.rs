//! Core types and constants for pagesim.
//!
//! This crate provides the primitives shared by the simulator and its tools:
//!
//! # Types
//! - [`Page`] - Bound satisfied by anything usable as a page identifier
//! - [`PageId`] - Concrete page identifier used by the CLI and fixtures
//! - [`FaultStats`] - Fault/hit counters for one simulation run
//!
//! # Constants
//! - [`config`] - Default frame counts, fixture seed, log filter
//!
//! # Error Handling
//! - [`Error`] - Unified error type
//! - [`Result<T>`] - Convenient result alias
//!
//! # Example
//! ```
//! use pagesim_core::{parse_reference_string, PageId};
//!
//! let refs = parse_reference_string("7, 0, 1 2").unwrap();
//! assert_eq!(refs, vec![PageId::new(7), PageId::new(0), PageId::new(1), PageId::new(2)]);
//! ```

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{Error, Result};
pub use types::{parse_reference_string, FaultStats, Page, PageId};
