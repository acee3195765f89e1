//! Common types and utilities shared across pagesim.
//!
//! Re-exports the primitives from `pagesim-core`:
//! - Configuration constants
//! - Error types
//! - The [`Page`] bound and the [`PageId`] identifier

pub use pagesim_core::config;
pub use pagesim_core::error::{Error, Result};
pub use pagesim_core::{parse_reference_string, FaultStats, Page, PageId};
