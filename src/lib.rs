//! pagesim - A page replacement simulator with swappable eviction policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          Tools (report, fixtures, bin/pagesim)           │   │
//! │  │      Text traces, comparison tables, canned strings      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                  Simulation (sim/)                       │   │
//! │  │       run → detect (Belady's anomaly) → sweep/compare    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │            Memory (memory/)  [Runtime Swappable]        │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │     Eviction Policies: FIFO | LRU | Optimal      │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │                      FrameStore                          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (Page, PageId, Error, config)
//! - [`memory`] - Frame store and eviction policies
//! - [`sim`] - Simulation runner, anomaly detection, sweeps
//! - [`report`] - Plain-text traces and tables
//! - [`fixtures`] - Canned and seeded-random reference strings
//!
//! # Quick Start
//! ```
//! use pagesim::{detect, run, Policy};
//!
//! let reference = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];
//!
//! let fifo = run(Policy::Fifo, &reference, 3).unwrap();
//! let optimal = run(Policy::Optimal, &reference, 3).unwrap();
//! assert!(optimal.fault_count <= fifo.fault_count);
//!
//! // FIFO gets worse with a fourth frame.
//! let anomalies = detect(Policy::Fifo, &reference, &[3, 4]).unwrap();
//! assert_eq!(anomalies.len(), 1);
//! ```

// Core modules
pub mod common;
pub mod memory;
pub mod sim;

// Tools built on the core
pub mod fixtures;
pub mod report;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, FaultStats, Page, PageId, Result};

pub use memory::{FrameStore, Policy, Replacer};
pub use sim::{
    compare, detect, fault_series, run, simulate, sweep, AnomalyReport, Comparison, FaultTable,
    FrameSizeSeries, SimulationResult, StepOutcome,
};
