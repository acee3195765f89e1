//! Simulation drivers.
//!
//! # Components
//! - [`run`] / [`simulate`] - One policy, one frame count
//! - [`detect`] - Belady's anomaly across frame counts
//! - [`compare`] / [`sweep`] - Every policy at one or many frame counts

mod anomaly;
mod runner;
mod sweep;

pub use anomaly::{detect, fault_series, AnomalyReport, FrameSizeSeries};
pub use runner::{run, simulate, SimulationResult, StepOutcome};
pub use sweep::{compare, sweep, Comparison, FaultTable};
