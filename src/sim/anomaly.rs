//! Belady's anomaly detection across frame counts.

use std::fmt;

use log::debug;

use crate::common::{Error, Page, Result};
use crate::memory::Policy;
use crate::sim::runner::run;

/// A frame count increase that increased the fault count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnomalyReport {
    /// Index of `to_capacity` in the capacities that were compared.
    pub at_index: usize,

    /// The smaller frame count.
    pub from_capacity: usize,

    /// The larger frame count, the next one compared after `from_capacity`.
    pub to_capacity: usize,

    /// Faults with `from_capacity` frames.
    pub from_faults: usize,

    /// Faults with `to_capacity` frames; always greater than `from_faults`.
    pub to_faults: usize,
}

impl fmt::Display for AnomalyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "increasing frames from {} to {} increased page faults from {} to {}",
            self.from_capacity, self.to_capacity, self.from_faults, self.to_faults
        )
    }
}

/// Fault counts of one policy over ascending frame counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSizeSeries {
    pub policy: Policy,

    /// `(capacity, fault_count)` pairs, capacities strictly ascending.
    pub points: Vec<(usize, usize)>,
}

impl FrameSizeSeries {
    /// Every consecutive pair whose fault count went up.
    pub fn anomalies(&self) -> Vec<AnomalyReport> {
        self.points
            .windows(2)
            .enumerate()
            .filter(|(_, pair)| pair[1].1 > pair[0].1)
            .map(|(i, pair)| AnomalyReport {
                at_index: i + 1,
                from_capacity: pair[0].0,
                to_capacity: pair[1].0,
                from_faults: pair[0].1,
                to_faults: pair[1].1,
            })
            .collect()
    }

    /// Check if the fault count never goes up as frames are added.
    pub fn is_monotone(&self) -> bool {
        self.points.windows(2).all(|pair| pair[1].1 <= pair[0].1)
    }
}

/// Validate frame counts for a cross-capacity comparison.
///
/// # Errors
/// - `Error::InvalidInput` if `capacities` is empty or not strictly ascending
/// - `Error::InvalidCapacity` if any entry is 0
pub(crate) fn validate_capacities(capacities: &[usize]) -> Result<()> {
    if capacities.is_empty() {
        return Err(Error::InvalidInput(
            "at least one frame count is required".to_string(),
        ));
    }
    if let Some(pair) = capacities.windows(2).find(|pair| pair[1] <= pair[0]) {
        return Err(Error::InvalidInput(format!(
            "frame counts must be strictly ascending, got {} after {}",
            pair[1], pair[0]
        )));
    }
    if let Some(&zero) = capacities.iter().find(|&&c| c == 0) {
        return Err(Error::InvalidCapacity(zero));
    }
    Ok(())
}

/// Run `policy` once per frame count and collect the fault counts.
///
/// # Errors
/// Same as [`detect`].
pub fn fault_series<P: Page>(
    policy: Policy,
    reference: &[P],
    capacities: &[usize],
) -> Result<FrameSizeSeries> {
    validate_capacities(capacities)?;

    let points = capacities
        .iter()
        .map(|&capacity| -> Result<(usize, usize)> {
            Ok((capacity, run(policy, reference, capacity)?.fault_count))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(FrameSizeSeries { policy, points })
}

/// Find every step up in `capacities` that increases the fault count.
///
/// Each frame count is simulated independently from scratch.
///
/// # Errors
/// - `Error::InvalidInput` if `capacities` is empty or not strictly ascending
/// - `Error::InvalidCapacity` if any frame count is 0
///
/// # Example
/// ```
/// use pagesim::{detect, Policy};
///
/// let reference = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];
/// let reports = detect(Policy::Fifo, &reference, &[3, 4]).unwrap();
///
/// assert_eq!(reports.len(), 1);
/// assert_eq!((reports[0].from_faults, reports[0].to_faults), (9, 10));
/// ```
pub fn detect<P: Page>(
    policy: Policy,
    reference: &[P],
    capacities: &[usize],
) -> Result<Vec<AnomalyReport>> {
    let anomalies = fault_series(policy, reference, capacities)?.anomalies();

    for report in &anomalies {
        debug!("Belady's anomaly in {}: {}", policy, report);
    }
    Ok(anomalies)
}
