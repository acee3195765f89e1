//! Policy comparisons at one frame count and across many.
//!
//! Every (capacity, policy) run is independent, so [`sweep`] splits them into
//! one chunk per available core, runs the chunks on scoped threads and gathers
//! fault counts into a shared table.

use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use std::thread;

use log::debug;
use parking_lot::Mutex;

use crate::common::{Error, Page, Result};
use crate::memory::Policy;
use crate::sim::anomaly::{validate_capacities, AnomalyReport, FrameSizeSeries};
use crate::sim::runner::{run, SimulationResult};

/// All policies run over the same reference string and frame count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison<P: Page> {
    pub capacity: usize,

    /// One result per policy, in [`Policy::ALL`] order.
    pub results: Vec<SimulationResult<P>>,
}

impl<P: Page> Comparison<P> {
    /// The result for `policy`.
    pub fn result(&self, policy: Policy) -> Option<&SimulationResult<P>> {
        self.results.iter().find(|r| r.policy == policy)
    }

    /// Policy -> fault count.
    pub fn fault_counts(&self) -> BTreeMap<Policy, usize> {
        self.results
            .iter()
            .map(|r| (r.policy, r.fault_count))
            .collect()
    }
}

/// Run every policy over `reference` with `capacity` frames.
///
/// # Errors
/// - `Error::InvalidCapacity` if `capacity` is 0
pub fn compare<P: Page>(reference: &[P], capacity: usize) -> Result<Comparison<P>> {
    let results = Policy::ALL
        .iter()
        .map(|&policy| run(policy, reference, capacity))
        .collect::<Result<Vec<_>>>()?;

    Ok(Comparison { capacity, results })
}

/// Fault counts indexed by capacity, then policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaultTable {
    rows: BTreeMap<usize, BTreeMap<Policy, usize>>,
}

impl FaultTable {
    /// Fault count of `policy` at `capacity`, if it was simulated.
    pub fn faults(&self, capacity: usize, policy: Policy) -> Option<usize> {
        self.rows.get(&capacity)?.get(&policy).copied()
    }

    /// Simulated capacities, ascending.
    pub fn capacities(&self) -> Vec<usize> {
        self.rows.keys().copied().collect()
    }

    /// Simulated policies, in [`Policy::ALL`] order.
    pub fn policies(&self) -> Vec<Policy> {
        let mut policies: Vec<Policy> = self
            .rows
            .values()
            .flat_map(|row| row.keys().copied())
            .collect();
        policies.sort();
        policies.dedup();
        policies
    }

    /// Capacity -> (policy -> fault count).
    pub fn rows(&self) -> &BTreeMap<usize, BTreeMap<Policy, usize>> {
        &self.rows
    }

    /// Fault counts of `policy` by ascending capacity.
    pub fn series(&self, policy: Policy) -> FrameSizeSeries {
        let points = self
            .rows
            .iter()
            .filter_map(|(&capacity, row)| row.get(&policy).map(|&faults| (capacity, faults)))
            .collect();

        FrameSizeSeries { policy, points }
    }

    /// Belady's anomalies of `policy` in this table.
    pub fn anomalies(&self, policy: Policy) -> Vec<AnomalyReport> {
        self.series(policy).anomalies()
    }

    fn record(&mut self, capacity: usize, policy: Policy, faults: usize) {
        self.rows.entry(capacity).or_default().insert(policy, faults);
    }
}

/// Run every policy in `policies` at every frame count in `capacities`.
///
/// Runs execute in parallel on at most one thread per available core; the
/// table is the same regardless of scheduling.
///
/// # Errors
/// - `Error::InvalidInput` if `policies` is empty, or `capacities` is empty or
///   not strictly ascending
/// - `Error::InvalidCapacity` if any frame count is 0
///
/// # Example
/// ```
/// use pagesim::{sweep, Policy};
///
/// let reference = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];
/// let table = sweep(&reference, &[3, 4], &Policy::ALL).unwrap();
///
/// assert_eq!(table.faults(4, Policy::Fifo), Some(10));
/// assert_eq!(table.anomalies(Policy::Fifo).len(), 1);
/// ```
pub fn sweep<P: Page + Sync>(
    reference: &[P],
    capacities: &[usize],
    policies: &[Policy],
) -> Result<FaultTable> {
    validate_capacities(capacities)?;
    if policies.is_empty() {
        return Err(Error::InvalidInput(
            "at least one policy is required".to_string(),
        ));
    }

    let pairs: Vec<(usize, Policy)> = capacities
        .iter()
        .flat_map(|&capacity| policies.iter().map(move |&policy| (capacity, policy)))
        .collect();
    let workers = thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
        .min(pairs.len());
    let chunk_size = pairs.len().div_ceil(workers);

    let table = Mutex::new(FaultTable::default());

    thread::scope(|s| {
        let handles: Vec<_> = pairs
            .chunks(chunk_size)
            .map(|chunk| {
                let table = &table;
                s.spawn(move || -> Result<()> {
                    let faults = chunk
                        .iter()
                        .map(|&(capacity, policy)| -> Result<(usize, Policy, usize)> {
                            Ok((capacity, policy, run(policy, reference, capacity)?.fault_count))
                        })
                        .collect::<Result<Vec<_>>>()?;

                    let mut table = table.lock();
                    for (capacity, policy, count) in faults {
                        table.record(capacity, policy, count);
                    }
                    Ok(())
                })
            })
            .collect();

        handles.into_iter().try_for_each(|handle| match handle.join() {
            Ok(result) => result,
            Err(panic) => std::panic::resume_unwind(panic),
        })
    })?;

    let table = table.into_inner();
    debug!(
        "Swept {} policies over {} frame counts",
        policies.len(),
        capacities.len()
    );
    Ok(table)
}
