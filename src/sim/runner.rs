//! Simulation runner - drives a reference string through one policy.
//!
//! [`run`] is the entry point: it validates the frame count, builds the
//! policy's replacer and hands off to [`simulate`], which works with any
//! [`Replacer`] implementation.

use log::{debug, trace};

use crate::common::{Error, FaultStats, Page, Result};
use crate::memory::{FrameStore, Policy, Replacer};

/// What happened at one position of the reference string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome<P: Page> {
    /// The referenced page.
    pub page: P,

    /// Whether the page was absent from the frame store.
    pub fault: bool,

    /// The page evicted to make room, if the store was full.
    pub evicted: Option<P>,
}

/// The outcome of one simulation run.
///
/// # Invariants
/// - `history.len() == steps.len() + 1`
/// - `history[i]` is the frame store *before* reference `i`; the last entry is
///   the store after the final reference
/// - `fault_count <= steps.len()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult<P: Page> {
    /// The policy that produced this result.
    pub policy: Policy,

    /// Number of frames simulated.
    pub capacity: usize,

    /// Number of references that faulted.
    pub fault_count: usize,

    /// Frame store contents before each reference, plus the final state.
    pub history: Vec<Vec<P>>,

    /// Per-reference outcome.
    pub steps: Vec<StepOutcome<P>>,
}

impl<P: Page> SimulationResult<P> {
    /// Number of references simulated.
    pub fn reference_len(&self) -> usize {
        self.steps.len()
    }

    /// Number of references that hit.
    pub fn hit_count(&self) -> usize {
        self.steps.len().saturating_sub(self.fault_count)
    }

    /// Pages evicted, in eviction order.
    pub fn evictions(&self) -> impl Iterator<Item = &P> + '_ {
        self.steps.iter().filter_map(|step| step.evicted.as_ref())
    }

    /// Frame store contents after the last reference.
    pub fn final_frames(&self) -> &[P] {
        self.history.last().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Summary counters for this run.
    pub fn stats(&self) -> FaultStats {
        FaultStats {
            references: self.steps.len(),
            faults: self.fault_count,
            evictions: self.evictions().count(),
        }
    }
}

/// Run `reference` through `policy` with `capacity` frames.
///
/// Pure: no printing, no shared state. Identical inputs give identical results.
///
/// # Errors
/// - `Error::InvalidCapacity` if `capacity` is 0
///
/// # Example
/// ```
/// use pagesim::{run, Policy};
///
/// let result = run(Policy::Fifo, &[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5], 3).unwrap();
/// assert_eq!(result.fault_count, 9);
/// assert_eq!(result.history.len(), 13);
/// ```
pub fn run<P: Page>(
    policy: Policy,
    reference: &[P],
    capacity: usize,
) -> Result<SimulationResult<P>> {
    if capacity == 0 {
        return Err(Error::InvalidCapacity(capacity));
    }

    let mut replacer = policy.replacer(reference);
    simulate(replacer.as_mut(), policy, reference, capacity)
}

/// Run `reference` through an existing `replacer`.
///
/// `policy` only labels the result. The replacer must be fresh: state left
/// over from another run changes its decisions.
///
/// # Errors
/// - `Error::InvalidCapacity` if `capacity` is 0
/// - Frame store errors if the replacer picks a page that is not resident
pub fn simulate<P, R>(
    replacer: &mut R,
    policy: Policy,
    reference: &[P],
    capacity: usize,
) -> Result<SimulationResult<P>>
where
    P: Page,
    R: Replacer<P> + ?Sized,
{
    let mut frames = FrameStore::new(capacity)?;
    let mut history = Vec::with_capacity(reference.len() + 1);
    let mut steps = Vec::with_capacity(reference.len());
    let mut fault_count = 0;

    for (step, page) in reference.iter().enumerate() {
        history.push(frames.snapshot());
        replacer.record_access(page, step);

        if frames.contains(page) {
            trace!("{} step {}: hit {:?}", policy, step, page);
            steps.push(StepOutcome {
                page: page.clone(),
                fault: false,
                evicted: None,
            });
            continue;
        }

        fault_count += 1;
        let evicted = if frames.is_full() {
            let victim = replacer
                .victim(&frames, step)
                .ok_or(Error::CapacityExceeded { capacity })?;
            frames.evict(&victim)?;
            trace!("{} step {}: fault {:?}, evicted {:?}", policy, step, page, victim);
            Some(victim)
        } else {
            trace!("{} step {}: fault {:?}", policy, step, page);
            None
        };

        frames.insert(page.clone())?;
        replacer.record_admission(page);

        steps.push(StepOutcome {
            page: page.clone(),
            fault: true,
            evicted,
        });
    }

    history.push(frames.snapshot());

    debug!(
        "{}: {} references, {} frames, {} faults",
        policy,
        reference.len(),
        capacity,
        fault_count
    );

    Ok(SimulationResult {
        policy,
        capacity,
        fault_count,
        history,
        steps,
    })
}
