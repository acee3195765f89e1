//! Core type definitions for pagesim.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::error::{Error, Result};

// ============================================================================
// PAGE BOUND
// ============================================================================

/// Anything that can be simulated as a page.
///
/// The simulator never looks inside a page: it only compares pages, hashes
/// them for lookup tables, and copies them into history snapshots.
/// `Debug` is required so contract violations can name the offending page.
///
/// Blanket-implemented, so `u32`, `char`, `&str`, [`PageId`] and friends all
/// work out of the box.
pub trait Page: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> Page for T {}

// ============================================================================
// PAGE IDENTIFIERS
// ============================================================================

/// Identifies a virtual page in a reference string.
///
/// Displays as the bare number so traces read like `[7, 0, 1]`.
///
/// # Example
/// ```
/// use pagesim_core::PageId;
///
/// let page: PageId = "42".parse().unwrap();
/// assert_eq!(page, PageId::new(42));
/// assert_eq!(page.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }
}

impl From<u32> for PageId {
    fn from(id: u32) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PageId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u32>()
            .map(PageId)
            .map_err(|_| Error::InvalidInput(format!("'{}' is not a page number", s.trim())))
    }
}

/// Parse a reference string such as `"7, 0, 1 2"`.
///
/// Tokens may be separated by commas, whitespace, or both. Fails on the first
/// token that is not a non-negative integer.
pub fn parse_reference_string(input: &str) -> Result<Vec<PageId>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

// ============================================================================
// FAULT STATISTICS
// ============================================================================

/// Fault and eviction counts for one simulation run.
///
/// Rates are fractions in `0.0..=1.0`; an empty reference string reports
/// `0.0` for both instead of dividing by zero.
///
/// # Example
/// ```
/// use pagesim_core::FaultStats;
///
/// let stats = FaultStats { references: 12, faults: 9, evictions: 6 };
/// assert_eq!(stats.hits(), 3);
/// assert_eq!(stats.fault_rate(), 0.75);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaultStats {
    /// Number of references processed.
    pub references: usize,

    /// Number of references that were not resident.
    pub faults: usize,

    /// Number of faults that had to evict a resident page.
    pub evictions: usize,
}

impl FaultStats {
    /// Number of references that were already resident.
    ///
    /// Saturates at 0 for hand-built stats with more faults than references.
    pub fn hits(&self) -> usize {
        self.references.saturating_sub(self.faults)
    }

    /// Fraction of references that faulted.
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.faults as f64 / self.references as f64
        }
    }

    /// Fraction of references that hit.
    pub fn hit_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hits() as f64 / self.references as f64
        }
    }
}

impl fmt::Display for FaultStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ faults: {}, hits: {}, evictions: {}, fault_rate: {:.2}% }}",
            self.faults,
            self.hits(),
            self.evictions,
            self.fault_rate() * 100.0
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
