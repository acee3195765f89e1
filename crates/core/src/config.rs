//! Configuration constants for pagesim.

/// Frame count used when none is given.
///
/// Three frames is the textbook size for the standard reference string and
/// small enough that every policy produces visible evictions.
pub const DEFAULT_FRAME_COUNT: usize = 3;

/// Frame counts compared when sweeping without an explicit list.
///
/// Includes the 3 → 4 step at which FIFO shows Belady's anomaly on the
/// classic reference string.
pub const DEFAULT_FRAME_SWEEP: [usize; 3] = [3, 4, 5];

/// Seed for the random reference string fixture.
pub const DEFAULT_FIXTURE_SEED: u64 = 42;

/// Length of the random reference string fixture.
pub const RANDOM_FIXTURE_LEN: usize = 20;

/// Largest page number in the random reference string fixture (inclusive).
pub const RANDOM_FIXTURE_MAX_PAGE: u32 = 9;

/// Log filter applied by the CLI when neither `-v` nor `RUST_LOG` is given.
pub const DEFAULT_LOG_FILTER: &str = "warn";
