//! Canned and seeded-random reference strings.
//!
//! Nothing in the simulator depends on this module: fixtures are plain
//! `Vec<PageId>` values, treated exactly like any caller-supplied sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::config::{RANDOM_FIXTURE_LEN, RANDOM_FIXTURE_MAX_PAGE};
use crate::common::PageId;

/// A named reference string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub name: &'static str,
    pub pages: Vec<PageId>,
}

impl Fixture {
    fn new(name: &'static str, pages: impl IntoIterator<Item = u32>) -> Self {
        Self {
            name,
            pages: pages.into_iter().map(PageId::new).collect(),
        }
    }

    /// Lowercase, hyphenated name for command lines (`belady-s-test`).
    pub fn slug(&self) -> String {
        let mut slug = String::new();
        for c in self.name.chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c.to_ascii_lowercase());
            } else if !slug.ends_with('-') {
                slug.push('-');
            }
        }
        slug.trim_matches('-').to_string()
    }
}

/// The textbook reference string.
pub fn standard() -> Fixture {
    Fixture::new(
        "Standard Test",
        [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1],
    )
}

/// Pages 0 through 9, each once.
pub fn sequential() -> Fixture {
    Fixture::new("Sequential", 0..10)
}

/// Working sets that drift over time.
pub fn locality() -> Fixture {
    Fixture::new(
        "Locality-Based",
        [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5, 3, 4, 5, 6, 7, 6, 7, 8],
    )
}

/// Pages 1 through 5, cycled four times.
pub fn looping() -> Fixture {
    Fixture::new("Loop Pattern", (0..4).flat_map(|_| 1..=5))
}

/// FIFO faults 9 times with 3 frames but 10 times with 4.
pub fn belady() -> Fixture {
    Fixture::new("Belady's Test", [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5])
}

/// `len` pages drawn uniformly from `0..=max_page`.
///
/// The generator is seeded explicitly, so a seed always yields the same string.
pub fn random(seed: u64, len: usize, max_page: u32) -> Vec<PageId> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| PageId::new(rng.gen_range(0..=max_page)))
        .collect()
}

/// Every canned fixture.
pub fn canned() -> Vec<Fixture> {
    vec![standard(), sequential(), locality(), looping(), belady()]
}

/// Every canned fixture plus a random one generated from `seed`.
pub fn all(seed: u64) -> Vec<Fixture> {
    let mut fixtures = canned();
    fixtures.insert(
        2,
        Fixture {
            name: "Random",
            pages: random(seed, RANDOM_FIXTURE_LEN, RANDOM_FIXTURE_MAX_PAGE),
        },
    );
    fixtures
}

/// Look a fixture up by name or slug, ignoring case.
pub fn by_name(name: &str, seed: u64) -> Option<Fixture> {
    let wanted = name.trim();
    all(seed)
        .into_iter()
        .find(|f| f.name.eq_ignore_ascii_case(wanted) || f.slug() == wanted.to_ascii_lowercase())
}
