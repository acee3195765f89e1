//! FrameStore - the resident set of simulated physical memory.
//!
//! A [`FrameStore`] holds at most `capacity` distinct pages in the order they
//! were admitted. It enforces capacity and uniqueness; deciding *what* to
//! evict is left to a [`Replacer`](crate::memory::replacer::Replacer).

use std::collections::HashSet;

use crate::common::{Error, Page, Result};

/// The pages currently resident in memory.
///
/// # Ordering
/// Pages are kept in admission order (front = oldest). Evicting a page keeps
/// the relative order of the others, and new pages always enter at the back.
/// Policies rely on this order for deterministic tie-breaking.
///
/// # Example
/// ```
/// use pagesim::memory::FrameStore;
///
/// let mut frames = FrameStore::new(2).unwrap();
/// frames.insert(7).unwrap();
/// frames.insert(0).unwrap();
/// assert!(frames.is_full());
///
/// frames.evict(&7).unwrap();
/// frames.insert(1).unwrap();
/// assert_eq!(frames.snapshot(), vec![0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct FrameStore<P: Page> {
    /// Resident pages in admission order.
    pages: Vec<P>,

    /// Set for O(1) membership check.
    resident: HashSet<P>,

    /// Maximum number of resident pages (fixed at construction).
    capacity: usize,
}

impl<P: Page> FrameStore<P> {
    /// Create an empty store with room for `capacity` pages.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }

        Ok(Self {
            pages: Vec::with_capacity(capacity),
            resident: HashSet::with_capacity(capacity),
            capacity,
        })
    }

    /// Check whether `page` is resident.
    #[inline]
    pub fn contains(&self, page: &P) -> bool {
        self.resident.contains(page)
    }

    /// Number of resident pages.
    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Check if no page is resident.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Maximum number of resident pages.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Check if another insert would exceed capacity.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.pages.len() == self.capacity
    }

    /// Admit `page` at the back of the store.
    ///
    /// # Errors
    /// - `Error::CapacityExceeded` if the store is full
    /// - `Error::AlreadyResident` if `page` is already resident
    pub fn insert(&mut self, page: P) -> Result<()> {
        if self.is_full() {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        if self.resident.contains(&page) {
            return Err(Error::AlreadyResident(format!("{:?}", page)));
        }

        self.resident.insert(page.clone());
        self.pages.push(page);
        Ok(())
    }

    /// Remove a specific resident page.
    ///
    /// # Errors
    /// - `Error::NotResident` if `page` is not resident
    pub fn evict(&mut self, page: &P) -> Result<()> {
        if !self.resident.remove(page) {
            return Err(Error::NotResident(format!("{:?}", page)));
        }

        // Vec::remove shifts the tail left, keeping admission order intact.
        if let Some(pos) = self.pages.iter().position(|p| p == page) {
            self.pages.remove(pos);
        }
        Ok(())
    }

    /// Iterate over resident pages, oldest admission first.
    pub fn iter(&self) -> impl Iterator<Item = &P> + '_ {
        self.pages.iter()
    }

    /// The earliest-admitted resident page.
    pub fn oldest(&self) -> Option<&P> {
        self.pages.first()
    }

    /// Copy the current contents, oldest admission first.
    ///
    /// The copy is independent: later changes to the store never show up in it.
    pub fn snapshot(&self) -> Vec<P> {
        self.pages.clone()
    }
}
