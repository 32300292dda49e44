//! A growable ordered sequence of owned strands.

use alloc::vec::Vec;
use core::slice;

use crate::{
    error::{Error, Result, reserve},
    strand::Strand,
};

/// Logical capacity of a freshly created vector.
const DEFAULT_CAPACITY: usize = 10;

/// A growable, ordered container of owned [`Strand`]s.
///
/// Capacity starts at 10 and doubles exactly when an insert finds the
/// vector full, so a run of pushes costs amortized O(1). Elements occupy
/// the index range `[0, len)` contiguously.
///
/// Insertion takes ownership; [`remove`](StrandVec::remove) gives it
/// back. Dropping the vector releases every contained strand (deep
/// release); [`drain`](StrandVec::drain) first hands every element to
/// the caller and leaves the container empty (shallow release).
///
/// Two vectors are equal when they hold byte-equal strands in the same
/// order; capacity is not part of equality.
#[derive(Debug)]
pub struct StrandVec {
    cap: usize,
    items: Vec<Strand>,
}

impl StrandVec {
    /// An empty vector with logical capacity 10. Infallible: the backing
    /// allocation is deferred until the first insert.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cap: DEFAULT_CAPACITY,
            items: Vec::new(),
        }
    }

    /// A vector of length 1 owning `strand`.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`] if backing storage cannot be obtained.
    pub fn from_single(strand: Strand) -> Result<Self> {
        let mut vec = Self::new();
        vec.push(strand)?;
        Ok(vec)
    }

    /// Appends `strand`, taking ownership of it.
    ///
    /// When the vector is full at insert time its capacity doubles
    /// first, reallocating the backing storage.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`] if backing storage cannot be obtained; the
    /// vector is unchanged in that case.
    pub fn push(&mut self, strand: Strand) -> Result<()> {
        if self.items.len() == self.cap {
            let grown = self.cap * 2;
            let additional = grown - self.items.len();
            reserve(&mut self.items, additional)?;
            self.cap = grown;
        } else if self.items.capacity() == self.items.len() {
            // First insert after new() or drain(): grow the backing
            // storage to the logical capacity.
            let additional = self.cap - self.items.len();
            reserve(&mut self.items, additional)?;
        }
        self.items.push(strand);
        Ok(())
    }

    /// The element at `index`, or `None` at or past the length.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Strand> {
        self.items.get(index)
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` when the vector holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current logical capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Index of the first element byte-equal to `strand`.
    #[must_use]
    pub fn find(&self, strand: &Strand) -> Option<usize> {
        self.items.iter().position(|s| s == strand)
    }

    /// Removes the element at `index`, returning ownership of it to the
    /// caller and shifting everything after it one slot left.
    ///
    /// # Errors
    ///
    /// [`Error::Index`] when `index >= self.len()`.
    pub fn remove(&mut self, index: usize) -> Result<Strand> {
        if index >= self.items.len() {
            return Err(Error::Index {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> slice::Iter<'_, Strand> {
        self.items.iter()
    }

    /// Shallow release: yields ownership of every element in order,
    /// leaving the container empty with its capacity intact.
    pub fn drain(&mut self) -> alloc::vec::Drain<'_, Strand> {
        self.items.drain(..)
    }
}

impl Default for StrandVec {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for StrandVec {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Eq for StrandVec {}

impl IntoIterator for StrandVec {
    type Item = Strand;
    type IntoIter = alloc::vec::IntoIter<Strand>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a StrandVec {
    type Item = &'a Strand;
    type IntoIter = slice::Iter<'a, Strand>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
