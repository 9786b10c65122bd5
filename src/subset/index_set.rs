// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! IndexSet type for representing sets of input positions as bitsets.
//!
//! An IndexSet is a compact representation of one subset of an input
//! sequence, where bit i represents the presence of position i. Read as an
//! integer it is exactly the inclusion mask of the subset.
//!
//! # Examples
//!
//! ```
//! use power_set::subset::IndexSet;
//!
//! let mut set = IndexSet::empty();
//! set.insert(0);
//! set.insert(2);
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.bits(), 0b101);
//! assert_eq!(format!("{}", set), "{0,2}");
//!
//! // Positions select elements in ascending order
//! assert_eq!(set.pick(&['a', 'b', 'c']), vec!['a', 'c']);
//! ```

use crate::trail::TrailValue;
use std::fmt;

/// A set of input positions represented as a bitset.
///
/// Bit i (counting from LSB) is set if position i is in the set.
/// This provides O(1) insert, remove, and contains operations.
///
/// Uses u64 so a set fits in a single trail slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct IndexSet(u64);

impl IndexSet {
    /// Number of positions an IndexSet can hold.
    pub const CAPACITY: usize = u64::BITS as usize;

    /// Create an empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create a set containing every position in `0..len`.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds [`IndexSet::CAPACITY`].
    pub fn full(len: usize) -> Self {
        assert!(
            len <= Self::CAPACITY,
            "IndexSet holds at most {} positions, asked for {}",
            Self::CAPACITY,
            len
        );
        match len {
            Self::CAPACITY => Self(u64::MAX),
            _ => Self((1 << len) - 1),
        }
    }

    /// Create a set from a slice of positions.
    pub fn from_positions(positions: &[usize]) -> Self {
        positions.iter().copied().collect()
    }

    /// Create a set from a raw bit value (an inclusion mask).
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Check if the set contains a position.
    pub fn contains(self, position: usize) -> bool {
        position < Self::CAPACITY && (self.0 >> position) & 1 != 0
    }

    /// Insert a position into the set.
    pub fn insert(&mut self, position: usize) {
        debug_assert!(position < Self::CAPACITY);
        self.0 |= 1 << position;
    }

    /// Remove a position from the set.
    pub fn remove(&mut self, position: usize) {
        debug_assert!(position < Self::CAPACITY);
        self.0 &= !(1 << position);
    }

    /// Return a copy of this set with `position` added.
    pub fn with(mut self, position: usize) -> Self {
        self.insert(position);
        self
    }

    /// Get the number of positions in the set (population count).
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying bitset value.
    pub fn bits(self) -> u64 {
        self.0
    }

    /// Iterate over all positions in the set.
    ///
    /// Positions are yielded in ascending order (0, 1, 2, ...).
    pub fn iter(self) -> impl Iterator<Item = usize> {
        IndexSetIter { bits: self.0 }
    }

    /// Select the elements at the positions in this set, in ascending order.
    ///
    /// Every call returns a fresh vector, so the result never aliases the
    /// input or any other selection.
    ///
    /// # Panics
    ///
    /// Panics if the set contains a position beyond the end of `elements`.
    pub fn pick<T: Clone>(self, elements: &[T]) -> Vec<T> {
        let mut subset = Vec::with_capacity(self.len());
        subset.extend(self.iter().map(|position| elements[position].clone()));
        subset
    }
}

/// Iterator over positions in an IndexSet.
///
/// Clears the lowest set bit on each step, so it costs one step per member.
struct IndexSetIter {
    bits: u64,
}

impl Iterator for IndexSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let position = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl FromIterator<usize> for IndexSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::empty();
        for position in iter {
            set.insert(position);
        }
        set
    }
}

impl fmt::Display for IndexSet {
    /// Format a set as "{0,2,3}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, position) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", position)?;
        }
        write!(f, "}}")
    }
}

impl TrailValue for IndexSet {
    fn to_bits(self) -> u64 {
        self.0
    }

    fn from_bits(bits: u64) -> Self {
        Self(bits)
    }
}
