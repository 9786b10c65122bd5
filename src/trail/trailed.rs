// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Typed handles onto trail slots.
//!
//! Writing through a [`Trailed`] handle logs the old value first, so
//! rewinding the trail undoes the write.

use super::Trail;
use std::marker::PhantomData;

/// Conversion between a trailed value and the raw u64 kept in a trail slot.
///
/// Only small `Copy` types whose every value round-trips through a u64 are
/// supported.
pub trait TrailValue: Copy {
    /// Encode the value for storage in the trail.
    fn to_bits(self) -> u64;

    /// Decode a value previously produced by `to_bits`.
    fn from_bits(bits: u64) -> Self;
}

/// A typed handle to a value stored on a trail.
///
/// `Trailed<T>` ensures that any modification is recorded in the trail for
/// later backtracking. The handle is only a slot number: values are read and
/// written through the `Trail` that registered it.
///
/// # Example
///
/// ```
/// use power_set::subset::IndexSet;
/// use power_set::trail::Trail;
///
/// let mut trail = Trail::new();
/// let chosen = trail.register(IndexSet::from_positions(&[1]));
///
/// let mark = trail.len();
/// chosen.set(&mut trail, IndexSet::from_positions(&[1, 4]));
/// assert_eq!(chosen.get(&trail).len(), 2);
///
/// trail.rewind_to(mark);
/// assert_eq!(chosen.get(&trail), IndexSet::from_positions(&[1])); // Value restored
/// ```
#[derive(Debug)]
pub struct Trailed<T> {
    slot: usize,
    _phantom: PhantomData<T>,
}

impl<T> Clone for Trailed<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Trailed<T> {}

impl<T: TrailValue> Trailed<T> {
    pub(crate) fn new(slot: usize) -> Self {
        Self {
            slot,
            _phantom: PhantomData,
        }
    }

    /// Get the current value.
    pub fn get(self, trail: &Trail) -> T {
        T::from_bits(trail.read(self.slot))
    }

    /// Overwrite the value; the old one goes on the trail.
    pub fn set(self, trail: &mut Trail, new_value: T) {
        trail.write(self.slot, new_value.to_bits());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subset::IndexSet;

    #[test]
    fn test_trailed_basic() {
        let mut trail = Trail::new();
        let chosen = trail.register(IndexSet::from_positions(&[0, 3]));

        assert_eq!(chosen.get(&trail).len(), 2);

        chosen.set(&mut trail, IndexSet::full(5));
        assert_eq!(chosen.get(&trail).len(), 5);
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn test_handles_are_independent() {
        let mut trail = Trail::new();
        let first = trail.register(IndexSet::empty());
        let second = trail.register(IndexSet::full(3));

        first.set(&mut trail, IndexSet::from_positions(&[2]));
        assert_eq!(first.get(&trail), IndexSet::from_positions(&[2]));
        assert_eq!(second.get(&trail), IndexSet::full(3));
    }

    #[test]
    fn test_trailed_index_set_restore() {
        let mut trail = Trail::new();
        let chosen = trail.register(IndexSet::empty());

        let mark = trail.len();
        let next = chosen.get(&trail).with(2);
        chosen.set(&mut trail, next);
        let next = chosen.get(&trail).with(5);
        chosen.set(&mut trail, next);
        assert_eq!(chosen.get(&trail), IndexSet::from_positions(&[2, 5]));

        trail.rewind_to(mark);
        assert!(chosen.get(&trail).is_empty());
    }
}
