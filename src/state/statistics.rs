// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search counters.
//!
//! One `u64` per [`Counters`] variant, held in the
//! [`SearchContext`](crate::context::SearchContext). The subset predicates
//! bump them as they branch and emit.

use strum::EnumCount;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

#[derive(Debug, EnumCountMacro, EnumIter, Display, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Combinations snapshotted into the output.
    EmittedSubsets,
    /// Branches that added a position to the working combination.
    Inclusions,
    /// Branches that left a position out.
    Exclusions,
}

#[derive(Debug, Default)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Add one to `counter`.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Current value of `counter`.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = Statistics::new();
        for counter in Counters::iter() {
            assert_eq!(stats.get(counter), 0, "{counter}");
        }
    }

    #[test]
    fn test_increment_is_per_counter() {
        let mut stats = Statistics::new();
        stats.increment(Counters::Inclusions);
        stats.increment(Counters::Inclusions);
        stats.increment(Counters::Exclusions);

        assert_eq!(stats.get(Counters::Inclusions), 2);
        assert_eq!(stats.get(Counters::Exclusions), 1);
        assert_eq!(stats.get(Counters::EmittedSubsets), 0);
    }
}
