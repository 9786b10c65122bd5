// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context for subset enumeration.
//!
//! The SearchContext is the core data structure passed to every predicate. It
//! combines:
//! - The input length, fixed for the whole search
//! - Mutable search state with trail-based backtracking (the working
//!   combination)
//! - Append-only output (emitted combinations) and statistics, which are
//!   deliberately *not* trailed so they survive backtracking
//!
//! Each SearchContext is independent: nothing is shared between contexts, so
//! two searches never observe each other's state.

use crate::error::{PowerSetError, Result};
use crate::state::{Counters, Statistics};
use crate::subset::IndexSet;
use crate::trail::{Trail, Trailed};

/// Search context combining trailed and append-only state.
///
/// # Example
///
/// ```
/// use power_set::context::SearchContext;
///
/// let mut ctx = SearchContext::new(4);
/// let mark = ctx.trail.len();
/// ctx.include(1);
/// ctx.include(3);
/// ctx.emit();
///
/// ctx.trail.rewind_to(mark); // Working combination restored
/// assert!(ctx.chosen().is_empty());
/// assert_eq!(ctx.emitted()[0].bits(), 0b1010); // Snapshot kept
/// ```
#[derive(Debug)]
pub struct SearchContext {
    /// Number of input positions being enumerated
    len: usize,
    /// Trail for backtracking
    pub trail: Trail,
    /// Positions included on the current search path
    chosen: Trailed<IndexSet>,
    /// Snapshots of every emitted combination, in emission order
    emitted: Vec<IndexSet>,
    /// Counters incremented by predicates
    pub statistics: Statistics,
}

impl SearchContext {
    /// Create a new search context over positions `0..len`.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds [`IndexSet::CAPACITY`].
    pub fn new(len: usize) -> Self {
        Self::with_output(len, Vec::new())
    }

    /// Create a search context with room for `subsets` emitted combinations.
    ///
    /// Fails with [`PowerSetError::Allocation`] if that room cannot be
    /// reserved.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds [`IndexSet::CAPACITY`].
    pub fn with_capacity(len: usize, subsets: usize) -> Result<Self> {
        let mut emitted = Vec::new();
        emitted
            .try_reserve_exact(subsets)
            .map_err(|_| PowerSetError::Allocation { subsets })?;
        Ok(Self::with_output(len, emitted))
    }

    fn with_output(len: usize, emitted: Vec<IndexSet>) -> Self {
        assert!(
            len <= IndexSet::CAPACITY,
            "SearchContext supports at most {} positions, got {}",
            IndexSet::CAPACITY,
            len
        );
        let mut trail = Trail::new();
        let chosen = trail.register(IndexSet::empty());
        Self {
            len,
            trail,
            chosen,
            emitted,
            statistics: Statistics::new(),
        }
    }

    /// Number of input positions.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if there are no input positions.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The working combination on the current search path.
    pub fn chosen(&self) -> IndexSet {
        self.chosen.get(&self.trail)
    }

    /// Add `position` to the working combination (trailed).
    pub fn include(&mut self, position: usize) {
        debug_assert!(position < self.len);
        let extended = self.chosen().with(position);
        self.chosen.set(&mut self.trail, extended);
    }

    /// Snapshot the working combination into the output.
    pub fn emit(&mut self) {
        let snapshot = self.chosen();
        self.emitted.push(snapshot);
        self.statistics.increment(Counters::EmittedSubsets);
    }

    /// All combinations emitted so far.
    pub fn emitted(&self) -> &[IndexSet] {
        &self.emitted
    }

    /// Take the emitted combinations, leaving the output empty.
    pub fn take_emitted(&mut self) -> Vec<IndexSet> {
        std::mem::take(&mut self.emitted)
    }
}
