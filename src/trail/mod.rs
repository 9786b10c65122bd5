// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the subset search engine.
//!
//! Every write to a trailed value first logs the old value. Backtracking
//! rewinds the log to an earlier length and writes each logged value back,
//! so restoring costs one step per undone change.
//!
//! The trail owns the storage for every trailed value: a [`Trailed`] handle
//! is only a typed slot number, which keeps handles `Copy` and lets a
//! predicate hold them without borrowing the context.

pub mod trailed;

pub use trailed::{TrailValue, Trailed};

/// Old value of a slot, pushed before the slot is overwritten.
#[derive(Debug, Clone, Copy)]
struct TrailEntry {
    /// Slot of the value being tracked
    slot: usize,
    /// The value before the change
    old_value: u64,
}

/// The undo log for one search.
///
/// Each `SearchContext` owns its own trail. A position to come back to is
/// just the current [`len`](Trail::len).
#[derive(Debug)]
pub struct Trail {
    /// Current value of every registered slot
    values: Vec<u64>,
    /// Undo log, oldest first
    entries: Vec<TrailEntry>,
    /// Entries allowed before the trail reports an overflow
    max_size: usize,
}

impl Trail {
    /// Default maximum trail size.
    ///
    /// A subset search records at most one entry per input position on any
    /// path, so this is far beyond what the power set strategies need.
    pub const DEFAULT_MAX_SIZE: usize = 16384;

    /// Create a new empty trail.
    pub fn new() -> Self {
        Self::with_max_size(Self::DEFAULT_MAX_SIZE)
    }

    /// Create a new empty trail that holds at most `max_size` entries.
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            values: Vec::new(),
            entries: Vec::with_capacity(max_size.min(64)),
            max_size,
        }
    }

    /// Allocate a slot for a new trailed value.
    ///
    /// Registration itself is not recorded: rewinding never removes a slot.
    pub fn register<T: TrailValue>(&mut self, initial_value: T) -> Trailed<T> {
        let slot = self.values.len();
        self.values.push(initial_value.to_bits());
        Trailed::new(slot)
    }

    /// Undo every change recorded after the trail had `len` entries.
    pub fn rewind_to(&mut self, len: usize) {
        while self.entries.len() > len {
            if let Some(entry) = self.entries.pop() {
                self.values[entry.slot] = entry.old_value;
            }
        }
    }

    /// Read the raw value of a slot.
    pub(crate) fn read(&self, slot: usize) -> u64 {
        self.values[slot]
    }

    /// Overwrite a slot, recording its old value.
    ///
    /// # Panics
    ///
    /// Panics if the trail exceeds its maximum size (indicates a runaway search).
    pub(crate) fn write(&mut self, slot: usize, new_value: u64) {
        if self.entries.len() >= self.max_size {
            panic!("Trail overflow: exceeded {} entries", self.max_size);
        }

        let old_value = self.values[slot];
        self.entries.push(TrailEntry { slot, old_value });
        self.values[slot] = new_value;
    }

    /// Number of changes that a full rewind would undo.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no change is recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}
