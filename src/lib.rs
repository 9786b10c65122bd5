// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Power set enumeration, nine ways.
//!
//! Computes the set of all subsets of a sequence with nine interchangeable
//! strategies from four algorithmic families: full binary tree walks,
//! doubling, binary counting, and depth-/breadth-first traversal of
//! increasing index chains. All strategies are pure functions: each call
//! allocates its own buffers and returns owned, independent subsets.
//!
//! # Example
//!
//! ```
//! use power_set::Strategy;
//! use std::collections::BTreeSet;
//!
//! let expected: BTreeSet<Vec<u8>> =
//!     [vec![], vec![1], vec![2], vec![1, 2]].into_iter().collect();
//!
//! for strategy in Strategy::all() {
//!     let subsets: BTreeSet<Vec<u8>> = strategy.power_set(&[1, 2]).unwrap().into_iter().collect();
//!     assert_eq!(subsets, expected);
//! }
//! ```
//!
//! # Architecture
//!
//! - `strategies`: the nine strategies and the [`Strategy`] catalogue
//! - `subset`: [`IndexSet`](subset::IndexSet), a bitset of input positions
//! - `engine`, `predicates`, `context`, `trail`, `state`: a small
//!   backtracking search engine. Predicates run in sequence on an explicit
//!   stack; state changes go through a trail so backtracking restores them.
//!   The `full-binary-tree-search` strategy runs on it.
//! - `bench`: the timing harness behind the `power-set-bench` binary
//!
//! # Limits
//!
//! A power set of n elements has 2^n members. Inputs longer than
//! [`MAX_ELEMENTS`](strategies::MAX_ELEMENTS) are rejected up front, and a
//! result too large to reserve is reported as an error instead of aborting.
//! In practice memory runs out long before either limit: 2^25 subsets of
//! small elements already take gigabytes.

pub mod bench;
pub mod context;
pub mod engine;
pub mod error;
pub mod predicates;
pub mod state;
pub mod strategies;
pub mod subset;
pub mod trail;

// Re-export commonly used types
pub use context::SearchContext;
pub use engine::{EngineBuilder, Predicate, PredicateResult, SearchEngine};
pub use error::{PowerSetError, Result};
pub use strategies::{subset_count, Family, Strategy, MAX_ELEMENTS};
pub use trail::Trail;
