// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The catalogue of power set strategies.
//!
//! Nine interchangeable ways to enumerate every subset of a sequence, in four
//! families:
//!
//! | Family          | Strategies                                                    |
//! |-----------------|---------------------------------------------------------------|
//! | Full binary tree| [`full_binary_tree_recursion`], [`full_binary_tree_search`]   |
//! | Doubling        | [`doubling_loop`], [`doubling_fold`], [`doubling_recursion`]  |
//! | Binary counter  | [`binary_counter_shift`], [`binary_counter_digits`]           |
//! | Tree traversal  | [`multi_branch_depth_first`], [`breadth_first_queue`]         |
//!
//! Every strategy returns exactly 2^n subsets for an n-element input. Within a
//! subset, elements keep their input order. The order of the subsets
//! themselves differs between strategies and is not part of the contract.
//! Equal values at different positions are different elements, so
//! `[7, 7]` has four subsets: `[]`, `[7]`, `[7]` and `[7, 7]`.
//!
//! # Example
//!
//! ```
//! use power_set::Strategy;
//!
//! let subsets = Strategy::DoublingLoop.power_set(&['a', 'b']).unwrap();
//! assert_eq!(subsets, vec![vec![], vec!['a'], vec!['b'], vec!['a', 'b']]);
//!
//! for strategy in Strategy::all() {
//!     assert_eq!(strategy.power_set(&[1, 2, 3]).unwrap().len(), 8);
//! }
//! ```

pub mod breadth_first;
pub mod counter;
pub mod depth_first;
pub mod doubling;
pub mod full_tree;

pub use breadth_first::{breadth_first_queue, ResumeNode};
pub use counter::{binary_counter_digits, binary_counter_shift};
pub use depth_first::multi_branch_depth_first;
pub use doubling::{doubling_fold, doubling_loop, doubling_recursion};
pub use full_tree::{full_binary_tree_recursion, full_binary_tree_search};

use crate::error::{PowerSetError, Result};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};
use tracing::debug;

/// Largest input whose power set size fits in a `usize`.
pub const MAX_ELEMENTS: usize = (usize::BITS - 1) as usize;

/// Number of subsets of a `len`-element sequence, or an error if 2^len is
/// not addressable.
///
/// ```
/// use power_set::strategies::{subset_count, MAX_ELEMENTS};
///
/// assert_eq!(subset_count(0).unwrap(), 1);
/// assert_eq!(subset_count(20).unwrap(), 1_048_576);
/// assert!(subset_count(MAX_ELEMENTS + 1).is_err());
/// ```
pub fn subset_count(len: usize) -> Result<usize> {
    if len > MAX_ELEMENTS {
        return Err(PowerSetError::TooManyElements {
            len,
            max: MAX_ELEMENTS,
        });
    }
    Ok(1 << len)
}

/// Reserve the result vector for the power set of a `len`-element sequence.
///
/// Fails before any enumeration work if the result cannot be held.
pub(crate) fn result_buffer<S>(len: usize) -> Result<Vec<S>> {
    let subsets = subset_count(len)?;
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(subsets)
        .map_err(|_| PowerSetError::Allocation { subsets })?;
    Ok(buffer)
}

/// Algorithmic family a strategy belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Family {
    /// Include/exclude branching per element; 2^n leaves.
    FullBinaryTree,
    /// Start from `[[]]` and double the result once per element.
    Doubling,
    /// Read each integer in `0..2^n` as an inclusion mask.
    BinaryCounter,
    /// Multi-branch depth-first and breadth-first walks of increasing index chains.
    TreeTraversal,
}

/// One of the nine power set strategies.
///
/// Names are kebab-case, both for display and for parsing:
///
/// ```
/// use power_set::Strategy;
///
/// let strategy = Strategy::parse("doubling-fold").unwrap();
/// assert_eq!(strategy, Strategy::DoublingFold);
/// assert_eq!(strategy.to_string(), "doubling-fold");
/// assert!(Strategy::parse("bogosort").is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Strategy {
    FullBinaryTreeRecursion,
    FullBinaryTreeSearch,
    DoublingLoop,
    DoublingFold,
    DoublingRecursion,
    BinaryCounterShift,
    BinaryCounterDigits,
    MultiBranchDepthFirst,
    BreadthFirstQueue,
}

impl Strategy {
    /// Every strategy, in catalogue order.
    pub fn all() -> impl Iterator<Item = Strategy> {
        Strategy::iter()
    }

    /// Look up a strategy by its kebab-case name.
    pub fn parse(name: &str) -> Result<Self> {
        name.parse()
            .map_err(|_| PowerSetError::UnknownStrategy(name.to_string()))
    }

    /// The kebab-case name of this strategy.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Algorithmic family this strategy belongs to.
    pub fn family(self) -> Family {
        match self {
            Strategy::FullBinaryTreeRecursion | Strategy::FullBinaryTreeSearch => {
                Family::FullBinaryTree
            }
            Strategy::DoublingLoop | Strategy::DoublingFold | Strategy::DoublingRecursion => {
                Family::Doubling
            }
            Strategy::BinaryCounterShift | Strategy::BinaryCounterDigits => Family::BinaryCounter,
            Strategy::MultiBranchDepthFirst | Strategy::BreadthFirstQueue => Family::TreeTraversal,
        }
    }

    /// Compute the power set of `elements` with this strategy.
    pub fn power_set<T: Clone>(self, elements: &[T]) -> Result<Vec<Vec<T>>> {
        let subsets = match self {
            Strategy::FullBinaryTreeRecursion => full_binary_tree_recursion(elements),
            Strategy::FullBinaryTreeSearch => full_binary_tree_search(elements),
            Strategy::DoublingLoop => doubling_loop(elements),
            Strategy::DoublingFold => doubling_fold(elements),
            Strategy::DoublingRecursion => doubling_recursion(elements),
            Strategy::BinaryCounterShift => binary_counter_shift(elements),
            Strategy::BinaryCounterDigits => binary_counter_digits(elements),
            Strategy::MultiBranchDepthFirst => multi_branch_depth_first(elements),
            Strategy::BreadthFirstQueue => breadth_first_queue(elements),
        }?;
        debug!(
            strategy = self.name(),
            len = elements.len(),
            subsets = subsets.len(),
            "power set computed"
        );
        Ok(subsets)
    }

    /// Compute the power set of the positions `0..len`.
    ///
    /// Each subset lists positions in ascending order. Unlike
    /// [`Strategy::power_set`] on a sequence with repeated values, two index
    /// subsets are equal only if they select the same positions.
    ///
    /// ```
    /// use power_set::Strategy;
    ///
    /// let mut subsets = Strategy::BreadthFirstQueue.index_subsets(2).unwrap();
    /// subsets.sort();
    /// assert_eq!(subsets, vec![vec![], vec![0], vec![0, 1], vec![1]]);
    /// ```
    pub fn index_subsets(self, len: usize) -> Result<Vec<Vec<usize>>> {
        subset_count(len)?;
        let positions: Vec<usize> = (0..len).collect();
        self.power_set(&positions)
    }
}
