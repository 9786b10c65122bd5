// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Full binary tree strategies.
//!
//! Both strategies walk the same perfect binary tree of depth n: the node at
//! depth i decides whether element i is included, and each of the 2^n leaves
//! is one subset. They differ only in how the working combination is kept:
//!
//! - [`full_binary_tree_recursion`] passes it down by value, cloning at each
//!   include branch, so no branch ever sees another's changes.
//! - [`full_binary_tree_search`] keeps it as a trailed [`IndexSet`] inside
//!   the search engine, which restores it by rewinding on every backtrack and
//!   uses an explicit stack instead of the call stack.
//!
//! [`IndexSet`]: crate::subset::IndexSet

use super::result_buffer;
use crate::context::SearchContext;
use crate::engine::EngineBuilder;
use crate::error::Result;
use crate::predicates::{EmitPredicate, FailPredicate, IncludeExcludePredicate};
use crate::state::Counters;
use tracing::trace;

/// Power set by recursive include/exclude branching.
///
/// Recursion depth equals the input length.
///
/// ```
/// use power_set::strategies::full_binary_tree_recursion;
///
/// let subsets = full_binary_tree_recursion(&[1, 2]).unwrap();
/// assert_eq!(subsets, vec![vec![1, 2], vec![1], vec![2], vec![]]);
/// ```
pub fn full_binary_tree_recursion<T: Clone>(elements: &[T]) -> Result<Vec<Vec<T>>> {
    let mut subsets = result_buffer(elements.len())?;
    include_or_exclude(elements, Vec::with_capacity(elements.len()), &mut subsets);
    Ok(subsets)
}

fn include_or_exclude<T: Clone>(remaining: &[T], chosen: Vec<T>, subsets: &mut Vec<Vec<T>>) {
    match remaining.split_first() {
        None => subsets.push(chosen),
        Some((element, rest)) => {
            let mut included = chosen.clone();
            included.push(element.clone());
            include_or_exclude(rest, included, subsets);
            include_or_exclude(rest, chosen, subsets);
        }
    }
}

/// Power set by include/exclude branching on the backtracking search engine.
///
/// Emits in the same order as [`full_binary_tree_recursion`].
///
/// ```
/// use power_set::strategies::full_binary_tree_search;
///
/// let subsets = full_binary_tree_search(&["x", "y"]).unwrap();
/// assert_eq!(subsets, vec![vec!["x", "y"], vec!["x"], vec!["y"], vec![]]);
/// ```
pub fn full_binary_tree_search<T: Clone>(elements: &[T]) -> Result<Vec<Vec<T>>> {
    let mut subsets = result_buffer(elements.len())?;
    let mut ctx = SearchContext::with_capacity(elements.len(), subsets.capacity())?;
    let mut engine = EngineBuilder::new()
        .add(Box::new(IncludeExcludePredicate))
        .add(Box::new(EmitPredicate))
        .terminal(Box::new(FailPredicate))
        .build();

    engine.search(&mut ctx);
    trace!(
        inclusions = ctx.statistics.get(Counters::Inclusions),
        exclusions = ctx.statistics.get(Counters::Exclusions),
        emitted = ctx.statistics.get(Counters::EmittedSubsets),
        "include/exclude search finished"
    );

    subsets.extend(ctx.take_emitted().into_iter().map(|set| set.pick(elements)));
    Ok(subsets)
}
