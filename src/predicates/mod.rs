// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicates for subset search programs.
//!
//! - `subsets`: `IncludeExcludePredicate` and `EmitPredicate`, which together
//!   walk the full include/exclude tree
//! - `FailPredicate`: the terminal that drives every run to exhaustion

pub mod subsets;

pub use subsets::{EmitPredicate, IncludeExcludePredicate};

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Always fails, so the engine backtracks into every remaining choice.
///
/// A program closed by `FailPredicate` runs until the search tree is
/// exhausted, and its results are whatever earlier predicates left in the
/// context.
///
/// ```
/// use power_set::context::SearchContext;
/// use power_set::engine::EngineBuilder;
/// use power_set::predicates::{FailPredicate, IncludeExcludePredicate};
/// use power_set::state::Counters;
///
/// let mut ctx = SearchContext::new(3);
/// let mut engine = EngineBuilder::new()
///     .add(Box::new(IncludeExcludePredicate))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// engine.search(&mut ctx);
/// // Two branches at each of the 1 + 2 + 4 inner nodes
/// assert_eq!(ctx.statistics.get(Counters::Inclusions), 7);
/// assert_eq!(ctx.statistics.get(Counters::Exclusions), 7);
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl TerminalPredicate for FailPredicate {}
