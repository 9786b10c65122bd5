// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The step interface of a search program.
//!
//! A program is a sequence of predicates. Each one inspects or extends the
//! working combination held in the [`SearchContext`] and tells the engine
//! where to go next.
//!
//! # Example
//!
//! A predicate that only lets combinations containing position 0 through:
//!
//! ```
//! use power_set::context::SearchContext;
//! use power_set::engine::{Predicate, PredicateResult};
//!
//! #[derive(Debug)]
//! struct RequiresFirst;
//!
//! impl Predicate for RequiresFirst {
//!     fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
//!         if ctx.chosen().contains(0) {
//!             PredicateResult::Success
//!         } else {
//!             PredicateResult::Failure
//!         }
//!     }
//! }
//!
//! let mut ctx = SearchContext::new(2);
//! assert_eq!(RequiresFirst.try_pred(&mut ctx, 0), PredicateResult::Failure);
//! ctx.include(0);
//! assert_eq!(RequiresFirst.try_pred(&mut ctx, 0), PredicateResult::Success);
//! ```

use crate::context::SearchContext;
use std::fmt::Debug;

/// What the engine should do after a predicate runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Continue with the next predicate of the program.
    Success,

    /// Run this predicate again with the round number increased by one.
    /// Lets one predicate handle every position in turn.
    SuccessSamePredicate,

    /// Dead end: backtrack to the most recent untried choice.
    Failure,

    /// Offer `n` alternatives, explored by `retry_pred(round, 0..n)`.
    Choices(usize),
}

/// Marker for predicates allowed to close a program.
///
/// A terminal predicate never returns `Success`, so the engine can never run
/// past the end of the program. [`EngineBuilder::terminal`] accepts only
/// these.
///
/// [`EngineBuilder::terminal`]: crate::engine::EngineBuilder::terminal
pub trait TerminalPredicate: Predicate {}

/// One step of a search program.
///
/// The engine calls `try_pred` when it first reaches the predicate. If that
/// returns `Choices(n)`, the engine calls `retry_pred` once per choice,
/// rewinding the trail in between so each alternative sees the same starting
/// combination. Changes made through trailed values are undone on
/// backtracking; anything else (statistics, emitted snapshots) persists.
pub trait Predicate: Debug {
    /// Run the predicate for `round`, which starts at 0 and counts the
    /// `SuccessSamePredicate` results that led here.
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult;

    /// Take alternative `choice` of the ones `try_pred` offered.
    ///
    /// Must return `Success`, `SuccessSamePredicate` or `Failure`.
    #[allow(unused)]
    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        panic!("{}::retry_pred should never be called", self.name());
    }

    /// Name used in diagnostics; the type name unless overridden.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
