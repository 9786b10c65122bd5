// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking search over predicate programs.
//!
//! A program is a fixed sequence of predicates closed by a terminal one.
//! [`SearchEngine`] walks it depth first, keeping one stack entry per
//! predicate activation on its own heap stack, so search depth costs heap
//! memory rather than call stack.
//!
//! Each activation remembers its predicate, its round, the trail length it
//! started from, and, once the predicate has offered alternatives, which of
//! them are left. Resuming an activation always rewinds the trail to that
//! length first.
//!
//! Control flow per result:
//!
//! | result | engine |
//! |---|---|
//! | `Success` | push the next predicate, round 0 |
//! | `SuccessSamePredicate` | push the same predicate, round + 1 |
//! | `Choices(n)` | call `retry_pred` with choices `0..n`, one per visit |
//! | `Failure` | resume the newest activation with choices left |
//!
//! The terminal predicate always fails, so a search only ends once every
//! alternative is spent. Results are whatever the predicates recorded in the
//! context on the way.
//!
//! # Example
//!
//! ```
//! use power_set::context::SearchContext;
//! use power_set::engine::EngineBuilder;
//! use power_set::predicates::{EmitPredicate, FailPredicate, IncludeExcludePredicate};
//!
//! let mut ctx = SearchContext::new(3);
//! let mut engine = EngineBuilder::new()
//!     .add(Box::new(IncludeExcludePredicate))
//!     .add(Box::new(EmitPredicate))
//!     .terminal(Box::new(FailPredicate))
//!     .build();
//!
//! engine.search(&mut ctx);
//! assert_eq!(ctx.emitted().len(), 8);
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;
use tracing::trace;

/// Initial capacity of the predicate stack.
const INITIAL_STACK_SIZE: usize = 128;

/// One activation of a predicate on the engine stack.
#[derive(Debug)]
struct StackEntry {
    /// Position of the predicate in the program.
    predicate_index: usize,

    /// Round passed to the predicate.
    round: usize,

    /// Whether try_pred has already run for this entry.
    ///
    /// Once set, resuming the entry means trying its next choice; an entry
    /// with no choices left is popped.
    in_choice_mode: bool,

    /// Next choice to try (when in_choice_mode is true).
    current_choice: usize,

    /// Alternatives offered by try_pred.
    num_choices: usize,

    /// Trail length to rewind to before each attempt.
    trail_mark: usize,
}

impl StackEntry {
    fn new(predicate_index: usize, round: usize, trail_mark: usize) -> Self {
        Self {
            predicate_index,
            round,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
            trail_mark,
        }
    }

    /// Mark the entry as having no alternatives left to try.
    fn exhaust(&mut self) {
        self.in_choice_mode = true;
        self.current_choice = 0;
        self.num_choices = 0;
    }
}

/// Runs a predicate program against a [`SearchContext`].
///
/// Build one with [`EngineBuilder`]. The engine holds no reference to the
/// context, so one engine can search several contexts in turn.
pub struct SearchEngine {
    /// The program.
    predicates: Vec<Box<dyn Predicate>>,

    /// Live activations, innermost last.
    stack: Vec<StackEntry>,

    /// try_pred calls in the last search.
    try_count: u64,

    /// retry_pred calls in the last search.
    retry_count: u64,
}

impl SearchEngine {
    /// Wrap a program without checking how it ends.
    ///
    /// Predicates will be tried in the order given. Prefer [`EngineBuilder`],
    /// which guarantees the sequence ends with a terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(INITIAL_STACK_SIZE),
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the program until every alternative is spent.
    ///
    /// # Panics
    ///
    /// Panics if control runs past the last predicate, or if `retry_pred`
    /// returns `Choices`.
    pub fn search(&mut self, ctx: &mut SearchContext) {
        self.stack.clear();
        self.try_count = 0;
        self.retry_count = 0;

        if self.predicates.is_empty() {
            return;
        }
        self.stack.push(StackEntry::new(0, 0, ctx.trail.len()));

        loop {
            let Some(entry) = self.stack.last_mut() else {
                trace!(
                    tries = self.try_count,
                    retries = self.retry_count,
                    "search exhausted"
                );
                return;
            };

            // Each attempt starts from the state this entry was entered with
            ctx.trail.rewind_to(entry.trail_mark);

            let result = if !entry.in_choice_mode {
                self.try_count += 1;
                let result = self.predicates[entry.predicate_index].try_pred(ctx, entry.round);
                if let PredicateResult::Choices(n) = result {
                    entry.in_choice_mode = true;
                    entry.current_choice = 0;
                    entry.num_choices = n;
                    // Keep whatever try_pred set up for its choices
                    entry.trail_mark = ctx.trail.len();
                    continue;
                }
                entry.exhaust();
                result
            } else {
                if entry.current_choice >= entry.num_choices {
                    self.stack.pop();
                    continue;
                }

                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                let result =
                    self.predicates[entry.predicate_index].retry_pred(ctx, entry.round, choice);
                if let PredicateResult::Choices(_) = result {
                    panic!("retry_pred returned invalid result: {:?}", result);
                }
                result
            };

            match result {
                PredicateResult::Success => self.push_next_predicate(ctx),
                PredicateResult::SuccessSamePredicate => self.push_same_predicate(ctx),
                PredicateResult::Failure => {
                    // An exhausted entry pops itself on the next pass; a
                    // choice entry moves on to its next choice.
                }
                PredicateResult::Choices(_) => unreachable!(),
            }
        }
    }

    /// Activate the predicate after the current one.
    ///
    /// Running off the end means the program had no terminal predicate.
    fn push_next_predicate(&mut self, ctx: &SearchContext) {
        let next_index = self.stack.last().map_or(0, |e| e.predicate_index + 1);

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: ran past the last predicate. \
                 Close every program with FailPredicate."
            );
        }

        self.stack
            .push(StackEntry::new(next_index, 0, ctx.trail.len()));
    }

    /// Activate the current predicate again for its next round.
    fn push_same_predicate(&mut self, ctx: &SearchContext) {
        let (index, round) = self
            .stack
            .last()
            .map_or((0, 0), |e| (e.predicate_index, e.round + 1));

        self.stack.push(StackEntry::new(index, round, ctx.trail.len()));
    }

    /// `(try_count, retry_count)` for the last search.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builder for search programs that always end in a terminal predicate.
///
/// ```
/// use power_set::engine::EngineBuilder;
/// use power_set::predicates::FailPredicate;
///
/// let engine = EngineBuilder::new()
///     .terminal(Box::new(FailPredicate))
///     .build();
/// assert_eq!(engine.statistics(), (0, 0));
/// ```
#[derive(Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to the program.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Close the program with a terminal predicate.
    pub fn terminal<P: TerminalPredicate + 'static>(mut self, predicate: Box<P>) -> TerminatedProgram {
        self.predicates.push(predicate);
        TerminatedProgram {
            predicates: self.predicates,
        }
    }
}

/// A predicate sequence closed by a terminal predicate, ready to build.
pub struct TerminatedProgram {
    predicates: Vec<Box<dyn Predicate>>,
}

impl TerminatedProgram {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::FailPredicate;

    /// Succeeds once, without choices.
    #[derive(Debug)]
    struct AlwaysSucceed;

    impl Predicate for AlwaysSucceed {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Success
        }
    }

    /// Test predicate offering a fixed number of choices, each succeeding.
    #[derive(Debug)]
    struct Branch(usize);

    impl Predicate for Branch {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Choices(self.0)
        }

        fn retry_pred(&mut self, _ctx: &mut SearchContext, _round: usize, _choice: usize) -> PredicateResult {
            PredicateResult::Success
        }
    }

    /// Test predicate that repeats for a number of rounds.
    #[derive(Debug)]
    struct Rounds(usize);

    impl Predicate for Rounds {
        fn try_pred(&mut self, _ctx: &mut SearchContext, round: usize) -> PredicateResult {
            if round < self.0 {
                PredicateResult::SuccessSamePredicate
            } else {
                PredicateResult::Success
            }
        }
    }

    #[derive(Debug)]
    struct BadRetry;

    impl Predicate for BadRetry {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Choices(1)
        }

        fn retry_pred(&mut self, _ctx: &mut SearchContext, _round: usize, _choice: usize) -> PredicateResult {
            PredicateResult::Choices(2)
        }
    }

    #[test]
    fn test_immediate_failure() {
        let mut ctx = SearchContext::new(0);
        let mut engine = SearchEngine::new(vec![Box::new(FailPredicate)]);

        engine.search(&mut ctx);
        assert_eq!(engine.statistics(), (1, 0));
    }

    #[test]
    fn test_empty_predicates() {
        let mut ctx = SearchContext::new(0);
        let mut engine = SearchEngine::new(vec![]);

        engine.search(&mut ctx);
        assert_eq!(engine.statistics(), (0, 0));
    }

    #[test]
    fn test_deterministic_predicate_is_not_retried() {
        let mut ctx = SearchContext::new(0);
        let mut engine = EngineBuilder::new()
            .add(Box::new(AlwaysSucceed))
            .add(Box::new(AlwaysSucceed))
            .terminal(Box::new(FailPredicate))
            .build();

        // Each predicate is tried once, then the search backtracks out
        engine.search(&mut ctx);
        assert_eq!(engine.statistics(), (3, 0));
    }

    #[test]
    fn test_nested_choices_are_all_visited() {
        let mut ctx = SearchContext::new(0);
        let mut engine = EngineBuilder::new()
            .add(Box::new(Branch(2)))
            .add(Box::new(Branch(3)))
            .terminal(Box::new(FailPredicate))
            .build();

        engine.search(&mut ctx);
        // Tries: 1 + 2 (inner branch per outer choice) + 6 (fail per path)
        // Retries: 2 outer choices + 2 * 3 inner choices
        assert_eq!(engine.statistics(), (9, 8));
    }

    #[test]
    fn test_rounds() {
        let mut ctx = SearchContext::new(0);
        let mut engine = EngineBuilder::new()
            .add(Box::new(Rounds(5)))
            .terminal(Box::new(FailPredicate))
            .build();

        engine.search(&mut ctx);
        // Rounds 0..=5 plus the fail
        assert_eq!(engine.statistics(), (7, 0));
    }

    #[test]
    fn test_search_again_resets_statistics() {
        let mut ctx = SearchContext::new(0);
        let mut engine = EngineBuilder::new()
            .add(Box::new(Branch(4)))
            .terminal(Box::new(FailPredicate))
            .build();

        engine.search(&mut ctx);
        let first = engine.statistics();
        engine.search(&mut ctx);
        assert_eq!(engine.statistics(), first);
        assert_eq!(first, (5, 4));
    }

    #[test]
    #[should_panic(expected = "Invalid predicate sequence")]
    fn test_invalid_program_without_terminal() {
        let mut ctx = SearchContext::new(0);
        let mut engine = SearchEngine::new(vec![
            Box::new(AlwaysSucceed),  // Missing terminal predicate!
        ]);

        engine.search(&mut ctx); // Should panic
    }

    #[test]
    #[should_panic(expected = "retry_pred returned invalid result")]
    fn test_retry_cannot_offer_choices() {
        let mut ctx = SearchContext::new(0);
        let mut engine = EngineBuilder::new()
            .add(Box::new(BadRetry))
            .terminal(Box::new(FailPredicate))
            .build();

        engine.search(&mut ctx);
    }
}
