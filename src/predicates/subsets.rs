// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicates that walk the include/exclude tree of a sequence.
//!
//! `IncludeExcludePredicate` runs once per position (round i decides
//! position i) and offers two choices at each: include the position in the
//! working combination, or leave it out. After the last position it succeeds,
//! handing over to `EmitPredicate`, which snapshots the combination. Closing
//! the program with `FailPredicate` makes the engine backtrack through every
//! branch, so the emitted combinations are exactly the 2^n leaves of the tree.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::Counters;

const INCLUDE: usize = 0;
const EXCLUDE: usize = 1;

/// Branch on whether position `round` belongs to the working combination.
#[derive(Debug)]
pub struct IncludeExcludePredicate;

impl Predicate for IncludeExcludePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        if round == ctx.len() {
            PredicateResult::Success
        } else {
            PredicateResult::Choices(2)
        }
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        match choice {
            INCLUDE => {
                ctx.include(round);
                ctx.statistics.increment(Counters::Inclusions);
            }
            // The trail has already undone any earlier inclusion
            EXCLUDE => ctx.statistics.increment(Counters::Exclusions),
            _ => unreachable!("include/exclude offers two choices, got {}", choice),
        }
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "IncludeExclude"
    }
}

/// Snapshot the working combination into the context's output.
#[derive(Debug)]
pub struct EmitPredicate;

impl Predicate for EmitPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        ctx.emit();
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Emit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineBuilder;
    use crate::predicates::FailPredicate;
    use crate::subset::IndexSet;
    use std::collections::HashSet;

    fn exhaust(len: usize) -> SearchContext {
        let mut ctx = SearchContext::new(len);
        let mut engine = EngineBuilder::new()
            .add(Box::new(IncludeExcludePredicate))
            .add(Box::new(EmitPredicate))
            .terminal(Box::new(FailPredicate))
            .build();
        engine.search(&mut ctx);
        ctx
    }

    #[test]
    fn test_empty_input_emits_only_empty_set() {
        let ctx = exhaust(0);
        assert_eq!(ctx.emitted(), &[IndexSet::empty()]);
    }

    #[test]
    fn test_leaves_in_include_first_order() {
        let ctx = exhaust(2);
        let bits: Vec<u64> = ctx.emitted().iter().map(|set| set.bits()).collect();
        assert_eq!(bits, vec![0b11, 0b01, 0b10, 0b00]);
    }

    #[test]
    fn test_every_leaf_distinct() {
        let ctx = exhaust(8);
        let distinct: HashSet<IndexSet> = ctx.emitted().iter().copied().collect();
        assert_eq!(ctx.emitted().len(), 256);
        assert_eq!(distinct.len(), 256);
    }

    #[test]
    fn test_branch_statistics() {
        let ctx = exhaust(3);
        // One include and one exclude per internal node: 2^3 - 1 nodes
        assert_eq!(ctx.statistics.get(Counters::Inclusions), 7);
        assert_eq!(ctx.statistics.get(Counters::Exclusions), 7);
        assert_eq!(ctx.statistics.get(Counters::EmittedSubsets), 8);
    }

    #[test]
    fn test_trail_is_clean_after_exhaustion() {
        let ctx = exhaust(4);
        assert!(ctx.trail.is_empty());
        assert!(ctx.chosen().is_empty());
    }

    #[test]
    fn test_engine_work_per_leaf() {
        let mut ctx = SearchContext::new(2);
        let mut engine = EngineBuilder::new()
            .add(Box::new(IncludeExcludePredicate))
            .add(Box::new(EmitPredicate))
            .terminal(Box::new(FailPredicate))
            .build();

        engine.search(&mut ctx);
        // 3 inner nodes and 4 leaves each tried as IncludeExclude,
        // then Emit and Fail per leaf; two retries per inner node
        assert_eq!(engine.statistics(), (15, 6));
    }
}
