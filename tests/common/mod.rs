// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use power_set::{Predicate, PredicateResult, SearchContext};
use std::collections::BTreeSet;

/// Collapse a power set into a set of subsets, ignoring emission order.
pub fn as_set<T: Ord>(subsets: Vec<Vec<T>>) -> BTreeSet<Vec<T>> {
    subsets.into_iter().collect()
}

/// How many subsets contain `element`.
pub fn occurrences<T: PartialEq>(subsets: &[Vec<T>], element: &T) -> usize {
    subsets.iter().filter(|subset| subset.contains(element)).count()
}

/// Binomial coefficient, small arguments only.
pub fn choose(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

/// `1..=len` as `u32`.
pub fn sequence(len: usize) -> Vec<u32> {
    (1..=len as u32).collect()
}

/// Fails whenever the working combination has more than `max` positions.
///
/// Placed after the include/exclude rounds, this prunes leaves so only
/// combinations of size at most `max` reach the following predicates.
#[derive(Debug)]
pub struct AtMostPredicate(pub usize);

impl Predicate for AtMostPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if ctx.chosen().len() > self.0 {
            PredicateResult::Failure
        } else {
            PredicateResult::Success
        }
    }

    fn name(&self) -> &str {
        "AtMost"
    }
}

/// Offers `n` choices; each choice includes that position and succeeds.
#[derive(Debug)]
pub struct PickOnePredicate(pub usize);

impl Predicate for PickOnePredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Choices(self.0)
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        _round: usize,
        choice: usize,
    ) -> PredicateResult {
        ctx.include(choice);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "PickOne"
    }
}
