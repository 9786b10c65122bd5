// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Queue-driven breadth-first strategy.
//!
//! Builds the power set level by level, where level k holds the subsets of
//! size k. Each queued subset is a [`ResumeNode`]: the subset plus the first
//! position it may still be extended with. Extending only from the resume
//! position keeps every chain of positions strictly increasing, so no subset
//! is generated twice (no permutations of the same positions).

use super::result_buffer;
use crate::error::Result;
use std::collections::VecDeque;

/// A partial subset tagged with where its extension may resume.
///
/// Invariant: every position already in the subset is below `resume`, and
/// every extension moves `resume` strictly forward.
///
/// ```
/// use power_set::strategies::ResumeNode;
///
/// let elements = ['a', 'b', 'c', 'd'];
/// let node = ResumeNode::singleton(&elements, 1);
/// assert_eq!(node.subset(), &['b']);
/// assert_eq!(node.resume(), 2);
///
/// let children: Vec<_> = node.extensions(&elements).collect();
/// assert_eq!(children[0].subset(), &['b', 'c']);
/// assert_eq!(children[1].subset(), &['b', 'd']);
/// assert_eq!(children[1].resume(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeNode<T> {
    subset: Vec<T>,
    resume: usize,
}

impl<T: Clone> ResumeNode<T> {
    /// The level-1 node holding only the element at `position`.
    pub fn singleton(elements: &[T], position: usize) -> Self {
        Self {
            subset: vec![elements[position].clone()],
            resume: position + 1,
        }
    }

    /// A new node with the element at `position` appended.
    ///
    /// # Panics
    ///
    /// Panics if `position` is below the resume index, which would revisit a
    /// position or produce a permutation of an existing subset.
    pub fn extend(&self, elements: &[T], position: usize) -> Self {
        assert!(
            position >= self.resume,
            "cannot extend at position {} before resume index {}",
            position,
            self.resume
        );
        let mut subset = Vec::with_capacity(self.subset.len() + 1);
        subset.extend_from_slice(&self.subset);
        subset.push(elements[position].clone());
        Self {
            subset,
            resume: position + 1,
        }
    }

    /// Every node one level down: one per position from the resume index on.
    pub fn extensions<'a>(&'a self, elements: &'a [T]) -> impl Iterator<Item = Self> + 'a {
        (self.resume..elements.len()).map(move |position| self.extend(elements, position))
    }
}

impl<T> ResumeNode<T> {
    pub fn subset(&self) -> &[T] {
        &self.subset
    }

    pub fn resume(&self) -> usize {
        self.resume
    }

    pub fn into_subset(self) -> Vec<T> {
        self.subset
    }
}

/// Power set by breadth-first expansion of resume nodes.
///
/// Emits subsets by increasing size and the empty subset last:
///
/// ```
/// use power_set::strategies::breadth_first_queue;
///
/// let subsets = breadth_first_queue(&[1, 2, 3]).unwrap();
/// assert_eq!(
///     subsets,
///     vec![
///         vec![1],
///         vec![2],
///         vec![3],
///         vec![1, 2],
///         vec![1, 3],
///         vec![2, 3],
///         vec![1, 2, 3],
///         vec![],
///     ]
/// );
/// ```
pub fn breadth_first_queue<T: Clone>(elements: &[T]) -> Result<Vec<Vec<T>>> {
    let mut subsets = result_buffer(elements.len())?;

    let mut queue: VecDeque<ResumeNode<T>> = (0..elements.len())
        .map(|position| ResumeNode::singleton(elements, position))
        .collect();

    // FIFO order finishes each level before the next one starts
    while let Some(node) = queue.pop_front() {
        queue.extend(node.extensions(elements));
        subsets.push(node.into_subset());
    }

    subsets.push(Vec::new());
    Ok(subsets)
}
