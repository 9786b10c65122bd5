// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Multi-branch depth-first strategy.
//!
//! Every non-empty subset is a strictly increasing chain of positions. The
//! chains form a tree: a node's children extend it with one position beyond
//! its last. Walking that tree depth-first and emitting every node (not just
//! the leaves) produces each non-empty subset once; the empty subset is seeded
//! separately.
//!
//! The walk uses an explicit stack. Each frame carries its own copy of the
//! chain so far, so there is no shared buffer to push and pop.

use super::result_buffer;
use crate::error::Result;

/// A pending node of the depth-first walk.
#[derive(Debug)]
struct Frame<T> {
    /// Elements of the chain, in input order.
    chosen: Vec<T>,
    /// First position that may extend the chain.
    next: usize,
}

/// Power set by depth-first walk of increasing index chains.
///
/// Emits the empty subset first, then every chain in depth-first preorder:
///
/// ```
/// use power_set::strategies::multi_branch_depth_first;
///
/// let subsets = multi_branch_depth_first(&[1, 2, 3]).unwrap();
/// assert_eq!(
///     subsets,
///     vec![
///         vec![],
///         vec![1],
///         vec![1, 2],
///         vec![1, 2, 3],
///         vec![1, 3],
///         vec![2],
///         vec![2, 3],
///         vec![3],
///     ]
/// );
/// ```
pub fn multi_branch_depth_first<T: Clone>(elements: &[T]) -> Result<Vec<Vec<T>>> {
    let mut subsets = result_buffer(elements.len())?;
    subsets.push(Vec::new());

    let mut stack = Vec::with_capacity(elements.len());
    push_children(&mut stack, elements, &[], 0);

    while let Some(frame) = stack.pop() {
        push_children(&mut stack, elements, &frame.chosen, frame.next);
        subsets.push(frame.chosen);
    }
    Ok(subsets)
}

/// Push one frame per position in `next..`, lowest position on top.
fn push_children<T: Clone>(stack: &mut Vec<Frame<T>>, elements: &[T], chosen: &[T], next: usize) {
    for position in (next..elements.len()).rev() {
        let mut extended = Vec::with_capacity(chosen.len() + 1);
        extended.extend_from_slice(chosen);
        extended.push(elements[position].clone());
        stack.push(Frame {
            chosen: extended,
            next: position + 1,
        });
    }
}
