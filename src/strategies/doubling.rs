// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Doubling strategies.
//!
//! Start from the power set of nothing, `[[]]`. Each element then doubles the
//! result: every subset already present gets a counterpart with the element
//! appended. Only the subsets present *before* the element's pass are
//! extended, so each pass exactly doubles the count.
//!
//! All three strategies emit in the same order, e.g. for `[a, b]`:
//! `[]`, `[a]`, `[b]`, `[a, b]`. Subset number i includes element j exactly
//! when bit j of i is set, the same mapping the binary counter strategies use.

use super::result_buffer;
use crate::error::Result;

/// Power set by iterative doubling.
///
/// ```
/// use power_set::strategies::doubling_loop;
///
/// let subsets = doubling_loop(&[1, 2]).unwrap();
/// assert_eq!(subsets, vec![vec![], vec![1], vec![2], vec![1, 2]]);
/// ```
pub fn doubling_loop<T: Clone>(elements: &[T]) -> Result<Vec<Vec<T>>> {
    let mut subsets = result_buffer(elements.len())?;
    subsets.push(Vec::new());

    for element in elements {
        let existing = subsets.len();
        for i in 0..existing {
            let mut extended = subsets[i].clone();
            extended.push(element.clone());
            subsets.push(extended);
        }
    }
    Ok(subsets)
}

/// Power set as a fold over the elements.
///
/// The outer fold threads the result through each element; the inner fold
/// threads it through the subsets that existed when the element was reached.
pub fn doubling_fold<T: Clone>(elements: &[T]) -> Result<Vec<Vec<T>>> {
    let mut seed = result_buffer(elements.len())?;
    seed.push(Vec::new());

    Ok(elements.iter().fold(seed, |subsets, element| {
        let existing = subsets.len();
        (0..existing).fold(subsets, |mut subsets, i| {
            let mut extended = subsets[i].clone();
            extended.push(element.clone());
            subsets.push(extended);
            subsets
        })
    }))
}

/// Power set by doubling the power set of all but the last element.
///
/// Recursion depth equals the input length.
pub fn doubling_recursion<T: Clone>(elements: &[T]) -> Result<Vec<Vec<T>>> {
    let mut subsets = result_buffer(elements.len())?;
    double_prefix(elements, &mut subsets);
    Ok(subsets)
}

fn double_prefix<T: Clone>(elements: &[T], subsets: &mut Vec<Vec<T>>) {
    match elements.split_last() {
        None => subsets.push(Vec::new()),
        Some((last, prefix)) => {
            double_prefix(prefix, subsets);
            let existing = subsets.len();
            for i in 0..existing {
                let mut extended = Vec::with_capacity(subsets[i].len() + 1);
                extended.extend_from_slice(&subsets[i]);
                extended.push(last.clone());
                subsets.push(extended);
            }
        }
    }
}
