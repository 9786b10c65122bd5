// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Binary counter strategies.
//!
//! Count i from 0 to 2^n - 1 and read i as an inclusion mask: bit j (least
//! significant first) set means element j is in subset i. The two strategies
//! differ only in how a bit is tested, and produce identical vectors.

use super::{result_buffer, subset_count};
use crate::error::Result;

/// Power set by testing mask bits with shifts.
///
/// ```
/// use power_set::strategies::binary_counter_shift;
///
/// let subsets = binary_counter_shift(&['a', 'b', 'c']).unwrap();
/// assert_eq!(subsets[0b101], vec!['a', 'c']);
/// ```
pub fn binary_counter_shift<T: Clone>(elements: &[T]) -> Result<Vec<Vec<T>>> {
    let count = subset_count(elements.len())?;
    let mut subsets = result_buffer(elements.len())?;

    for mask in 0..count {
        let mut subset = Vec::with_capacity(mask.count_ones() as usize);
        let mut bits = mask;
        let mut position = 0;
        while bits != 0 {
            if bits & 1 == 1 {
                subset.push(elements[position].clone());
            }
            bits >>= 1;
            position += 1;
        }
        subsets.push(subset);
    }
    Ok(subsets)
}

/// Power set by reading the base-2 digits of each mask as text.
///
/// The last digit of the text is bit 0, so digits are read right to left.
pub fn binary_counter_digits<T: Clone>(elements: &[T]) -> Result<Vec<Vec<T>>> {
    let count = subset_count(elements.len())?;
    let mut subsets = result_buffer(elements.len())?;

    for mask in 0..count {
        let digits = format!("{:b}", mask);
        let subset = digits
            .chars()
            .rev()
            .enumerate()
            .filter(|&(_, digit)| digit == '1')
            .map(|(position, _)| elements[position].clone())
            .collect();
        subsets.push(subset);
    }
    Ok(subsets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(binary_counter_shift::<i64>(&[]).unwrap(), vec![Vec::<i64>::new()]);
        assert_eq!(binary_counter_digits::<i64>(&[]).unwrap(), vec![Vec::<i64>::new()]);
    }

    #[test]
    fn test_counting_order() {
        let subsets = binary_counter_shift(&[1, 2, 3]).unwrap();
        assert_eq!(
            subsets,
            vec![
                vec![],
                vec![1],
                vec![2],
                vec![1, 2],
                vec![3],
                vec![1, 3],
                vec![2, 3],
                vec![1, 2, 3],
            ]
        );
    }

    #[test]
    fn test_shift_and_digits_agree_per_mask() {
        let elements: Vec<char> = "abcdefghij".chars().collect();
        assert_eq!(
            binary_counter_shift(&elements).unwrap(),
            binary_counter_digits(&elements).unwrap()
        );
    }

    #[test]
    fn test_highest_mask_is_full_input() {
        let elements = ["p", "q", "r", "s"];
        let subsets = binary_counter_digits(&elements).unwrap();
        assert_eq!(subsets.last().unwrap(), &elements.to_vec());
        assert!(subsets[0].is_empty());
    }
}
