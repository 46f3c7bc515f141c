//! Exhaustive enumerator used to check the cone traversal.
//!
//! The cone traversal is not guaranteed to reach every frequent itemset.
//! This walks every combination of ranked positions instead, so traversal
//! output can be compared against it: every accepted cone must appear here
//! with the same support. Exponential in the number of ranked items; meant
//! for small tables.

use super::collector::FrequentItemsets;
use super::rank::RankOrder;
use super::support::count_support;
use super::TransactionId;

/// Every combination of ranked items with support `>= min_support`, by
/// increasing size and then lexicographic rank position.
pub fn enumerate_exhaustive(rank: &RankOrder, min_support: usize) -> FrequentItemsets {
    let positions: Vec<usize> = (0..rank.len()).collect();
    let mut result = FrequentItemsets::new();

    for k in 1..=positions.len() {
        let mut callback = |combination: &[usize]| {
            let stack: Vec<&[TransactionId]> =
                combination.iter().map(|&pos| rank.postings(pos)).collect();
            let support = count_support(&stack);
            if support >= min_support {
                let itemset: Vec<_> = combination.iter().map(|&pos| rank.item(pos)).collect();
                result.push(&itemset, support);
            }
        };
        generate_combinations_recursive(&positions, k, 0, &mut Vec::with_capacity(k), &mut callback);
    }

    result
}

pub fn generate_combinations_recursive<F>(
    items: &[usize],
    k: usize,
    start: usize,
    current: &mut Vec<usize>,
    callback: &mut F,
) where
    F: FnMut(&[usize]),
{
    if current.len() == k {
        callback(current);
        return;
    }

    for i in start..items.len() {
        current.push(items[i]);
        generate_combinations_recursive(items, k, i + 1, current, callback);
        current.pop();
    }
}
