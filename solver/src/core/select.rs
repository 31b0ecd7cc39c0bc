//! Ranking the frontier into the final result list

use super::frontier::Frontier;
use shared::Combination;
use std::cmp::Ordering;

/// Default length of the returned result list
pub const DEFAULT_RESULT_CAP: usize = 5;

/// Filter and rank the frontier into at most `cap` combinations.
///
/// Pure function of its inputs: the frontier is never mutated and repeated
/// calls return identical orderings.
pub fn select(frontier: &Frontier, target: u64, cap: usize) -> Vec<Combination> {
    let mut candidates: Vec<Combination> = frontier
        .iter()
        .filter(|&(&price, _)| price >= target)
        .map(|(_, combination)| combination.clone())
        .collect();

    if candidates.is_empty() {
        // Closest under-shoot, never the empty seed
        let fallback = frontier
            .iter()
            .rev()
            .find(|&(&price, _)| price > 0 && price < target);
        if let Some((_, combination)) = fallback {
            candidates.push(combination.clone());
        }
    }

    candidates.sort_by(|a, b| rank(a, b, target));
    candidates.truncate(cap);
    candidates
}

/// Total order over candidates: among combinations that both meet the
/// target the cheaper one ranks first, otherwise the one closest to the
/// target; item count breaks ties either way.
fn rank(a: &Combination, b: &Combination, target: u64) -> Ordering {
    if a.total_price >= target && b.total_price >= target {
        a.total_price
            .cmp(&b.total_price)
            .then_with(|| a.len().cmp(&b.len()))
    } else {
        a.total_price
            .abs_diff(target)
            .cmp(&b.total_price.abs_diff(target))
            .then_with(|| a.len().cmp(&b.len()))
    }
}
