//! Subset search over the item catalog
//!
//! Classic 0/1 dynamic programming over reachable price sums: each item is
//! folded into the frontier exactly once, candidates for one item pass are
//! generated against the frontier as it stood before the pass and merged
//! afterwards, so no combination can contain the same catalog entry twice.

use super::frontier::Frontier;
use super::progress::ProgressTracker;
use crate::error::{SolverError, SolverResult};
use crate::traits::NotificationSink;
use shared::{Combination, Item};
use std::collections::BTreeMap;
use tracing::debug;

/// Admission ceiling for new frontier entries.
///
/// Integer form of `target * 1.5`; with integer prices the flooring cannot
/// change which sums are admitted.
pub fn prune_ceiling(target: u64) -> u64 {
    target.saturating_mul(3) / 2
}

/// Build the frontier of reachable price sums for `items` against `target`.
///
/// Empty input or a zero target yields the seed-only frontier; the
/// coordinator rejects both before a search is ever started, this is the
/// library-level contract.
pub async fn search<S: NotificationSink>(
    items: &[Item],
    target: u64,
    sink: &S,
) -> SolverResult<Frontier> {
    let mut frontier = Frontier::new();
    if items.is_empty() || target == 0 {
        return Ok(frontier);
    }

    let ceiling = prune_ceiling(target);
    let mut progress = ProgressTracker::new(items.len(), target);

    for item in items {
        let mut candidates: BTreeMap<u64, Combination> = BTreeMap::new();

        for (&price, combination) in frontier.iter() {
            progress.step(sink).await;

            let reached = price
                .checked_add(item.price)
                .ok_or(SolverError::PriceOverflow {
                    price,
                    increment: item.price,
                })?;
            if reached > ceiling {
                continue;
            }

            let candidate_len = combination.len() + 1;
            let beats_frontier = frontier
                .get(reached)
                .map_or(true, |existing| candidate_len < existing.len());
            if !beats_frontier {
                continue;
            }

            // Within one pass, fewer items wins; ties keep the candidate
            // generated from the lower pre-pass price.
            let beats_pending = candidates
                .get(&reached)
                .map_or(true, |pending| candidate_len < pending.len());
            if beats_pending {
                candidates.insert(reached, combination.extended_with(item, reached));
            }
        }

        frontier.merge(candidates);
        frontier.enforce_bound(target);
    }

    debug!(
        entries = frontier.len(),
        steps = progress.steps(),
        "frontier construction finished"
    );
    Ok(frontier)
}
