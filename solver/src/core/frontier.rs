//! Frontier of reachable price sums
//!
//! The frontier maps every achieved total price to the single best-known
//! combination reaching it, where "best" means fewest items. Keys are kept
//! ordered so every downstream iteration (candidate generation, eviction,
//! selection) is deterministic.

use shared::Combination;
use std::collections::btree_map::Iter;
use std::collections::BTreeMap;

/// Frontier size that triggers eviction after an item pass
pub const MAX_ENTRIES: usize = 50_000;

/// Entries retained by an eviction, the closest to target by price distance
pub const RETAIN_ENTRIES: usize = 25_000;

/// Best-known combination per achieved total price.
///
/// Always contains the seed entry `0 → empty combination` on creation;
/// eviction may later drop it like any other entry.
#[derive(Debug, Clone)]
pub struct Frontier {
    entries: BTreeMap<u64, Combination>,
    max_entries: usize,
    retain_entries: usize,
}

impl Frontier {
    /// Create a frontier seeded with the empty combination
    pub fn new() -> Self {
        Self::with_capacity(MAX_ENTRIES, RETAIN_ENTRIES)
    }

    /// Create a frontier with custom eviction bounds (for testing)
    pub fn with_capacity(max_entries: usize, retain_entries: usize) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(0, Combination::empty());

        Self {
            entries,
            max_entries,
            retain_entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when nothing beyond the price-0 seed has been discovered
    pub fn is_seed_only(&self) -> bool {
        self.entries.keys().all(|&price| price == 0)
    }

    pub fn get(&self, price: u64) -> Option<&Combination> {
        self.entries.get(&price)
    }

    /// Iterate entries in ascending price order
    pub fn iter(&self) -> Iter<'_, u64, Combination> {
        self.entries.iter()
    }

    /// Admit `combination` at its total price unless an incumbent with the
    /// same price and no more items is already present.
    ///
    /// Tie-break: on equal item count the incumbent wins, so which of two
    /// equally sized combinations survives depends only on discovery order.
    pub fn insert_if_better(&mut self, combination: Combination) {
        match self.entries.get(&combination.total_price) {
            Some(existing) if existing.len() <= combination.len() => {}
            _ => {
                self.entries.insert(combination.total_price, combination);
            }
        }
    }

    /// Merge one item pass worth of candidates into the frontier
    pub fn merge(&mut self, candidates: BTreeMap<u64, Combination>) {
        for (_, combination) in candidates {
            self.insert_if_better(combination);
        }
    }

    /// Evict down to the entries closest to `target` once the frontier has
    /// outgrown its bound. Distance ties keep the lower price.
    pub fn enforce_bound(&mut self, target: u64) {
        if self.entries.len() <= self.max_entries {
            return;
        }

        let mut ranked: Vec<(u64, Combination)> = std::mem::take(&mut self.entries).into_iter().collect();
        ranked.sort_by_key(|&(price, _)| (price.abs_diff(target), price));
        ranked.truncate(self.retain_entries);

        self.entries = ranked.into_iter().collect();
    }
}

impl Default for Frontier {
    fn default() -> Self {
        Self::new()
    }
}
