//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for one accepted search invocation
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchId(Uuid);

impl SearchId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SearchId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SearchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A priced catalog entry eligible for inclusion in a combination.
///
/// Only `price` is ever inspected by the solver. Whatever else the caller
/// attached (display name, URL, ...) is captured verbatim in `details` and
/// carried through to the result list unmodified.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub price: u64,

    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

impl Item {
    /// Build a bare item with no opaque payload
    pub fn with_price(price: u64) -> Self {
        Self {
            price,
            details: serde_json::Map::new(),
        }
    }
}

/// An ordered subset of items and its total price.
///
/// Invariant: `total_price` equals the sum of the item prices. Combinations
/// are only ever built by extending a smaller combination with one item and
/// the already-computed sum, so the invariant holds by construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Combination {
    pub items: Vec<Item>,

    #[serde(rename = "totalPrice")]
    pub total_price: u64,
}

impl Combination {
    /// The empty combination, total price zero
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_price: 0,
        }
    }

    /// Extend this combination with one more item reaching `total_price`
    pub fn extended_with(&self, item: &Item, total_price: u64) -> Self {
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend(self.items.iter().cloned());
        items.push(item.clone());
        Self { items, total_price }
    }

    /// Number of items in this combination
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
