//! Test data factories for solver tests

use shared::Item;

/// Factory for the item catalogs used across the test suite
pub struct TestFixtures;

impl TestFixtures {
    pub const DEFAULT_RESULT_CAP: usize = 5;

    /// Build a catalog from bare prices
    pub fn items(prices: &[u64]) -> Vec<Item> {
        prices.iter().map(|&price| Item::with_price(price)).collect()
    }

    /// The three-item catalog from the shopping scenario: a combination of
    /// 150 + 250 lands exactly on 400
    pub fn shopping_catalog() -> Vec<Item> {
        Self::items(&[100, 150, 250])
    }

    /// An item carrying an opaque payload next to its price
    pub fn named_item(price: u64, name: &str) -> Item {
        let mut item = Item::with_price(price);
        item.details
            .insert("name".to_string(), serde_json::Value::String(name.to_string()));
        item
    }

    /// A catalog large enough to outgrow a small eviction bound
    pub fn dense_catalog(count: u64) -> Vec<Item> {
        (1..=count).map(Item::with_price).collect()
    }
}
