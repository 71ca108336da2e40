// Price table model mapping item identifiers to prices

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Cost, ItemId};

/// Prices a single store charges, keyed by normalized item identifier.
///
/// An absent key means the store does not carry the item, which is distinct
/// from an item priced at zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable {
    prices: BTreeMap<ItemId, Cost>,
}

impl PriceTable {
    /// Creates an empty price table
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the price of an item, replacing any previous price
    pub fn insert<S: Into<ItemId>>(&mut self, item: S, price: Cost) {
        self.prices.insert(item.into(), price);
    }

    /// Checks if the store sells a specific item
    pub fn has_item(&self, item: &str) -> bool {
        self.prices.contains_key(item)
    }

    /// Gets the price of an item if the store sells it
    pub fn price_of(&self, item: &str) -> Option<Cost> {
        self.prices.get(item).copied()
    }

    /// Iterates item identifiers in lexicographic order
    pub fn item_ids(&self) -> impl Iterator<Item = &ItemId> {
        self.prices.keys()
    }

    /// Iterates `(item, price)` pairs in lexicographic item order
    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, Cost)> {
        self.prices.iter().map(|(item, price)| (item, *price))
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl<S: Into<ItemId>> FromIterator<(S, Cost)> for PriceTable {
    fn from_iter<I: IntoIterator<Item = (S, Cost)>>(iter: I) -> Self {
        Self {
            prices: iter
                .into_iter()
                .map(|(item, price)| (item.into(), price))
                .collect(),
        }
    }
}
