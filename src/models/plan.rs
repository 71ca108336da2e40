// Multi-store plan and search result models

use serde::{Deserialize, Serialize};

use crate::models::{Cost, ItemId, Miles, RankedStore};

/// Cheapest offer found for one item across a set of stores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestPriceEntry {
    pub item: ItemId,

    /// Lowest price seen, `f64::INFINITY` when no store offers the item.
    /// Serialized as `null` in that case.
    #[serde(with = "not_found_price")]
    pub price: Cost,

    /// Store offering the lowest price, `None` when no store offers the item
    pub store: Option<String>,

    /// Distance of that store
    pub distance: Option<Miles>,
}

impl BestPriceEntry {
    /// Entry for an item no store has offered yet
    pub fn not_found<S: Into<ItemId>>(item: S) -> Self {
        Self {
            item: item.into(),
            price: f64::INFINITY,
            store: None,
            distance: None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.store.is_some()
    }
}

// Not-found prices travel as `null`, since JSON has no infinity
mod not_found_price {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::models::Cost;

    pub fn serialize<S: Serializer>(price: &Cost, serializer: S) -> Result<S::Ok, S::Error> {
        if price.is_finite() {
            serializer.serialize_some(price)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Cost, D::Error> {
        Ok(Option::<Cost>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

/// Best price per item, in item order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BestPrices(Vec<BestPriceEntry>);

impl BestPrices {
    pub fn new(entries: Vec<BestPriceEntry>) -> Self {
        Self(entries)
    }

    pub fn get(&self, item: &str) -> Option<&BestPriceEntry> {
        self.0.iter().find(|entry| entry.item == item)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BestPriceEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Items that no considered store offers
    pub fn missing_items(&self) -> impl Iterator<Item = &ItemId> {
        self.0
            .iter()
            .filter(|entry| !entry.is_found())
            .map(|entry| &entry.item)
    }
}

/// An item assigned to a store in a shopping plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedItem {
    pub item: ItemId,
    pub price: Cost,
}

/// Everything to buy at one store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorePlan {
    pub store: String,
    pub distance: Miles,
    pub items: Vec<PlannedItem>,
    pub subtotal: Cost,
}

/// Store-by-store shopping plan, stores in the order they were first assigned an item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingPlan(Vec<StorePlan>);

impl ShoppingPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, store: &str) -> Option<&StorePlan> {
        self.0.iter().find(|plan| plan.store == store)
    }

    /// Returns the entry for `store`, creating an empty one on first sight
    pub fn entry(&mut self, store: &str, distance: Miles) -> &mut StorePlan {
        let index = match self.0.iter().position(|plan| plan.store == store) {
            Some(index) => index,
            None => {
                self.0.push(StorePlan {
                    store: store.to_string(),
                    distance,
                    items: Vec::new(),
                    subtotal: 0.0,
                });
                self.0.len() - 1
            }
        };
        &mut self.0[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &StorePlan> {
        self.0.iter()
    }

    /// Number of stores to visit
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all store subtotals
    pub fn total(&self) -> Cost {
        self.0.iter().fold(0.0, |sum, plan| sum + plan.subtotal)
    }
}

/// Cheapest way to buy the item list across the selected stores
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimalPlan {
    pub best_prices: BestPrices,

    /// Total of the planned items; items no store offers are left out
    pub total: Cost,

    pub shopping_plan: ShoppingPlan,
}

impl OptimalPlan {
    /// Items left out of the plan because no selected store offers them
    pub fn missing_items(&self) -> impl Iterator<Item = &ItemId> {
        self.best_prices.missing_items()
    }
}

/// Outcome of a store search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Top stores by single-store total, cheapest first
    pub single_store_ranking: Vec<RankedStore>,

    pub optimal_plan: OptimalPlan,

    /// Stores within the radius before the ranking was truncated
    pub stores_considered: usize,
}
