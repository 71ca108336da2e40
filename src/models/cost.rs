// Single-store cost models

use serde::{Deserialize, Serialize};

use crate::models::{Cost, ItemId, Miles, Store};

/// Price of one wanted item at one store
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemPrice {
    /// The store sells the item at this price
    Available(Cost),

    /// The store does not carry the item
    Unavailable,
}

impl ItemPrice {
    pub fn is_available(&self) -> bool {
        matches!(self, ItemPrice::Available(_))
    }

    /// Price if available, `None` otherwise
    pub fn price(&self) -> Option<Cost> {
        match self {
            ItemPrice::Available(price) => Some(*price),
            ItemPrice::Unavailable => None,
        }
    }
}

impl From<Option<Cost>> for ItemPrice {
    fn from(price: Option<Cost>) -> Self {
        price.map_or(ItemPrice::Unavailable, ItemPrice::Available)
    }
}

/// One line of a store's cost breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemCost {
    pub item: ItemId,
    pub price: ItemPrice,
}

/// Cost of buying a whole item list at a single store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreCost {
    /// Per-item prices, in the order the items were requested
    pub per_item: Vec<ItemCost>,

    /// Sum of the available item prices
    pub total: Cost,
}

impl StoreCost {
    /// Looks up the recorded price of an item, `None` if it was not requested
    pub fn get(&self, item: &str) -> Option<ItemPrice> {
        self.per_item
            .iter()
            .find(|line| line.item == item)
            .map(|line| line.price)
    }

    /// Items the store does not carry
    pub fn unavailable_items(&self) -> impl Iterator<Item = &ItemId> {
        self.per_item
            .iter()
            .filter(|line| !line.price.is_available())
            .map(|line| &line.item)
    }
}

/// A candidate store together with its single-store cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedStore {
    pub store: Store,

    /// Distance after the down-rounding rule used for radius checks
    pub adjusted_distance: Miles,

    pub cost: StoreCost,
}

impl RankedStore {
    pub fn name(&self) -> &str {
        &self.store.name
    }

    pub fn distance(&self) -> Miles {
        self.store.distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_price_from_option() {
        assert_eq!(ItemPrice::from(Some(0.0)), ItemPrice::Available(0.0));
        assert_eq!(ItemPrice::from(None), ItemPrice::Unavailable);
        assert_eq!(ItemPrice::Available(1.5).price(), Some(1.5));
        assert_eq!(ItemPrice::Unavailable.price(), None);
    }

    #[test]
    fn test_store_cost_lookup() {
        let cost = StoreCost {
            per_item: vec![
                ItemCost {
                    item: "milk".into(),
                    price: ItemPrice::Available(3.0),
                },
                ItemCost {
                    item: "bread".into(),
                    price: ItemPrice::Unavailable,
                },
            ],
            total: 3.0,
        };

        assert_eq!(cost.get("milk"), Some(ItemPrice::Available(3.0)));
        assert_eq!(cost.get("bread"), Some(ItemPrice::Unavailable));
        assert_eq!(cost.get("eggs"), None);
        assert_eq!(cost.unavailable_items().collect::<Vec<_>>(), vec!["bread"]);
    }
}
