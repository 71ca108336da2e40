// Store model representing a grocery store and its price list

use serde::{Deserialize, Serialize};

use crate::models::{Cost, Location, Miles, PriceTable};

/// Represents a store where groceries can be purchased
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    /// Display name, unique within a search
    pub name: String,

    /// Geographic location of the store
    pub location: Location,

    /// Distance from the shopper in miles, filled in before a search runs
    #[serde(default)]
    pub distance: Miles,

    /// Prices of the items this store carries
    pub prices: PriceTable,
}

impl Store {
    /// Creates a new store with the given name, location, and prices
    pub fn new<S: Into<String>>(name: S, location: Location, prices: PriceTable) -> Self {
        Self {
            name: name.into(),
            location,
            distance: 0.0,
            prices,
        }
    }

    /// Creates a store whose distance from the shopper is already known
    pub fn with_distance<S: Into<String>>(name: S, distance: Miles, prices: PriceTable) -> Self {
        Self {
            name: name.into(),
            location: Location::new(0.0, 0.0),
            distance,
            prices,
        }
    }

    /// Checks if the store sells a specific item
    pub fn has_item(&self, item: &str) -> bool {
        self.prices.has_item(item)
    }

    /// Gets the price of a specific item if available
    pub fn price_of(&self, item: &str) -> Option<Cost> {
        self.prices.price_of(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_store() -> Store {
        let prices = [("milk", 3.0), ("eggs", 2.0)].into_iter().collect();
        Store::new("Corner Market", Location::new(40.0, -75.0), prices)
    }

    #[test]
    fn test_has_item() {
        let store = create_test_store();
        assert!(store.has_item("milk"));
        assert!(store.has_item("eggs"));
        assert!(!store.has_item("bread"));
    }

    #[test]
    fn test_price_of() {
        let store = create_test_store();
        assert_eq!(store.price_of("milk"), Some(3.0));
        assert_eq!(store.price_of("bread"), None);
    }
}
