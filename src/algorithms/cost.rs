// Single-store cost aggregation

use crate::models::{ItemCost, ItemPrice, PriceTable, ShoppingList, StoreCost};

/// Cost of buying `wanted` at a store with the given prices.
///
/// Items the store does not carry are recorded as unavailable and add nothing
/// to the total. An empty list prices every item the store sells.
pub fn total_cost(prices: &PriceTable, wanted: &ShoppingList) -> StoreCost {
    let per_item: Vec<ItemCost> = if wanted.is_empty() {
        prices
            .iter()
            .map(|(item, price)| ItemCost {
                item: item.clone(),
                price: ItemPrice::Available(price),
            })
            .collect()
    } else {
        wanted
            .iter()
            .map(|item| ItemCost {
                item: item.clone(),
                price: prices.price_of(item).into(),
            })
            .collect()
    };

    let total = per_item
        .iter()
        .filter_map(|line| line.price.price())
        .fold(0.0, |sum, price| sum + price);

    StoreCost { per_item, total }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prices() -> PriceTable {
        [("milk", 3.0), ("eggs", 2.0), ("salt", 0.0), ("organicChoppedKale", 3.99)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_total_of_wanted_items() {
        let wanted = ShoppingList::from_labels(["milk", "eggs"]);
        let cost = total_cost(&prices(), &wanted);

        assert_eq!(cost.total, 5.0);
        assert_eq!(cost.per_item.len(), 2);
        assert_eq!(cost.per_item[0].item, "milk");
    }

    #[test]
    fn test_unavailable_item_contributes_nothing() {
        let wanted = ShoppingList::from_labels(["milk", "bread"]);
        let cost = total_cost(&prices(), &wanted);

        assert_eq!(cost.total, 3.0);
        assert_eq!(cost.get("bread"), Some(ItemPrice::Unavailable));
    }

    #[test]
    fn test_zero_price_is_distinct_from_unavailable() {
        let wanted = ShoppingList::from_labels(["salt", "pepper"]);
        let cost = total_cost(&prices(), &wanted);

        assert_eq!(cost.total, 0.0);
        assert_eq!(cost.get("salt"), Some(ItemPrice::Available(0.0)));
        assert_eq!(cost.get("pepper"), Some(ItemPrice::Unavailable));
    }

    #[test]
    fn test_empty_list_prices_everything() {
        let table = prices();
        let everything = ShoppingList::from_ids(table.item_ids().cloned());

        let fallback = total_cost(&table, &ShoppingList::new());
        assert_eq!(fallback, total_cost(&table, &everything));
        assert_eq!(fallback.total, 3.0 + 2.0 + 0.0 + 3.99);
    }

    #[test]
    fn test_camel_case_identifier_is_priced() {
        let wanted = ShoppingList::from_ids(["organicChoppedKale", "milk"]);
        let cost = total_cost(&prices(), &wanted);

        assert_eq!(cost.get("organicChoppedKale"), Some(ItemPrice::Available(3.99)));
        assert_eq!(cost.unavailable_items().count(), 0);
        assert_eq!(cost.total, 3.99 + 3.0);
    }

    #[test]
    fn test_total_never_negative() {
        let nothing = total_cost(&PriceTable::new(), &ShoppingList::from_labels(["milk"]));
        assert_eq!(nothing.total, 0.0);

        let empty = total_cost(&PriceTable::new(), &ShoppingList::new());
        assert_eq!(empty.total, 0.0);
        assert!(empty.per_item.is_empty());
    }
}
