// Per-item best price search across a store set

use std::collections::BTreeSet;

use crate::models::{BestPriceEntry, BestPrices, ItemId, ShoppingList, Store};

/// Finds, for every item, the lowest price among `stores` and the store offering it.
///
/// The item universe is `wanted`, or the sorted union of every store's items when
/// `wanted` is empty. A store only replaces the current best on a strictly lower
/// price, so the earliest store in `stores` wins ties. Items no store carries keep
/// the not-found entry.
pub fn find_best_prices(stores: &[&Store], wanted: &ShoppingList) -> BestPrices {
    let items: Vec<ItemId> = if wanted.is_empty() {
        stores
            .iter()
            .flat_map(|store| store.prices.item_ids())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    } else {
        wanted.iter().cloned().collect()
    };

    let entries = items
        .into_iter()
        .map(|item| {
            let mut best = BestPriceEntry::not_found(item);
            for store in stores {
                if let Some(price) = store.price_of(&best.item) {
                    if price < best.price {
                        best.price = price;
                        best.store = Some(store.name.clone());
                        best.distance = Some(store.distance);
                    }
                }
            }
            best
        })
        .collect();

    BestPrices::new(entries)
}
