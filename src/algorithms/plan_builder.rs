// Grouping of best prices into a store-by-store plan

use crate::models::{BestPrices, PlannedItem, ShoppingPlan};

/// Groups each resolved best price under the store offering it.
///
/// Items keep the order of `best_prices` within each store. Items with no
/// offering store are left out of the plan.
pub fn build_plan(best_prices: &BestPrices) -> ShoppingPlan {
    let mut plan = ShoppingPlan::new();

    for entry in best_prices.iter() {
        let Some(store) = entry.store.as_deref() else {
            continue;
        };

        let store_plan = plan.entry(store, entry.distance.unwrap_or_default());
        store_plan.items.push(PlannedItem {
            item: entry.item.clone(),
            price: entry.price,
        });
        store_plan.subtotal += entry.price;
    }

    plan
}
