// Models module - exports all model types

mod cost;
mod item_label;
mod location;
mod plan;
mod price_table;
mod shopping_list;
mod store;

// Re-export model types
pub use self::cost::{ItemCost, ItemPrice, RankedStore, StoreCost};
pub use self::item_label::{denormalize_item_label, normalize_item_label};
pub use self::location::{Location, METERS_PER_MILE};
pub use self::plan::{
    BestPriceEntry, BestPrices, OptimalPlan, PlannedItem, SearchResult, ShoppingPlan, StorePlan,
};
pub use self::price_table::PriceTable;
pub use self::shopping_list::ShoppingList;
pub use self::store::Store;

// Common type aliases for improved code readability
pub type ItemId = String;
pub type Cost = f64;
pub type Miles = f64;
