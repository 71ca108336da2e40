pub mod best_price;
pub mod cost;
pub mod filter;
pub mod plan_builder;
pub mod ranker;

// Common algorithm traits
use crate::config::SearchQuery;
use crate::models::{SearchResult, Store};

/// Trait for multi-store shopping optimizers
pub trait ShoppingOptimizer {
    /// Search `stores` for the cheapest ways to buy `query.wanted`.
    ///
    /// Returns `None` when no store lies within `query.max_distance`.
    fn rank(&self, stores: &[Store], query: &SearchQuery) -> Option<SearchResult>;
}
