// Public modules
pub mod algorithms;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::ranker::StoreRanker;
pub use algorithms::ShoppingOptimizer;
pub use config::SearchQuery;
pub use error::DatasetError;
pub use models::{Location, PriceTable, SearchResult, ShoppingList, Store};
