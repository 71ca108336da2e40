// Errors raised while loading store data

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors related to reading or validating a store dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("failed to read store data from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The dataset is not valid JSON or does not have the expected shape.
    #[error("invalid store data: {0}")]
    Json(#[from] serde_json::Error),

    /// Two stores share a name, which is used as the plan grouping key.
    #[error("duplicate store name: {0}")]
    DuplicateStore(String),

    /// A price is negative, NaN or infinite.
    #[error("store {store} has invalid price {price} for {item}")]
    InvalidPrice {
        store: String,
        item: String,
        price: f64,
    },
}
