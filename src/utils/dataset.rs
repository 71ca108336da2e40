// Store dataset loading

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::DatasetError;
use crate::models::Store;

/// Loads and validates a JSON array of stores from disk
pub fn load_stores<P: AsRef<Path>>(path: P) -> Result<Vec<Store>, DatasetError> {
    let path = path.as_ref();
    let json_str = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let stores = parse_stores(&json_str)?;
    info!(path = %path.display(), stores = stores.len(), "loaded store data");
    Ok(stores)
}

/// Parses and validates a JSON array of stores
pub fn parse_stores(json_str: &str) -> Result<Vec<Store>, DatasetError> {
    let stores: Vec<Store> = serde_json::from_str(json_str)?;
    validate_stores(&stores)?;
    Ok(stores)
}

// Store names must be unique and every price a finite non-negative number
fn validate_stores(stores: &[Store]) -> Result<(), DatasetError> {
    let mut names = HashSet::new();

    for store in stores {
        if !names.insert(store.name.as_str()) {
            return Err(DatasetError::DuplicateStore(store.name.clone()));
        }

        if let Some((item, price)) = store
            .prices
            .iter()
            .find(|(_, price)| !price.is_finite() || *price < 0.0)
        {
            return Err(DatasetError::InvalidPrice {
                store: store.name.clone(),
                item: item.clone(),
                price,
            });
        }

        debug!(store = %store.name, items = store.prices.len(), "validated store");
    }

    Ok(())
}
