// Radius filtering of candidate stores

use crate::models::{Miles, Store};
use crate::utils::distance::adjust_distance;

/// Stores whose adjusted distance is within `max_distance`, in input order.
///
/// An empty result means no store is in range.
pub fn filter_stores(stores: &[Store], max_distance: Miles) -> Vec<&Store> {
    stores
        .iter()
        .filter(|store| adjust_distance(store.distance) <= max_distance)
        .collect()
}
