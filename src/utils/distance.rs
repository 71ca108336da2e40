// Distance utilities

use crate::models::{Location, Miles, Store};

/// Fractional part below which a distance is rounded down to the whole mile
pub const ROUND_DOWN_THRESHOLD: f64 = 0.3;

// Absorbs representation error in the fractional part, e.g. 4.3 - 4.0 == 0.29999999999999982
const FRACTION_EPSILON: f64 = 1e-9;

/// Applies the radius-check rounding rule to a distance in miles.
///
/// Distances whose fractional part is below `0.3 - 1e-9` round down to the
/// whole mile; anything else is returned unchanged. Fractions in
/// `[0.3 - 1e-9, 0.3)` are kept so that a literal `4.30`, stored as
/// `4.0 + 0.29999999999999982`, maps to itself. Never rounds up.
pub fn adjust_distance(distance: Miles) -> Miles {
    let whole = distance.floor();
    if distance - whole < ROUND_DOWN_THRESHOLD - FRACTION_EPSILON {
        whole
    } else {
        distance
    }
}

/// Great-circle distance between two points in miles
pub fn haversine_miles(p1: &Location, p2: &Location) -> Miles {
    p1.distance_to(p2)
}

/// Recompute every store's distance from the shopper's location
pub fn update_store_distances(stores: &mut [Store], shopper: &Location) {
    for store in stores.iter_mut() {
        store.distance = haversine_miles(shopper, &store.location);
    }
}
