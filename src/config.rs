// Search parameters and parsing of raw user input

use serde::{Deserialize, Serialize};

use crate::models::{Miles, ShoppingList};

/// Radius used when the user gives no usable value
pub const DEFAULT_RADIUS_MILES: u32 = 5;

/// Store count used when the user gives no usable value
pub const DEFAULT_MAX_STORES: usize = 5;

/// Parameters for one store search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Search radius in miles, compared against adjusted store distances
    pub max_distance: Miles,

    /// How many of the cheapest single-store options to keep
    pub max_store_count: usize,

    /// Items to price; empty means everything
    pub wanted: ShoppingList,
}

impl SearchQuery {
    pub fn new(max_distance: Miles, max_store_count: usize, wanted: ShoppingList) -> Self {
        Self {
            max_distance,
            max_store_count,
            wanted,
        }
    }

    /// Builds a query from raw text fields.
    ///
    /// Each field is read as a leading integer ("7", "7.5" and "7 miles" all give 7).
    /// Missing, non-numeric, zero, or negative values fall back to
    /// [`DEFAULT_RADIUS_MILES`] and [`DEFAULT_MAX_STORES`].
    pub fn from_raw(radius: Option<&str>, store_count: Option<&str>, wanted: ShoppingList) -> Self {
        let max_distance = radius
            .and_then(parse_positive_int)
            .map_or(f64::from(DEFAULT_RADIUS_MILES), |r| r as f64);
        let max_store_count = store_count
            .and_then(parse_positive_int)
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(DEFAULT_MAX_STORES);

        Self::new(max_distance, max_store_count, wanted)
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new(
            f64::from(DEFAULT_RADIUS_MILES),
            DEFAULT_MAX_STORES,
            ShoppingList::new(),
        )
    }
}

// Leading optionally-signed integer of `raw`, if it is greater than zero
fn parse_positive_int(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    unsigned[..digits_end]
        .parse::<u64>()
        .ok()
        .filter(|n| *n > 0)
}
