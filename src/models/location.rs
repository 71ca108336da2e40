// Location model representing geographic coordinates

use geo::{HaversineDistance, Point};
use serde::{Deserialize, Serialize};

use crate::models::Miles;

/// Meters in one statute mile
pub const METERS_PER_MILE: f64 = 1609.344;

/// Represents a location as latitude/longitude in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    /// Creates a new location with the given coordinates
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to another location, in miles
    pub fn distance_to(&self, other: &Location) -> Miles {
        self.as_point().haversine_distance(&other.as_point()) / METERS_PER_MILE
    }

    fn as_point(&self) -> Point<f64> {
        // geo points are (x, y) = (lng, lat)
        Point::new(self.lng, self.lat)
    }
}
