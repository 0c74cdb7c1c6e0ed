//! Geographic coordinate type
//!
//! Positions are plain latitude/longitude pairs in decimal degrees on a
//! spherical Earth. Range checking is available but never enforced.

use serde::Serialize;

/// Geographic coordinate (latitude/longitude in decimal degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoCoord {
    /// Latitude in degrees (-90 to 90, positive = north)
    pub lat: f64,
    /// Longitude in degrees (-180 to 180, positive = east)
    ///
    /// Points produced by [`crate::geodesic::destination_point`] may fall
    /// outside this range when a path crosses the antimeridian.
    pub lon: f64,
}

impl GeoCoord {
    /// Create a new geographic coordinate
    ///
    /// # Arguments
    /// * `lat` - Latitude in degrees (-90 to 90)
    /// * `lon` - Longitude in degrees (-180 to 180)
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Check if the coordinate is within valid ranges
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }

    /// Great-circle distance to another coordinate in meters
    pub fn distance_to(&self, other: &GeoCoord) -> f64 {
        crate::geodesic::path_length(self, other)
    }
}

impl Default for GeoCoord {
    fn default() -> Self {
        // Null island
        Self { lat: 0.0, lon: 0.0 }
    }
}

impl From<(f64, f64)> for GeoCoord {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

impl std::fmt::Display for GeoCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}
