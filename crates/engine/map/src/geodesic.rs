//! Spherical geodesy: distance, bearing and fixed-interval path sampling
//!
//! All functions are pure and work in decimal degrees at the boundary and
//! radians internally. Two Earth radii are in play: the haversine distance
//! uses the mean radius while the destination step uses the equatorial radius
//! in kilometers. Sampled paths depend on both, so neither is unified.

use crate::coords::GeoCoord;
use std::f64::consts::{FRAC_PI_4, PI, TAU};

/// Mean Earth radius used by [`path_length`], in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Equatorial Earth radius used by [`destination_point`], in kilometers
pub const EARTH_RADIUS_KM: f64 = 6378.1;

/// Great-circle distance between two coordinates in meters (haversine)
pub fn path_length(p1: &GeoCoord, p2: &GeoCoord) -> f64 {
    let lat1 = p1.lat.to_radians();
    let lat2 = p2.lat.to_radians();
    let dlat = (p2.lat - p1.lat).to_radians();
    let dlon = (p2.lon - p1.lon).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Bearing from `p1` towards `p2` in degrees, normalized to [0, 360)
///
/// This is the rhumb-line (Mercator) bearing, not the great-circle initial
/// bearing. [`sample_path`] steps along great circles from the origin using
/// this value, so the two disagree except along meridians and the equator.
pub fn bearing(p1: &GeoCoord, p2: &GeoCoord) -> f64 {
    let start_lat = p1.lat.to_radians();
    let end_lat = p2.lat.to_radians();
    let mut dlon = (p2.lon - p1.lon).to_radians();
    let dphi = ((end_lat / 2.0 + FRAC_PI_4).tan() / (start_lat / 2.0 + FRAC_PI_4).tan()).ln();

    // Take the short way around the antimeridian
    if dlon.abs() > PI {
        dlon = if dlon > 0.0 {
            -(TAU - dlon)
        } else {
            TAU + dlon
        };
    }

    (dlon.atan2(dphi).to_degrees() + 360.0) % 360.0
}

/// Point reached by travelling `distance` meters from `origin` along a great
/// circle with initial `bearing` (degrees clockwise from north)
///
/// The returned longitude is not wrapped into [-180, 180].
pub fn destination_point(origin: &GeoCoord, bearing: f64, distance: f64) -> GeoCoord {
    let brng = bearing.to_radians();
    let delta = (distance / 1000.0) / EARTH_RADIUS_KM;
    let lat1 = origin.lat.to_radians();
    let lon1 = origin.lon.to_radians();

    let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * brng.cos()).asin();
    let lon2 = lon1
        + (brng.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());

    GeoCoord::new(lat2.to_degrees(), lon2.to_degrees())
}

/// Number of points [`sample_path`] produces for a path of `distance` meters
///
/// Counts both endpoints. Returns `None` when the count does not fit in a
/// `usize`, e.g. for a vanishingly small interval, or when `interval` is not
/// positive.
pub fn point_count(distance: f64, interval: f64) -> Option<usize> {
    if !(interval > 0.0) {
        return None;
    }

    let steps = (distance / interval).floor();
    // NaN fails both comparisons
    if !(steps >= 0.0 && steps < usize::MAX as f64) {
        return None;
    }
    (steps as usize).checked_add(2)
}

/// Sample the path from `start` to `end` every `interval` meters
///
/// Returns `start`, then one point per whole interval that fits in the
/// great-circle distance between the endpoints, then `end`. Every
/// intermediate point is projected from `start` along the same `bearing`;
/// the fractional remainder of the distance is dropped.
///
/// # Panics
///
/// If `interval` is not positive, or so small that the number of points
/// does not fit in a `usize` (see [`point_count`]).
pub fn sample_path(interval: f64, bearing: f64, start: &GeoCoord, end: &GeoCoord) -> Vec<GeoCoord> {
    let distance = path_length(start, end);
    let Some(count) = point_count(distance, interval) else {
        panic!("cannot sample {distance} m every {interval} m: point count out of range");
    };
    let steps = count - 2;

    let mut path = Vec::with_capacity(count);
    path.push(*start);
    path.extend(
        (1..=steps).map(|i| destination_point(start, bearing, i as f64 * interval)),
    );
    path.push(*end);

    tracing::debug!(distance, interval, bearing, points = path.len(), "sampled path");
    path
}

/// Sample the path between two points using the bearing from `start` to `end`
pub fn sample_between(start: &GeoCoord, end: &GeoCoord, interval: f64) -> Vec<GeoCoord> {
    sample_path(interval, bearing(start, end), start, end)
}
