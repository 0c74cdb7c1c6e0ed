//! Spherical geodesy for streetpath
//!
//! This crate provides the coordinate type and the path sampler used to pick
//! Street View capture points between two locations.
//!
//! # Modules
//!
//! - [`coords`]: Latitude/longitude coordinate type
//! - [`geodesic`]: Distance, bearing, destination point and path sampling
//!
//! # Example
//!
//! ```
//! use streetpath_map::{geodesic, GeoCoord};
//!
//! let start = GeoCoord::new(0.0, 0.0);
//! let end = GeoCoord::new(0.0, 1.0);
//!
//! let path = geodesic::sample_between(&start, &end, 50_000.0);
//! assert_eq!(path.len(), 4);
//! ```

pub mod coords;
pub mod geodesic;

pub use coords::GeoCoord;
pub use geodesic::{
    bearing, destination_point, path_length, point_count, sample_between, sample_path,
};
