//! Street View capture along a sampled path
//!
//! This crate turns the points produced by [`streetpath_map::geodesic`] into
//! Street View Static API requests and saves the returned images.
//!
//! # Features
//!
//! - **HTTP Client**: Async client for the Street View Static API
//! - **Fetch Loop**: Sequential fetch-and-save with placeholder detection
//! - **Configuration**: CLI arguments with environment overrides
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use streetpath_map::{geodesic, GeoCoord};
//! use streetview::{fetch_images, StreetViewClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let start = GeoCoord::new(48.8584, 2.2945);
//!     let end = GeoCoord::new(48.8606, 2.3376);
//!     let path = geodesic::sample_between(&start, &end, 100.0);
//!
//!     let client = StreetViewClient::new("YOUR_API_KEY");
//!     let summary = fetch_images(&client, &path, Path::new("streetview_images")).await?;
//!     println!("Saved {} images", summary.saved.len());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod fetcher;
pub mod types;

pub use cli::Cli;
pub use client::{ImageSource, StreetViewClient};
pub use config::FetchConfig;
pub use fetcher::{capture, fetch_images, CaptureOutcome};
pub use types::{FetchError, FetchResult, FetchSummary, StreetViewParams, NO_IMAGERY_SENTINEL_LEN};
