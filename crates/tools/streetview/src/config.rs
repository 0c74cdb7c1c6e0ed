//! Run configuration built from command-line arguments and the environment

use crate::cli::Cli;
use crate::client::{StreetViewClient, DEFAULT_ENDPOINT};
use crate::types::StreetViewParams;
use std::{env, path::PathBuf};
use streetpath_map::{geodesic, GeoCoord};

/// Output directory used when neither the CLI nor the environment sets one
pub const DEFAULT_OUTPUT_DIR: &str = "streetview_images";

/// Upper bound on sampled points (one request each) for a single run
pub const MAX_PATH_POINTS: usize = 1_000_000;

/// Everything one run needs: endpoints of the path, sampling interval and
/// where and how to fetch images.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Street View API key.
    pub api_key: String,
    /// First point of the path.
    pub start: GeoCoord,
    /// Last point of the path.
    pub end: GeoCoord,
    /// Distance between sampled points in meters.
    pub interval: f64,
    /// Directory images are saved into.
    pub output_dir: PathBuf,
    /// Street View endpoint base URL.
    pub endpoint: String,
    /// Camera parameters for every request.
    pub params: StreetViewParams,
}

impl FetchConfig {
    /// Builds a configuration from parsed arguments, reading
    /// `STREETVIEW_ENDPOINT` and `STREETVIEW_OUTPUT_DIR` from the environment.
    pub fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        Self::from_cli_with(cli, |key| env::var(key).ok())
    }

    /// Same as [`FetchConfig::from_cli`] with an explicit variable lookup.
    pub fn from_cli_with<F>(cli: &Cli, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let output_dir = cli
            .output_dir
            .clone()
            .or_else(|| lookup("STREETVIEW_OUTPUT_DIR").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
        let endpoint = lookup("STREETVIEW_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.into());

        anyhow::ensure!(
            cli.interval.is_finite() && cli.interval > 0.0,
            "interval must be a positive number of meters, got {}",
            cli.interval
        );
        anyhow::ensure!(!cli.api_key.is_empty(), "API key must not be empty");

        let start = GeoCoord::new(cli.latitude1, cli.longitude1);
        let end = GeoCoord::new(cli.latitude2, cli.longitude2);
        for (name, coord) in [("start", start), ("end", end)] {
            if !coord.is_valid() {
                tracing::warn!(%coord, "{name} coordinate is outside the valid latitude/longitude range");
            }
        }

        let distance = start.distance_to(&end);
        let points = geodesic::point_count(distance, cli.interval);
        anyhow::ensure!(
            points.is_some_and(|n| n <= MAX_PATH_POINTS),
            "interval of {} m over {:.1} m would sample more than {} points",
            cli.interval,
            distance,
            MAX_PATH_POINTS
        );

        Ok(Self {
            api_key: cli.api_key.clone(),
            start,
            end,
            interval: cli.interval,
            output_dir,
            endpoint,
            params: StreetViewParams::default(),
        })
    }

    /// Sampled capture points from `start` to `end`.
    pub fn sample_path(&self) -> Vec<GeoCoord> {
        geodesic::sample_between(&self.start, &self.end, self.interval)
    }

    /// Street View client configured with this key, endpoint and params.
    pub fn client(&self) -> StreetViewClient {
        StreetViewClient::new(self.api_key.clone())
            .with_endpoint(self.endpoint.clone())
            .with_params(self.params)
    }
}
