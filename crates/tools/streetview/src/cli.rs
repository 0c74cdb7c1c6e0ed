//! Command-line interface

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Single-dash long flags accepted for compatibility, with their long forms
const LEGACY_FLAGS: [(&str, &str); 4] = [
    ("-lat1", "--latitude1"),
    ("-lat2", "--latitude2"),
    ("-lng1", "--longitude1"),
    ("-lng2", "--longitude2"),
];

/// Gather Street View images between two points given their latitude and longitude
#[derive(Parser, Debug, Clone)]
#[command(name = "streetview")]
#[command(
    about = "Gather Street View images between two points given their latitude and longitude",
    long_about = None
)]
pub struct Cli {
    /// Google Maps API key
    #[arg(short = 'k', long = "api-key")]
    pub api_key: String,

    /// Latitude of the starting point (also -lat1)
    #[arg(long, allow_negative_numbers = true)]
    pub latitude1: f64,

    /// Latitude of the end point (also -lat2)
    #[arg(long, allow_negative_numbers = true)]
    pub latitude2: f64,

    /// Longitude of the starting point (also -lng1)
    #[arg(long, allow_negative_numbers = true)]
    pub longitude1: f64,

    /// Longitude of the end point (also -lng2)
    #[arg(long, allow_negative_numbers = true)]
    pub longitude2: f64,

    /// Distance between sampled points in meters
    #[arg(short, long, default_value_t = 5.0, allow_negative_numbers = true)]
    pub interval: f64,

    /// Directory images are written to (defaults to $STREETVIEW_OUTPUT_DIR, then streetview_images)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Print the sampled path as JSON lines instead of fetching images
    #[arg(long)]
    pub dry_run: bool,
}

/// Rewrite `-lat1`-style flags into the `--latitude1` form clap understands
///
/// Both `-lat1 VALUE` and `-lat1=VALUE` are handled. Everything else,
/// including arguments that are not valid UTF-8, passes through unchanged.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(|arg| {
            let arg = arg.into();
            match arg.to_str().and_then(rewrite_legacy_flag) {
                Some(rewritten) => OsString::from(rewritten),
                None => arg,
            }
        })
        .collect()
}

fn rewrite_legacy_flag(arg: &str) -> Option<String> {
    LEGACY_FLAGS.iter().find_map(|(legacy, long)| {
        if arg == *legacy {
            return Some(long.to_string());
        }
        let value = arg.strip_prefix(legacy)?.strip_prefix('=')?;
        Some(format!("{long}={value}"))
    })
}
