//! Street View CLI - capture images at fixed intervals between two points

use clap::Parser;
use streetview::cli::normalize_args;
use streetview::{capture, Cli, FetchConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    let config = FetchConfig::from_cli(&cli)?;

    let path = config.sample_path();
    tracing::info!(
        start = %config.start,
        end = %config.end,
        interval = config.interval,
        distance = config.start.distance_to(&config.end),
        points = path.len(),
        "sampled capture points"
    );

    if cli.dry_run {
        for coord in &path {
            println!("{}", serde_json::to_string(coord)?);
        }
        return Ok(());
    }

    let outcome = capture(&config.client(), &path, &config.output_dir).await;
    if !outcome.is_success() {
        eprintln!("{outcome}");
        std::process::exit(outcome.exit_code());
    }
    println!("{outcome}");

    Ok(())
}
