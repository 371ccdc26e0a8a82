//! WSI Tissue - classify slide tiles as tissue or background.
//!
//! This binary decodes tile images from disk and prints the tissue decision
//! for each of them.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wsi_tissue::{
    config::{Config, OutputFormat},
    tile::{Tile, TileReport},
};

fn main() -> ExitCode {
    let config = Config::parse();

    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    info!(
        "Classifying {} tile(s) at {:.1}% tissue",
        config.paths.len(),
        config.tissue_percent
    );

    let mut reports = Vec::with_capacity(config.paths.len());
    let mut failures = 0usize;

    for path in &config.paths {
        match classify(path, &config) {
            Ok(report) => {
                if config.format == OutputFormat::Text {
                    println!("{}", report.summary());
                }
                reports.push(report);
            }
            Err(e) => {
                error!("{}: {}", path.display(), e);
                failures += 1;
            }
        }
    }

    if config.format == OutputFormat::Json {
        match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize reports: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    let kept = reports.iter().filter(|r| r.enough_tissue).count();
    info!(
        "{} of {} tile(s) have enough tissue, {} failed",
        kept,
        config.paths.len(),
        failures
    );

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Decode one tile image and classify it.
fn classify(path: &Path, config: &Config) -> Result<TileReport, String> {
    let image = image::open(path).map_err(|e| format!("failed to decode image: {}", e))?;
    debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Decoded tile"
    );

    let tile = Tile::new(image, None, config.level);
    TileReport::from_tile(path.display().to_string(), &tile, config.tissue_percent)
        .map_err(|e| e.to_string())
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "wsi_tissue=debug"
    } else {
        "wsi_tissue=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
