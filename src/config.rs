//! Configuration management for the tissue classifier CLI.
//!
//! Options come from command-line arguments via clap, with environment
//! variable fallbacks using the `WSI_` prefix.
//!
//! # Example
//!
//! ```ignore
//! use clap::Parser;
//! use wsi_tissue::config::Config;
//!
//! let config = Config::parse();
//! config.validate()?;
//! ```
//!
//! # Environment Variables
//!
//! - `WSI_TISSUE_PERCENT` - Coverage a tile must reach, 0-100 (default: 30)
//! - `WSI_TILE_LEVEL` - Pyramid level recorded on every tile

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::tile::DEFAULT_TISSUE_PERCENT;

// =============================================================================
// CLI Arguments
// =============================================================================

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per tile
    #[default]
    Text,

    /// JSON array of tile reports
    Json,
}

/// WSI Tissue - classify slide tiles as tissue or background.
///
/// Decodes each tile image, computes its tissue mask and reports whether it
/// holds enough tissue to keep.
#[derive(Parser, Debug, Clone)]
#[command(name = "wsi-tissue")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Tile image files (JPEG, PNG or TIFF).
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Minimum tissue coverage, in percent, for a tile to be kept.
    #[arg(long, default_value_t = DEFAULT_TISSUE_PERCENT, env = "WSI_TISSUE_PERCENT")]
    pub tissue_percent: f64,

    /// Pyramid level the tiles were extracted from (reported only).
    #[arg(long, env = "WSI_TILE_LEVEL")]
    pub level: Option<u32>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.paths.is_empty() {
            return Err("At least one tile image path is required".to_string());
        }

        if !(0.0..=100.0).contains(&self.tissue_percent) {
            return Err(format!(
                "tissue_percent must be between 0 and 100, got {}",
                self.tissue_percent
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
