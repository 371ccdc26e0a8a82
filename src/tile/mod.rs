//! Tiles and tissue detection.
//!
//! This module decides whether a tile cropped from a Whole Slide Image holds
//! enough tissue to be worth processing, or is mostly empty glass.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          TissueDetector Trait           │
//! │  not almost white                       │
//! │  AND only some tissue (< 80%)           │
//! │  AND tissue >= requested percent        │
//! └────────────────────┬────────────────────┘
//!                      │
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │                 Tile                    │
//! │  ┌──────────────┐  ┌─────────────────┐  │
//! │  │ near-white   │  │  tissue mask    │  │
//! │  │ statistics   │  │  (Compose)      │  │
//! │  └──────────────┘  └─────────────────┘  │
//! └────────────────────┬────────────────────┘
//!                      │
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │           TileImage Trait               │
//! │  (grayscale, pixel array extraction)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Components
//!
//! - [`Tile`]: Image plus its slide coordinates and pyramid level
//! - [`TileImage`]: Capabilities an image must offer, checked on first use
//! - [`PixelArray`]: Raw decoded pixels from a slide reader
//! - [`TissueDetector`]: The three tissue signals and the decision built on them
//! - [`TileReport`]: Serializable outcome for one tile
//!
//! # Example
//!
//! ```
//! use image::{GrayImage, Luma};
//! use wsi_tissue::tile::{Tile, TissueDetector, DEFAULT_TISSUE_PERCENT};
//!
//! let blank = Tile::new(GrayImage::from_pixel(32, 32, Luma([250])), None, 0);
//! assert!(!blank.has_enough_tissue(DEFAULT_TISSUE_PERCENT).unwrap());
//! ```

mod capability;
mod coords;
mod decision;
mod report;
mod tissue;

pub use capability::{PixelArray, TileImage, GRAYSCALE_CONVERSION, PIXEL_ARRAY_EXTRACTION};
pub use coords::CoordinatePair;
pub use decision::{
    has_only_some_tissue, has_tissue_more_than_percent, validate_percent, TissueDetector,
    DEFAULT_TISSUE_PERCENT, ONLY_SOME_TISSUE_PERCENT,
};
pub use report::TileReport;
pub use tissue::{enough_tissue_mask_filters, Tile};
