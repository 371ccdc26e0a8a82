//! # WSI Tissue
//!
//! Tissue detection for tiles cropped from Whole Slide Images (WSI).
//!
//! Large slide images are mostly empty glass. Before tiles are sent to
//! training or analysis, this library decides which of them actually show
//! tissue.
//!
//! ## Features
//!
//! - **Declarative filter pipeline**: grayscale, Otsu threshold, dilation and
//!   hole filling chained as inspectable data
//! - **Lazy image validation**: any image type can be stored in a tile; missing
//!   capabilities surface as errors when tissue is first queried
//! - **Pure decisions**: masks are recomputed on every query, so tiles can be
//!   classified from any number of threads
//!
//! ## Architecture
//!
//! - [`mask`] - Boolean tissue masks
//! - [`filters`] - Filter primitives and the [`Compose`] pipeline
//! - [`tile`] - Tiles, image capabilities and the tissue decision
//! - [`config`] - CLI configuration types
//!
//! ## Example
//!
//! ```rust
//! use image::{Rgb, RgbImage};
//! use wsi_tissue::{Tile, TissueDetector, DEFAULT_TISSUE_PERCENT};
//!
//! // Purple stain on the left half, glass on the right
//! let image = RgbImage::from_fn(64, 64, |x, _| {
//!     if x < 24 { Rgb([140, 70, 160]) } else { Rgb([240, 238, 242]) }
//! });
//!
//! let tile = Tile::new(image, None, 0);
//! assert!(tile.has_enough_tissue(DEFAULT_TISSUE_PERCENT).unwrap());
//! ```

pub mod config;
pub mod error;
pub mod filters;
pub mod mask;
pub mod tile;

// Re-export commonly used types
pub use config::{Config, OutputFormat};
pub use error::{FilterError, TissueError};
pub use filters::{
    is_almost_white, BinaryDilation, BinaryFillHoles, Compose, GrayStatistics, ImageFilter,
    OtsuThreshold, Raster, RgbToGrayscale, StructuringElement,
};
pub use mask::Mask;
pub use tile::{
    enough_tissue_mask_filters, has_tissue_more_than_percent, CoordinatePair, PixelArray, Tile,
    TileImage, TileReport, TissueDetector, DEFAULT_TISSUE_PERCENT, ONLY_SOME_TISSUE_PERCENT,
};
