//! Image filters and the pipeline that chains them.
//!
//! Tissue detection is expressed as an ordered list of filters, each turning
//! one [`Raster`] into another:
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │RgbToGrayscale│──▶│OtsuThreshold │──▶│BinaryDilation│──▶│BinaryFillHole│
//! │ color → gray │   │ gray → mask  │   │ mask → mask  │   │ mask → mask  │
//! └──────────────┘   └──────────────┘   └──────────────┘   └──────────────┘
//! ```
//!
//! The list is data: a [`Compose`] holds boxed [`ImageFilter`] stages that
//! can be inspected, reordered by whoever builds it, and replayed on any
//! number of inputs.
//!
//! # Example
//!
//! ```
//! use image::{DynamicImage, RgbImage, Rgb};
//! use wsi_tissue::filters::{Compose, OtsuThreshold, Raster, RgbToGrayscale};
//!
//! let pipeline = Compose::new(vec![
//!     Box::new(RgbToGrayscale),
//!     Box::new(OtsuThreshold),
//! ]);
//!
//! let image = RgbImage::from_fn(8, 8, |x, _| if x < 4 { Rgb([40, 20, 60]) } else { Rgb([240, 240, 240]) });
//! let output = pipeline.apply(Raster::Color(DynamicImage::ImageRgb8(image))).unwrap();
//! assert_eq!(output.kind(), "mask");
//! ```

mod intensity;
mod morphology;
mod statistics;

use std::fmt;

use image::{DynamicImage, GrayImage};
use tracing::trace;

use crate::error::FilterError;
use crate::mask::Mask;

pub use intensity::{OtsuThreshold, RgbToGrayscale};
pub use morphology::{
    BinaryDilation, BinaryFillHoles, StructuringElement, DEFAULT_DILATION_DISK_RADIUS,
    FILL_HOLES_STRUCTURE_SIZE,
};
pub use statistics::{
    is_almost_white, GrayStatistics, NEAR_WHITE_MEAN_THRESHOLD, NEAR_WHITE_STD_THRESHOLD,
};

// =============================================================================
// Raster
// =============================================================================

/// Pixel data flowing between pipeline stages.
#[derive(Debug, Clone, PartialEq)]
pub enum Raster {
    /// Decoded image with any channel layout (RGB, RGBA, luma, ...)
    Color(DynamicImage),

    /// Single-channel 8-bit intensity
    Gray(GrayImage),

    /// Boolean mask
    Mask(Mask),
}

impl Raster {
    /// Short name of the raster kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Raster::Color(_) => "color",
            Raster::Gray(_) => "gray",
            Raster::Mask(_) => "mask",
        }
    }

    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Raster::Color(img) => (img.width(), img.height()),
            Raster::Gray(img) => img.dimensions(),
            Raster::Mask(mask) => mask.dimensions(),
        }
    }

    /// Consume the raster, returning the mask if it is one.
    pub fn into_mask(self) -> Option<Mask> {
        match self {
            Raster::Mask(mask) => Some(mask),
            _ => None,
        }
    }
}

// =============================================================================
// ImageFilter Trait
// =============================================================================

/// A single pipeline stage.
///
/// Implementations must be pure: the same input always yields the same
/// output, and nothing is retained between calls.
pub trait ImageFilter: fmt::Debug + Send + Sync {
    /// Stage name, stable across releases.
    fn name(&self) -> &'static str;

    /// Transform `input` into the next raster.
    fn apply(&self, input: Raster) -> Result<Raster, FilterError>;

    /// Structuring element used by morphological stages.
    fn structure(&self) -> Option<&StructuringElement> {
        None
    }
}

// =============================================================================
// Compose
// =============================================================================

/// Ordered chain of filters.
///
/// Each stage receives the previous stage's output. The first error stops
/// the chain and is returned as is.
#[derive(Debug, Default)]
pub struct Compose {
    filters: Vec<Box<dyn ImageFilter>>,
}

impl Compose {
    /// Create a pipeline from stages in application order.
    pub fn new(filters: Vec<Box<dyn ImageFilter>>) -> Self {
        Self { filters }
    }

    /// Stages in application order.
    pub fn filters(&self) -> &[Box<dyn ImageFilter>] {
        &self.filters
    }

    /// Stage names in application order.
    pub fn names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether the pipeline has no stages (and so returns its input).
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Run every stage in order.
    pub fn apply(&self, input: Raster) -> Result<Raster, FilterError> {
        self.filters.iter().try_fold(input, |raster, filter| {
            let (width, height) = raster.dimensions();
            trace!(
                filter = filter.name(),
                input = raster.kind(),
                width,
                height,
                "Applying filter"
            );
            filter.apply(raster)
        })
    }
}
