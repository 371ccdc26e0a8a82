//! Intensity filters: grayscale conversion and global thresholding.

use image::GrayImage;
use imageproc::contrast::otsu_level;

use super::{ImageFilter, Raster};
use crate::error::FilterError;
use crate::mask::Mask;

// =============================================================================
// RgbToGrayscale
// =============================================================================

/// Reduce a color image to single-channel luma.
///
/// Alpha is discarded. Grayscale input passes through untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RgbToGrayscale;

impl ImageFilter for RgbToGrayscale {
    fn name(&self) -> &'static str {
        "RgbToGrayscale"
    }

    fn apply(&self, input: Raster) -> Result<Raster, FilterError> {
        match input {
            Raster::Color(img) => Ok(Raster::Gray(img.to_luma8())),
            Raster::Gray(gray) => Ok(Raster::Gray(gray)),
            Raster::Mask(_) => Err(FilterError::UnexpectedInput {
                filter: self.name(),
                expected: "color or gray",
                actual: "mask",
            }),
        }
    }
}

// =============================================================================
// OtsuThreshold
// =============================================================================

/// Binarize a grayscale image with Otsu's method.
///
/// Stained tissue is darker than the glass around it, so pixels at or below
/// the Otsu level are marked `true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OtsuThreshold;

impl OtsuThreshold {
    /// Threshold `gray` at its Otsu level.
    pub fn threshold(&self, gray: &GrayImage) -> Mask {
        if gray.width() == 0 || gray.height() == 0 {
            return Mask::new(gray.width(), gray.height());
        }
        let level = otsu_level(gray);
        Mask::from_image(gray, |v| v <= level)
    }
}

impl ImageFilter for OtsuThreshold {
    fn name(&self) -> &'static str {
        "OtsuThreshold"
    }

    fn apply(&self, input: Raster) -> Result<Raster, FilterError> {
        match input {
            Raster::Gray(gray) => Ok(Raster::Mask(self.threshold(&gray))),
            other => Err(FilterError::UnexpectedInput {
                filter: self.name(),
                expected: "gray",
                actual: other.kind(),
            }),
        }
    }
}
