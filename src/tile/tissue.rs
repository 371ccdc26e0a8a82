//! Tiles and their tissue mask.

use tracing::debug;

use super::capability::TileImage;
use super::coords::CoordinatePair;
use super::decision::{self, TissueDetector};
use crate::error::TissueError;
use crate::filters::{
    is_almost_white, BinaryDilation, BinaryFillHoles, Compose, OtsuThreshold, RgbToGrayscale,
    StructuringElement, FILL_HOLES_STRUCTURE_SIZE,
};
use crate::mask::Mask;

/// Build the tissue-mask pipeline: grayscale, Otsu threshold, dilation,
/// then hole filling with a 5x5 all-ones element.
pub fn enough_tissue_mask_filters() -> Compose {
    Compose::new(vec![
        Box::new(RgbToGrayscale),
        Box::new(OtsuThreshold),
        Box::new(BinaryDilation::default()),
        Box::new(BinaryFillHoles::new(StructuringElement::square(
            FILL_HOLES_STRUCTURE_SIZE / 2,
        ))),
    ])
}

// =============================================================================
// Tile
// =============================================================================

/// A region cropped from a slide, with where and at which level it was
/// taken.
///
/// The image is stored as given. Nothing is validated until a tissue query
/// needs it, and nothing derived from it is cached.
///
/// # Example
///
/// ```
/// use image::{Rgb, RgbImage};
/// use wsi_tissue::{CoordinatePair, Tile, TissueDetector};
///
/// let image = RgbImage::from_fn(64, 64, |x, y| {
///     if (x as i32 - 32).pow(2) + (y as i32 - 32).pow(2) < 400 {
///         Rgb([120, 60, 140])
///     } else {
///         Rgb([235, 235, 235])
///     }
/// });
/// let tile = Tile::new(image, CoordinatePair::new(0, 0, 64, 64), 0);
///
/// assert!(tile.has_enough_tissue(20.0).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tile<I> {
    image: I,
    coords: Option<CoordinatePair>,
    level: Option<u32>,
}

impl<I> Tile<I> {
    /// Create a tile. `coords` and `level` may be `None`.
    pub fn new(
        image: I,
        coords: impl Into<Option<CoordinatePair>>,
        level: impl Into<Option<u32>>,
    ) -> Self {
        Self {
            image,
            coords: coords.into(),
            level: level.into(),
        }
    }

    /// The stored image.
    pub fn image(&self) -> &I {
        &self.image
    }

    /// Placement in the slide, if recorded.
    pub fn coords(&self) -> Option<CoordinatePair> {
        self.coords
    }

    /// Pyramid level, 0 being full resolution.
    pub fn level(&self) -> Option<u32> {
        self.level
    }
}

impl<I: TileImage> Tile<I> {
    /// Run `filters` over the image and return the resulting mask.
    pub fn tissue_mask_with(&self, filters: &Compose) -> Result<Mask, TissueError> {
        let raster = self.image.to_raster()?;
        let output = filters.apply(raster)?;
        let actual = output.kind();
        output
            .into_mask()
            .ok_or(TissueError::NotAMask { actual })
    }

    /// Tissue mask from [`enough_tissue_mask_filters`].
    pub fn tissue_mask(&self) -> Result<Mask, TissueError> {
        self.tissue_mask_with(&enough_tissue_mask_filters())
    }

    /// Fraction (0-1) of the tile covered by tissue.
    pub fn tissue_ratio(&self) -> Result<f64, TissueError> {
        let mask = self.tissue_mask()?;
        match mask.tissue_percent() {
            Some(percent) => Ok(percent / 100.0),
            None => Err(TissueError::EmptyMask {
                width: mask.width(),
                height: mask.height(),
            }),
        }
    }
}

impl<I: TileImage> TissueDetector for Tile<I> {
    fn is_almost_white(&self) -> Result<bool, TissueError> {
        let gray = self.image.to_grayscale()?;
        Ok(is_almost_white(&gray))
    }

    fn has_only_some_tissue(&self) -> Result<bool, TissueError> {
        decision::has_only_some_tissue(&self.tissue_mask()?)
    }

    fn has_tissue_more_than_percent(&self, percent: f64) -> Result<bool, TissueError> {
        decision::validate_percent(percent)?;
        let mask = self.tissue_mask()?;
        let result = decision::has_tissue_more_than_percent(&mask, percent)?;
        debug!(
            coords = ?self.coords,
            level = ?self.level,
            tissue_percent = ?mask.tissue_percent(),
            percent,
            result,
            "Tissue percent check"
        );
        Ok(result)
    }
}
