//! The accept/reject decision for a tile.
//!
//! A tile is kept only when all three signals agree:
//!
//! | signal                         | required |
//! |--------------------------------|----------|
//! | `is_almost_white`              | `false`  |
//! | `has_only_some_tissue`         | `true`   |
//! | `has_tissue_more_than_percent` | `true`   |
//!
//! Signals are evaluated in that order and evaluation stops at the first
//! one that rejects the tile.

use tracing::debug;

use crate::error::TissueError;
use crate::mask::Mask;

/// Default coverage a tile must reach to be kept, in percent.
pub const DEFAULT_TISSUE_PERCENT: f64 = 30.0;

/// Coverage at or above which a mask no longer has "only some" tissue, in
/// percent.
///
/// Otsu always splits a tile into two classes, so a mask that is nearly all
/// tissue means thresholding found no real background/tissue boundary.
pub const ONLY_SOME_TISSUE_PERCENT: f64 = 80.0;

/// Whether `mask` covers at least `percent` percent of its pixels.
///
/// The boundary is inclusive. `percent` must be finite and within
/// `0.0..=100.0`, and the mask must have at least one pixel.
pub fn has_tissue_more_than_percent(mask: &Mask, percent: f64) -> Result<bool, TissueError> {
    validate_percent(percent)?;
    Ok(coverage_percent(mask)? >= percent)
}

/// Whether `mask` covers strictly less than [`ONLY_SOME_TISSUE_PERCENT`].
pub fn has_only_some_tissue(mask: &Mask) -> Result<bool, TissueError> {
    Ok(coverage_percent(mask)? < ONLY_SOME_TISSUE_PERCENT)
}

/// Reject percentages outside `0..=100` (including NaN).
pub fn validate_percent(percent: f64) -> Result<(), TissueError> {
    if (0.0..=100.0).contains(&percent) {
        Ok(())
    } else {
        Err(TissueError::InvalidTissuePercent(percent))
    }
}

fn coverage_percent(mask: &Mask) -> Result<f64, TissueError> {
    mask.tissue_percent().ok_or(TissueError::EmptyMask {
        width: mask.width(),
        height: mask.height(),
    })
}

// =============================================================================
// TissueDetector Trait
// =============================================================================

/// Source of the three tissue signals, and the decision built from them.
///
/// [`Tile`](super::Tile) derives every signal from its image. Other
/// implementations (precomputed signals, test stubs) get the same decision
/// through the provided [`has_enough_tissue`](Self::has_enough_tissue).
pub trait TissueDetector {
    /// Whether the tile is blank background.
    fn is_almost_white(&self) -> Result<bool, TissueError>;

    /// Whether the tissue mask covers some, but not nearly all, of the tile.
    fn has_only_some_tissue(&self) -> Result<bool, TissueError>;

    /// Whether the tissue mask covers at least `percent` percent of the tile.
    fn has_tissue_more_than_percent(&self, percent: f64) -> Result<bool, TissueError>;

    /// Whether the tile holds enough tissue to keep.
    ///
    /// Errors from any signal are returned unchanged.
    fn has_enough_tissue(&self, percent: f64) -> Result<bool, TissueError> {
        if self.is_almost_white()? {
            debug!("Rejecting tile: almost white");
            return Ok(false);
        }
        if !self.has_only_some_tissue()? {
            debug!("Rejecting tile: tissue mask saturated");
            return Ok(false);
        }
        let enough = self.has_tissue_more_than_percent(percent)?;
        debug!(percent, enough, "Tissue coverage checked");
        Ok(enough)
    }
}
