//! Serializable summary of a tile's tissue decision.

use serde::Serialize;

use super::capability::TileImage;
use super::coords::CoordinatePair;
use super::decision::{self, TissueDetector};
use super::tissue::Tile;
use crate::error::TissueError;
use crate::mask::Mask;

/// Everything the classifier found out about one tile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileReport {
    /// Where the tile came from, usually a file path
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coords: Option<CoordinatePair>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    pub width: u32,
    pub height: u32,
    /// Tissue coverage of the mask, 0-100
    pub tissue_percent: f64,
    pub almost_white: bool,
    /// Threshold the decision was made against
    pub threshold_percent: f64,
    pub enough_tissue: bool,
}

impl TileReport {
    /// Classify `tile` against `percent` and collect the result.
    ///
    /// The mask is computed once and shared by the coverage checks.
    pub fn from_tile<I: TileImage>(
        source: impl Into<String>,
        tile: &Tile<I>,
        percent: f64,
    ) -> Result<Self, TissueError> {
        decision::validate_percent(percent)?;

        let almost_white = tile.is_almost_white()?;
        let mask = tile.tissue_mask()?;
        let tissue_percent = mask.tissue_percent().ok_or(TissueError::EmptyMask {
            width: mask.width(),
            height: mask.height(),
        })?;

        let enough_tissue = ComputedSignals {
            almost_white,
            mask: &mask,
        }
        .has_enough_tissue(percent)?;

        Ok(Self {
            source: source.into(),
            coords: tile.coords(),
            level: tile.level(),
            width: mask.width(),
            height: mask.height(),
            tissue_percent,
            almost_white,
            threshold_percent: percent,
            enough_tissue,
        })
    }

    /// One-line human readable form.
    pub fn summary(&self) -> String {
        let verdict = if self.enough_tissue {
            "tissue"
        } else if self.almost_white {
            "background (almost white)"
        } else {
            "background"
        };
        format!(
            "{}: {} ({}x{}, {:.1}% tissue, threshold {:.1}%)",
            self.source, verdict, self.width, self.height, self.tissue_percent, self.threshold_percent
        )
    }
}

/// Signals derived from an already computed mask.
struct ComputedSignals<'a> {
    almost_white: bool,
    mask: &'a Mask,
}

impl TissueDetector for ComputedSignals<'_> {
    fn is_almost_white(&self) -> Result<bool, TissueError> {
        Ok(self.almost_white)
    }

    fn has_only_some_tissue(&self) -> Result<bool, TissueError> {
        decision::has_only_some_tissue(self.mask)
    }

    fn has_tissue_more_than_percent(&self, percent: f64) -> Result<bool, TissueError> {
        decision::has_tissue_more_than_percent(self.mask, percent)
    }
}
