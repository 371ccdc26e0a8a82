//! Intensity statistics and the near-white background heuristic.

use image::GrayImage;

/// Mean normalised intensity at or above which a tile may be blank glass.
pub const NEAR_WHITE_MEAN_THRESHOLD: f64 = 0.9;

/// Intensity spread at or below which a bright tile counts as uniform.
pub const NEAR_WHITE_STD_THRESHOLD: f64 = 0.09;

/// Mean and standard deviation of 8-bit intensities, scaled to `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrayStatistics {
    pub mean: f64,
    pub std: f64,
}

impl GrayStatistics {
    /// Compute statistics over every pixel, `None` for an empty image.
    pub fn from_image(gray: &GrayImage) -> Option<Self> {
        let count = gray.width() as usize * gray.height() as usize;
        if count == 0 {
            return None;
        }

        let values = || gray.pixels().map(|p| p.0[0] as f64 / 255.0);
        let mean = values().sum::<f64>() / count as f64;
        let variance = values().map(|v| (v - mean) * (v - mean)).sum::<f64>() / count as f64;

        Some(Self {
            mean,
            std: variance.sqrt(),
        })
    }
}

/// Whether a grayscale tile is almost uniformly white.
///
/// Bright, low-variance tiles are background glass: Otsu would still split
/// them into two classes and report spurious tissue.
pub fn is_almost_white(gray: &GrayImage) -> bool {
    match GrayStatistics::from_image(gray) {
        Some(stats) => {
            stats.mean >= NEAR_WHITE_MEAN_THRESHOLD && stats.std <= NEAR_WHITE_STD_THRESHOLD
        }
        None => false,
    }
}
