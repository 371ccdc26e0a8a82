//! Tile placement within the source slide.

use serde::{Deserialize, Serialize};

/// Rectangle `(x_start, y_start) .. (x_end, y_end)` in slide pixel
/// coordinates.
///
/// The rectangle is informational: tissue detection never reads it, and
/// [`is_valid`](Self::is_valid) is left for the code that extracts tiles
/// to enforce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoordinatePair {
    pub x_start: u32,
    pub y_start: u32,
    pub x_end: u32,
    pub y_end: u32,
}

impl CoordinatePair {
    pub fn new(x_start: u32, y_start: u32, x_end: u32, y_end: u32) -> Self {
        Self {
            x_start,
            y_start,
            x_end,
            y_end,
        }
    }

    /// Horizontal extent, zero if the rectangle is inverted.
    pub fn width(&self) -> u32 {
        self.x_end.saturating_sub(self.x_start)
    }

    /// Vertical extent, zero if the rectangle is inverted.
    pub fn height(&self) -> u32 {
        self.y_end.saturating_sub(self.y_start)
    }

    /// Whether the end corner lies strictly after the start corner.
    pub fn is_valid(&self) -> bool {
        self.x_end > self.x_start && self.y_end > self.y_start
    }
}
