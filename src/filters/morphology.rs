//! Binary morphology on tissue masks.
//!
//! Dilation runs on `imageproc`'s grayscale morphology with a disk footprint.
//! Hole filling floods the background using the offsets of a
//! [`StructuringElement`], a small odd-sized boolean kernel whose centre
//! cell is the origin.

use std::collections::VecDeque;

use imageproc::morphology::{grayscale_dilate, Mask as Footprint};

use super::{ImageFilter, Raster};
use crate::error::FilterError;
use crate::mask::Mask;

/// Radius of the disk used to dilate thresholded tissue.
pub const DEFAULT_DILATION_DISK_RADIUS: u8 = 5;

/// Side length of the square element used for hole filling.
pub const FILL_HOLES_STRUCTURE_SIZE: u32 = 5;

// =============================================================================
// Structuring Element
// =============================================================================

/// Odd-sized boolean kernel centred on its middle cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuringElement {
    width: u32,
    height: u32,
    data: Vec<bool>,
}

impl StructuringElement {
    /// Create an element from row-major cells.
    ///
    /// Both dimensions must be odd so the element has a centre.
    pub fn new(width: u32, height: u32, data: Vec<bool>) -> Result<Self, FilterError> {
        if width % 2 == 0 || height % 2 == 0 {
            return Err(FilterError::InvalidStructuringElement { width, height });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(FilterError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// All-ones element of the given size.
    pub fn ones(width: u32, height: u32) -> Result<Self, FilterError> {
        Self::new(width, height, vec![true; width as usize * height as usize])
    }

    /// All-ones square with side `2 * radius + 1`.
    pub fn square(radius: u32) -> Self {
        let side = 2 * radius + 1;
        Self {
            width: side,
            height: side,
            data: vec![true; side as usize * side as usize],
        }
    }

    /// Width of the element.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the element.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(dx, dy)` offsets of the set cells, relative to the centre.
    pub fn offsets(&self) -> Vec<(i64, i64)> {
        let cx = (self.width / 2) as i64;
        let cy = (self.height / 2) as i64;
        let width = self.width as usize;

        self.data
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v)
            .map(|(i, _)| ((i % width) as i64 - cx, (i / width) as i64 - cy))
            .collect()
    }
}

// =============================================================================
// BinaryDilation
// =============================================================================

/// Grow `true` regions by a disk.
///
/// A pixel becomes `true` when a `true` pixel lies within `radius` of it.
/// Pixels outside the mask count as `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryDilation {
    radius: u8,
}

impl BinaryDilation {
    /// Dilate with a disk of the given radius.
    pub fn new(radius: u8) -> Self {
        Self { radius }
    }

    /// Disk radius in pixels.
    pub fn radius(&self) -> u8 {
        self.radius
    }

    /// Dilate `mask`.
    pub fn dilate(&self, mask: &Mask) -> Mask {
        if mask.is_empty() {
            return mask.clone();
        }
        let dilated = grayscale_dilate(&mask.to_image(), &Footprint::disk(self.radius));
        Mask::from_image(&dilated, |v| v > 0)
    }
}

impl Default for BinaryDilation {
    fn default() -> Self {
        Self::new(DEFAULT_DILATION_DISK_RADIUS)
    }
}

impl ImageFilter for BinaryDilation {
    fn name(&self) -> &'static str {
        "BinaryDilation"
    }

    fn apply(&self, input: Raster) -> Result<Raster, FilterError> {
        match input {
            Raster::Mask(mask) => Ok(Raster::Mask(self.dilate(&mask))),
            other => Err(FilterError::UnexpectedInput {
                filter: self.name(),
                expected: "mask",
                actual: other.kind(),
            }),
        }
    }
}

// =============================================================================
// BinaryFillHoles
// =============================================================================

/// Fill background regions enclosed by `true` pixels.
///
/// Background is flooded from outside the mask, stepping by the offsets of
/// the structuring element. Every `false` pixel the flood cannot reach is a
/// hole and becomes `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryFillHoles {
    structure: StructuringElement,
}

impl BinaryFillHoles {
    /// Fill holes with a custom connectivity element.
    pub fn new(structure: StructuringElement) -> Self {
        Self { structure }
    }

    /// Fill the holes of `mask`.
    pub fn fill(&self, mask: &Mask) -> Mask {
        let (width, height) = mask.dimensions();
        let w = width as i64;
        let h = height as i64;
        let offsets: Vec<(i64, i64)> = self
            .structure
            .offsets()
            .into_iter()
            .filter(|&o| o != (0, 0))
            .collect();

        let idx = |x: i64, y: i64| (y * w + x) as usize;
        let mut reached = vec![false; mask.len()];
        let mut queue = VecDeque::new();

        // Seed with background pixels the element can reach from outside
        for y in 0..h {
            for x in 0..w {
                if mask.as_slice()[idx(x, y)] {
                    continue;
                }
                let touches_outside = offsets.iter().any(|&(dx, dy)| {
                    let (nx, ny) = (x + dx, y + dy);
                    nx < 0 || ny < 0 || nx >= w || ny >= h
                });
                if touches_outside {
                    reached[idx(x, y)] = true;
                    queue.push_back((x, y));
                }
            }
        }

        while let Some((x, y)) = queue.pop_front() {
            for &(dx, dy) in &offsets {
                let (nx, ny) = (x + dx, y + dy);
                if nx < 0 || ny < 0 || nx >= w || ny >= h {
                    continue;
                }
                let i = idx(nx, ny);
                if !reached[i] && !mask.as_slice()[i] {
                    reached[i] = true;
                    queue.push_back((nx, ny));
                }
            }
        }

        let data = mask
            .as_slice()
            .iter()
            .zip(&reached)
            .map(|(&tissue, &outside)| tissue || !outside)
            .collect();

        // Shape is unchanged, so this cannot fail
        Mask::from_vec(width, height, data).unwrap_or_else(|_| mask.clone())
    }
}

impl Default for BinaryFillHoles {
    fn default() -> Self {
        Self::new(StructuringElement::square(FILL_HOLES_STRUCTURE_SIZE / 2))
    }
}

impl ImageFilter for BinaryFillHoles {
    fn name(&self) -> &'static str {
        "BinaryFillHoles"
    }

    fn apply(&self, input: Raster) -> Result<Raster, FilterError> {
        match input {
            Raster::Mask(mask) => Ok(Raster::Mask(self.fill(&mask))),
            other => Err(FilterError::UnexpectedInput {
                filter: self.name(),
                expected: "mask",
                actual: other.kind(),
            }),
        }
    }

    fn structure(&self) -> Option<&StructuringElement> {
        Some(&self.structure)
    }
}
