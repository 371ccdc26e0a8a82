//! Boolean raster masks.
//!
//! A [`Mask`] marks which pixels of a tile were classified as tissue. It is
//! produced by the thresholding stage of the filter pipeline and refined by
//! the morphological stages. Masks are stored row-major, one `bool` per
//! pixel.

use image::{GrayImage, Luma};

use crate::error::FilterError;

/// Row-major boolean raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    data: Vec<bool>,
}

impl Mask {
    /// Create an all-`false` mask.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![false; width as usize * height as usize],
        }
    }

    /// Create a mask filled with `value`.
    pub fn filled(width: u32, height: u32, value: bool) -> Self {
        Self {
            width,
            height,
            data: vec![value; width as usize * height as usize],
        }
    }

    /// Wrap row-major pixel values.
    ///
    /// Fails if `data` does not hold exactly `width * height` values.
    pub fn from_vec(width: u32, height: u32, data: Vec<bool>) -> Result<Self, FilterError> {
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

    /// Build a mask from rows of numeric values, non-zero meaning `true`.
    ///
    /// All rows must have the same length.
    ///
    /// ```
    /// use wsi_tissue::Mask;
    ///
    /// let mask = Mask::from_rows(&[[0, 1, 1], [1, 1, 0]]).unwrap();
    /// assert_eq!(mask.shape(), (2, 3));
    /// assert_eq!(mask.count_true(), 4);
    /// ```
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, FilterError> {
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut data = Vec::with_capacity(width * rows.len());

        for row in rows {
            let row = row.as_ref();
            if row.len() != width {
                return Err(FilterError::ShapeMismatch {
                    expected: width,
                    actual: row.len(),
                });
            }
            data.extend(row.iter().map(|&v| v != 0));
        }

        Ok(Self {
            width: width as u32,
            height: rows.len() as u32,
            data,
        })
    }

    /// Threshold an 8-bit image: pixels for which `predicate` holds become `true`.
    pub fn from_image(image: &GrayImage, predicate: impl Fn(u8) -> bool) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            data: image.pixels().map(|p| predicate(p.0[0])).collect(),
        }
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`, matching `image` conventions.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// `(rows, cols)`, matching array conventions.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.height as usize, self.width as usize)
    }

    /// Total number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the mask has zero pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at `(x, y)`, or `None` outside the mask.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<bool> {
        if x < self.width && y < self.height {
            Some(self.data[self.index(x, y)])
        } else {
            None
        }
    }

    /// Set the value at `(x, y)`. Out-of-range coordinates are ignored.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: bool) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.data[idx] = value;
        }
    }

    /// Row-major pixel values.
    pub fn as_slice(&self) -> &[bool] {
        &self.data
    }

    /// Number of `true` pixels.
    pub fn count_true(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    /// Percentage (0-100) of `true` pixels, `None` for an empty mask.
    pub fn tissue_percent(&self) -> Option<f64> {
        if self.data.is_empty() {
            return None;
        }
        Some(self.count_true() as f64 * 100.0 / self.data.len() as f64)
    }

    /// Render as an 8-bit image, `true` as 255 and `false` as 0.
    pub fn to_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |x, y| {
            Luma([if self.data[self.index(x, y)] { 255 } else { 0 }])
        })
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
