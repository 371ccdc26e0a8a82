//! What a tile image must be able to do.
//!
//! [`Tile`](super::Tile) accepts any image type and never inspects it on
//! construction. The operations tissue detection needs are expressed by
//! [`TileImage`]; types that cannot perform one report it through
//! [`FilterError::UnsupportedImage`] at the moment it is first used.

use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};

use crate::error::FilterError;
use crate::filters::Raster;

/// Capability name reported when an image cannot be reduced to luma.
pub const GRAYSCALE_CONVERSION: &str = "grayscale conversion";

/// Capability name reported when an image cannot yield its pixels.
pub const PIXEL_ARRAY_EXTRACTION: &str = "pixel array extraction";

/// Operations tissue detection needs from a tile image.
pub trait TileImage {
    /// Single-channel 8-bit intensity of the image.
    fn to_grayscale(&self) -> Result<GrayImage, FilterError>;

    /// Pixel data to feed into a filter pipeline.
    fn to_raster(&self) -> Result<Raster, FilterError>;
}

impl TileImage for DynamicImage {
    fn to_grayscale(&self) -> Result<GrayImage, FilterError> {
        Ok(self.to_luma8())
    }

    fn to_raster(&self) -> Result<Raster, FilterError> {
        Ok(Raster::Color(self.clone()))
    }
}

impl TileImage for GrayImage {
    fn to_grayscale(&self) -> Result<GrayImage, FilterError> {
        Ok(self.clone())
    }

    fn to_raster(&self) -> Result<Raster, FilterError> {
        Ok(Raster::Gray(self.clone()))
    }
}

impl TileImage for RgbImage {
    fn to_grayscale(&self) -> Result<GrayImage, FilterError> {
        Ok(DynamicImage::ImageRgb8(self.clone()).to_luma8())
    }

    fn to_raster(&self) -> Result<Raster, FilterError> {
        Ok(Raster::Color(DynamicImage::ImageRgb8(self.clone())))
    }
}

impl TileImage for RgbaImage {
    fn to_grayscale(&self) -> Result<GrayImage, FilterError> {
        Ok(DynamicImage::ImageRgba8(self.clone()).to_luma8())
    }

    fn to_raster(&self) -> Result<Raster, FilterError> {
        Ok(Raster::Color(DynamicImage::ImageRgba8(self.clone())))
    }
}

impl<T: TileImage + ?Sized> TileImage for &T {
    fn to_grayscale(&self) -> Result<GrayImage, FilterError> {
        (**self).to_grayscale()
    }

    fn to_raster(&self) -> Result<Raster, FilterError> {
        (**self).to_raster()
    }
}

/// An absent image stores fine but fails on first use.
impl<T: TileImage> TileImage for Option<T> {
    fn to_grayscale(&self) -> Result<GrayImage, FilterError> {
        match self {
            Some(image) => image.to_grayscale(),
            None => Err(unsupported(GRAYSCALE_CONVERSION, "None")),
        }
    }

    fn to_raster(&self) -> Result<Raster, FilterError> {
        match self {
            Some(image) => image.to_raster(),
            None => Err(unsupported(PIXEL_ARRAY_EXTRACTION, "None")),
        }
    }
}

fn unsupported(capability: &'static str, value: impl Into<String>) -> FilterError {
    FilterError::UnsupportedImage {
        capability,
        value: value.into(),
    }
}

// =============================================================================
// PixelArray
// =============================================================================

/// Raw interleaved 8-bit pixels, as handed over by a slide decoder.
///
/// The layout is trusted on construction and only checked when the pixels
/// are used. 1 (luma), 3 (RGB) and 4 (RGBA) channels are supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelArray {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub data: Vec<u8>,
}

impl PixelArray {
    pub fn new(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            channels,
            data,
        }
    }

    fn describe(&self) -> String {
        format!(
            "{}x{} pixel array with {} channel(s) and {} bytes",
            self.width,
            self.height,
            self.channels,
            self.data.len()
        )
    }

    fn decode(&self, capability: &'static str) -> Result<DynamicImage, FilterError> {
        let (w, h) = (self.width, self.height);
        let data = self.data.clone();
        let image = match self.channels {
            1 => GrayImage::from_raw(w, h, data).map(DynamicImage::ImageLuma8),
            3 => RgbImage::from_raw(w, h, data).map(DynamicImage::ImageRgb8),
            4 => RgbaImage::from_raw(w, h, data).map(DynamicImage::ImageRgba8),
            _ => None,
        };
        image.ok_or_else(|| unsupported(capability, self.describe()))
    }
}

impl TileImage for PixelArray {
    fn to_grayscale(&self) -> Result<GrayImage, FilterError> {
        Ok(self.decode(GRAYSCALE_CONVERSION)?.to_luma8())
    }

    fn to_raster(&self) -> Result<Raster, FilterError> {
        Ok(Raster::Color(self.decode(PIXEL_ARRAY_EXTRACTION)?))
    }
}
