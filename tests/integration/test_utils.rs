//! Synthetic tile builders shared by the integration tests.

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};

/// H&E-like purple stain.
pub const STAIN: [u8; 3] = [150, 80, 170];

/// Slightly off-white slide glass.
pub const GLASS: [u8; 3] = [238, 236, 240];

/// RGB tile with a filled disk of stain centred in glass.
pub fn create_disk_tile(size: u32, radius: u32) -> RgbImage {
    let c = size as i64 / 2;
    let r = radius as i64;
    RgbImage::from_fn(size, size, |x, y| {
        let (dx, dy) = (x as i64 - c, y as i64 - c);
        if dx * dx + dy * dy <= r * r {
            Rgb(STAIN)
        } else {
            Rgb(GLASS)
        }
    })
}

/// RGB tile whose left `stained_columns` columns are stain.
pub fn create_band_tile(width: u32, height: u32, stained_columns: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, _| {
        if x < stained_columns {
            Rgb(STAIN)
        } else {
            Rgb(GLASS)
        }
    })
}

/// RGB tile with a stained ring enclosing a glass core.
pub fn create_ring_tile(size: u32, thickness: u32, margin: u32) -> RgbImage {
    RgbImage::from_fn(size, size, |x, y| {
        let inside_outer =
            x >= margin && y >= margin && x < size - margin && y < size - margin;
        let inner = margin + thickness;
        let inside_inner = x >= inner && y >= inner && x < size - inner && y < size - inner;
        if inside_outer && !inside_inner {
            Rgb(STAIN)
        } else {
            Rgb(GLASS)
        }
    })
}

/// Uniform near-white tile.
pub fn create_blank_tile(size: u32) -> RgbImage {
    RgbImage::from_pixel(size, size, Rgb([247, 247, 247]))
}

/// Same content as `rgb` in the other supported layouts.
pub fn all_layouts(rgb: &RgbImage) -> (GrayImage, RgbImage, RgbaImage) {
    let dynamic = DynamicImage::ImageRgb8(rgb.clone());
    (dynamic.to_luma8(), rgb.clone(), dynamic.to_rgba8())
}

/// Uniform RGBA tile, fully transparent.
pub fn create_transparent_tile(size: u32, value: u8) -> RgbaImage {
    RgbaImage::from_pixel(size, size, Rgba([value, 0, 0, 0]))
}

/// Grayscale gradient.
pub fn create_gradient_tile(width: u32, height: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| Luma([((x * 5 + y * 3) % 256) as u8]))
}
