//! Tile-level tissue decision tests.
//!
//! Tests verify:
//! - Stained tiles are kept, blank and saturated tiles are rejected
//! - Masks keep the tile's shape for every channel layout
//! - Images lacking a capability fail on first query, not on construction
//! - Percentage checks on real masks are inclusive and monotonic

use image::RgbImage;

use wsi_tissue::{
    BinaryDilation, Compose, CoordinatePair, FilterError, OtsuThreshold, PixelArray,
    RgbToGrayscale, Tile, TileReport, TissueDetector, TissueError, DEFAULT_TISSUE_PERCENT,
};

use super::test_utils::{
    all_layouts, create_band_tile, create_blank_tile, create_disk_tile, create_ring_tile,
    create_transparent_tile,
};

// =============================================================================
// Decisions
// =============================================================================

#[test]
fn test_stained_disk_is_kept() {
    let tile = Tile::new(create_disk_tile(64, 20), CoordinatePair::new(0, 0, 64, 64), 0);

    assert!(!tile.is_almost_white().unwrap());
    assert!(tile.has_only_some_tissue().unwrap());
    assert!(tile.has_tissue_more_than_percent(DEFAULT_TISSUE_PERCENT).unwrap());
    assert!(tile.has_enough_tissue(DEFAULT_TISSUE_PERCENT).unwrap());
}

#[test]
fn test_small_disk_fails_high_threshold() {
    let tile = Tile::new(create_disk_tile(64, 8), None, 0);

    assert!(!tile.is_almost_white().unwrap());
    assert!(!tile.has_enough_tissue(60.0).unwrap());
    assert!(tile.has_enough_tissue(1.0).unwrap());
}

#[test]
fn test_blank_tile_is_rejected() {
    let tile = Tile::new(create_blank_tile(64), None, 0);

    assert!(tile.is_almost_white().unwrap());
    assert!(!tile.has_enough_tissue(0.0).unwrap());
}

#[test]
fn test_saturated_tile_is_rejected() {
    let tile = Tile::new(create_band_tile(64, 64, 60), None, 0);

    assert!(!tile.is_almost_white().unwrap());
    assert!(!tile.has_only_some_tissue().unwrap());
    assert!(tile.has_tissue_more_than_percent(10.0).unwrap());
    assert!(!tile.has_enough_tissue(10.0).unwrap());
}

#[test]
fn test_enclosed_glass_is_filled() {
    let tile = Tile::new(create_ring_tile(64, 6, 8), None, 0);

    let filled = tile.tissue_mask().unwrap();
    assert_eq!(filled.get(32, 32), Some(true));
    assert_eq!(filled.get(0, 0), Some(false));

    let unfilled = tile
        .tissue_mask_with(&Compose::new(vec![
            Box::new(RgbToGrayscale),
            Box::new(OtsuThreshold),
            Box::new(BinaryDilation::default()),
        ]))
        .unwrap();
    assert_eq!(unfilled.get(32, 32), Some(false));
    assert!(filled.count_true() > unfilled.count_true());
}

#[test]
fn test_report_agrees_with_detector() {
    let tiles = [
        create_disk_tile(64, 20),
        create_disk_tile(64, 8),
        create_blank_tile(64),
        create_band_tile(64, 64, 60),
        create_band_tile(64, 64, 20),
    ];

    for (i, image) in tiles.into_iter().enumerate() {
        let tile = Tile::new(image, None, 0);
        let report = TileReport::from_tile(format!("tile-{}", i), &tile, 25.0).unwrap();
        assert_eq!(
            report.enough_tissue,
            tile.has_enough_tissue(25.0).unwrap(),
            "tile-{}",
            i
        );
    }
}

// =============================================================================
// Mask Properties
// =============================================================================

#[test]
fn test_mask_shape_for_every_layout() {
    let rgb = create_band_tile(37, 23, 10);
    let (gray, rgb, rgba) = all_layouts(&rgb);

    assert_eq!(Tile::new(gray, None, 0).tissue_mask().unwrap().shape(), (23, 37));
    assert_eq!(Tile::new(rgb, None, 0).tissue_mask().unwrap().shape(), (23, 37));
    assert_eq!(Tile::new(rgba, None, 0).tissue_mask().unwrap().shape(), (23, 37));
}

#[test]
fn test_layouts_agree_on_mask() {
    let (gray, rgb, rgba) = all_layouts(&create_disk_tile(48, 12));

    let from_gray = Tile::new(gray, None, 0).tissue_mask().unwrap();
    assert_eq!(Tile::new(rgb, None, 0).tissue_mask().unwrap(), from_gray);
    assert_eq!(Tile::new(rgba, None, 0).tissue_mask().unwrap(), from_gray);
}

#[test]
fn test_transparent_rgba_mask_shape() {
    let tile = Tile::new(create_transparent_tile(50, 155), None, 0);
    assert_eq!(tile.tissue_mask().unwrap().shape(), (50, 50));
}

#[test]
fn test_mask_is_deterministic() {
    let tile = Tile::new(create_ring_tile(64, 6, 8), None, 3);
    let first = tile.tissue_mask().unwrap();

    for _ in 0..3 {
        assert_eq!(tile.tissue_mask().unwrap(), first);
    }
}

#[test]
fn test_percent_boundary_on_computed_mask() {
    let tile = Tile::new(create_disk_tile(64, 20), None, 0);
    let exact = tile.tissue_mask().unwrap().tissue_percent().unwrap();

    assert!(exact > 0.0 && exact < 100.0);
    assert!(tile.has_tissue_more_than_percent(exact).unwrap());
    assert!(!tile.has_tissue_more_than_percent(exact + 1e-9).unwrap());
}

#[test]
fn test_percent_monotonic_on_computed_mask() {
    let tile = Tile::new(create_disk_tile(64, 14), None, 0);

    let results: Vec<bool> = (0..=20)
        .map(|i| tile.has_tissue_more_than_percent(i as f64 * 5.0).unwrap())
        .collect();

    // Once a threshold fails, every higher threshold fails too
    let first_fail = results.iter().position(|&r| !r).unwrap_or(results.len());
    assert!(results[first_fail..].iter().all(|&r| !r));
    assert!(results[0]);
}

#[test]
fn test_tiles_classify_in_parallel() {
    let tiles: Vec<Tile<RgbImage>> = (0..8)
        .map(|i| Tile::new(create_disk_tile(48, 4 + i * 2), None, 0))
        .collect();

    let sequential: Vec<bool> = tiles
        .iter()
        .map(|t| t.has_enough_tissue(DEFAULT_TISSUE_PERCENT).unwrap())
        .collect();

    let parallel: Vec<bool> = std::thread::scope(|s| {
        let handles: Vec<_> = tiles
            .iter()
            .map(|t| s.spawn(move || t.has_enough_tissue(DEFAULT_TISSUE_PERCENT).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}

// =============================================================================
// Lazy Capability Errors
// =============================================================================

#[test]
fn test_missing_image_constructs() {
    let coords = CoordinatePair::new(0, 0, 50, 50);
    let tile: Tile<Option<RgbImage>> = Tile::new(None, coords, 0);

    assert_eq!(tile.coords(), Some(coords));
    assert_eq!(tile.level(), Some(0));
}

#[test]
fn test_missing_image_fails_on_query() {
    let tile: Tile<Option<RgbImage>> = Tile::new(None, CoordinatePair::new(0, 0, 50, 50), 0);

    let err = tile.has_enough_tissue(DEFAULT_TISSUE_PERCENT).unwrap_err();
    assert_eq!(err.to_string(), "None does not support grayscale conversion");

    let err = tile.tissue_mask().unwrap_err();
    assert_eq!(err.to_string(), "None does not support pixel array extraction");
}

#[test]
fn test_malformed_pixel_array_fails_on_query() {
    let array = PixelArray::new(8, 8, 2, vec![0; 128]);
    let tile = Tile::new(array, None, 1);

    match tile.has_enough_tissue(DEFAULT_TISSUE_PERCENT) {
        Err(TissueError::Filter(FilterError::UnsupportedImage { capability, value })) => {
            assert_eq!(capability, "grayscale conversion");
            assert!(value.contains("2 channel(s)"));
        }
        other => panic!("Expected UnsupportedImage, got {:?}", other),
    }
}

#[test]
fn test_pixel_array_classifies_like_image() {
    let rgb = create_disk_tile(32, 10);
    let array = PixelArray::new(32, 32, 3, rgb.as_raw().clone());

    assert_eq!(
        Tile::new(array, None, 0).tissue_mask().unwrap(),
        Tile::new(rgb, None, 0).tissue_mask().unwrap()
    );
}

#[test]
fn test_empty_tile_reports_empty_mask() {
    let tile = Tile::new(RgbImage::new(0, 0), None, 0);

    assert!(!tile.is_almost_white().unwrap());
    assert_eq!(
        tile.has_enough_tissue(DEFAULT_TISSUE_PERCENT),
        Err(TissueError::EmptyMask {
            width: 0,
            height: 0
        })
    );
}
