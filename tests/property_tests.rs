//! Property-based tests for pixel-filters
//!
//! These tests use proptest to verify the invariants that should hold for
//! every grid the filters accept.

use image::Rgb;
use pixel_filters::{BlurExt, EdgesExt, GrayscaleExt, PixelGrid, ReflectExt};
use proptest::prelude::*;

/// Strategy for generating small grid dimensions, including degenerate ones
fn grid_dimensions() -> impl Strategy<Value = (u32, u32)> {
    (0u32..=12, 0u32..=12)
}

/// Strategy for generating RGB pixel values
fn rgb_pixel() -> impl Strategy<Value = Rgb<u8>> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb([r, g, b]))
}

/// Strategy for generating a grid with arbitrary contents
fn pixel_grid() -> impl Strategy<Value = PixelGrid> {
    grid_dimensions().prop_flat_map(|(width, height)| {
        proptest::collection::vec(any::<u8>(), (width * height * 3) as usize).prop_map(
            move |data| PixelGrid::from_raw(width, height, data).expect("exact-size buffer"),
        )
    })
}

/// Strategy for grids at least `min` cells in each direction
fn pixel_grid_at_least(min: u32) -> impl Strategy<Value = PixelGrid> {
    (min..=10, min..=10).prop_flat_map(|(width, height)| {
        proptest::collection::vec(any::<u8>(), (width * height * 3) as usize).prop_map(
            move |data| PixelGrid::from_raw(width, height, data).expect("exact-size buffer"),
        )
    })
}

/// Truncated per-channel mean of the listed cells of `grid`
fn truncated_mean(grid: &PixelGrid, cells: &[(u32, u32)]) -> Rgb<u8> {
    let mut sums = [0u32; 3];
    for &(x, y) in cells {
        for (sum, value) in sums.iter_mut().zip(grid.get_pixel(x, y).0) {
            *sum += u32::from(value);
        }
    }
    Rgb(sums.map(|sum| (sum / cells.len() as u32) as u8))
}

proptest! {
    /// Property: Grayscale applied twice equals grayscale applied once
    #[test]
    fn grayscale_is_idempotent(grid in pixel_grid()) {
        let once = grid.grayscale().unwrap();
        let twice = once.clone().grayscale().unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Property: Grayscale writes one intensity to all channels, near the true mean
    #[test]
    fn grayscale_sets_equal_channels_near_mean(grid in pixel_grid()) {
        let gray = grid.clone().grayscale().unwrap();
        for (original, converted) in grid.pixels().zip(gray.pixels()) {
            let Rgb([r, g, b]) = *converted;
            prop_assert!(r == g && g == b);

            let mean = original.0.iter().map(|&c| f32::from(c)).sum::<f32>() / 3.0;
            prop_assert!((f32::from(r) - mean).abs() <= 0.5);
        }
    }

    /// Property: Reflect applied twice restores the grid byte for byte
    #[test]
    fn reflect_is_an_involution(grid in pixel_grid()) {
        let twice = grid.clone().reflect().unwrap().reflect().unwrap();
        prop_assert_eq!(twice.as_raw(), grid.as_raw());
    }

    /// Property: Reflect moves cell (x, y) to (width - 1 - x, y)
    #[test]
    fn reflect_mirrors_columns(grid in pixel_grid()) {
        let (width, height) = grid.dimensions();
        let mirrored = grid.clone().reflect().unwrap();
        for y in 0..height {
            for x in 0..width {
                prop_assert_eq!(mirrored.get_pixel(width - 1 - x, y), grid.get_pixel(x, y));
            }
        }
    }

    /// Property: Reflect keeps the middle column of odd-width grids
    #[test]
    fn reflect_fixes_middle_column(
        half in 0u32..6,
        height in 1u32..8,
        pixel in rgb_pixel()
    ) {
        let width = 2 * half + 1;
        let mut grid = PixelGrid::new(width, height);
        for y in 0..height {
            grid.put_pixel(half, y, Rgb([pixel[0], pixel[1], y as u8]));
        }
        let mirrored = grid.clone().reflect().unwrap();
        for y in 0..height {
            prop_assert_eq!(mirrored.get_pixel(half, y), grid.get_pixel(half, y));
        }
    }

    /// Property: The top-left blurred corner averages itself, E, S and SE
    #[test]
    fn blur_corner_averages_four_cells(grid in pixel_grid_at_least(2)) {
        let expected = truncated_mean(&grid, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
        let blurred = grid.blur().unwrap();
        prop_assert_eq!(*blurred.get_pixel(0, 0), expected);
    }

    /// Property: Interior cells average their full 3x3 window
    #[test]
    fn blur_interior_averages_nine_cells(
        grid in pixel_grid_at_least(3),
        (fx, fy) in (0.0f64..1.0, 0.0f64..1.0)
    ) {
        let (width, height) = grid.dimensions();
        let x = 1 + (fx * f64::from(width - 2)) as u32;
        let y = 1 + (fy * f64::from(height - 2)) as u32;
        let window: Vec<(u32, u32)> = (y - 1..=y + 1)
            .flat_map(|wy| (x - 1..=x + 1).map(move |wx| (wx, wy)))
            .collect();

        let expected = truncated_mean(&grid, &window);
        let blurred = grid.blur().unwrap();
        prop_assert_eq!(*blurred.get_pixel(x, y), expected);
    }

    /// Property: Blur of a uniform grid is the same grid
    #[test]
    fn blur_preserves_uniform_grids(
        (width, height) in grid_dimensions(),
        pixel in rgb_pixel()
    ) {
        let grid = PixelGrid::from_pixel(width, height, pixel);
        prop_assert_eq!(grid.clone().blur().unwrap(), grid);
    }

    /// Property: Interior cells of a uniform grid have no edge response
    #[test]
    fn edges_of_uniform_grid_interior_are_black(
        (width, height) in (3u32..10, 3u32..10),
        pixel in rgb_pixel()
    ) {
        let edges = PixelGrid::from_pixel(width, height, pixel).detect_edges().unwrap();
        for y in 1..height - 1 {
            for x in 1..width - 1 {
                prop_assert_eq!(*edges.get_pixel(x, y), Rgb([0, 0, 0]));
            }
        }
    }

    /// Property: Every filter keeps the grid shape
    #[test]
    fn filters_preserve_dimensions(grid in pixel_grid()) {
        let dimensions = grid.dimensions();
        prop_assert_eq!(grid.clone().grayscale().unwrap().dimensions(), dimensions);
        prop_assert_eq!(grid.clone().reflect().unwrap().dimensions(), dimensions);
        prop_assert_eq!(grid.clone().blur().unwrap().dimensions(), dimensions);
        prop_assert_eq!(grid.detect_edges().unwrap().dimensions(), dimensions);
    }

    /// Property: Blur commutes with reflect, since the 3x3 window is symmetric
    #[test]
    fn blur_commutes_with_reflect(grid in pixel_grid()) {
        let blur_then_reflect = grid.clone().blur().unwrap().reflect().unwrap();
        let reflect_then_blur = grid.reflect().unwrap().blur().unwrap();
        prop_assert_eq!(blur_then_reflect, reflect_then_blur);
    }
}
