//! Test utilities for pixel-filters
//!
//! This module provides common fixtures for testing the filter passes.
//! It is only compiled when running tests.

use image::Rgb;
use imageproc::rgb_image;
use itertools::iproduct;

use crate::grid::PixelGrid;

/// Creates a 3x3 grid where every cell and channel holds a different value.
///
/// Rows, top to bottom:
/// - `[10, 20, 30]  [40, 50, 60]  [70, 80, 90]`
/// - `[15, 25, 35]  [45, 55, 65]  [75, 85, 95]`
/// - `[110, 120, 130] [140, 150, 160] [170, 180, 190]`
pub fn create_distinct_3x3_grid() -> PixelGrid {
    rgb_image!(
        [10, 20, 30], [40, 50, 60], [70, 80, 90];
        [15, 25, 35], [45, 55, 65], [75, 85, 95];
        [110, 120, 130], [140, 150, 160], [170, 180, 190])
}

/// Creates a grid filled with one pixel value.
pub fn create_uniform_grid(width: u32, height: u32, pixel: Rgb<u8>) -> PixelGrid {
    PixelGrid::from_pixel(width, height, pixel)
}

/// Creates a grid whose cells encode their own position.
///
/// Cell `(row, col)` holds `[row, col, row * width + col]`, truncated to u8.
pub fn create_coordinate_grid(width: u32, height: u32) -> PixelGrid {
    let mut grid = PixelGrid::new(width, height);
    iproduct!(0..height, 0..width).for_each(|(y, x)| {
        grid.put_pixel(x, y, Rgb([y as u8, x as u8, (y * width + x) as u8]));
    });
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_distinct_3x3_grid_has_no_repeated_pixels() {
        let grid = create_distinct_3x3_grid();
        assert_eq!(grid.dimensions(), (3, 3));
        assert_eq!(grid.get_pixel(0, 0), &Rgb([10, 20, 30]));
        assert_eq!(grid.get_pixel(2, 2), &Rgb([170, 180, 190]));

        let mut pixels: Vec<_> = grid.pixels().map(|p| p.0).collect();
        pixels.sort_unstable();
        pixels.dedup();
        assert_eq!(pixels.len(), 9);
    }

    #[test]
    fn create_coordinate_grid_encodes_positions() {
        let grid = create_coordinate_grid(4, 2);
        assert_eq!(grid.get_pixel(3, 1), &Rgb([1, 3, 7]));
    }
}
