//! Internal utility functions for pixel-filters.
//!
//! This module contains common functionality used across the filter passes.

use image::Primitive;
use imageproc::definitions::Clamp;

use crate::error::FilterError;
use crate::grid::{PixelGrid, CHANNELS};

/// Rounds a floating-point value and clamps it to the range of a primitive type.
///
/// Rounding is half-away-from-zero. Both ends of the range are clamped, so
/// negative inputs map to zero.
///
/// # Arguments
///
/// * `value` - The floating-point value to round and clamp
///
/// # Returns
///
/// The rounded value as the target primitive type
#[inline]
pub fn round_clamp_f32_to_primitive<T: Primitive + Clamp<f32>>(value: f32) -> T {
    T::clamp(value.round())
}

/// Number of subpixels a grid of the given shape must hold.
#[inline]
pub fn expected_subpixels(width: u32, height: u32) -> usize {
    width as usize * height as usize * CHANNELS
}

/// Validates that a grid's backing storage matches its declared dimensions.
///
/// `ImageBuffer::from_raw` accepts buffers that are longer than required, so
/// a grid can carry trailing storage that no pixel maps to. Filters reject
/// such grids before any mutation.
///
/// # Returns
///
/// `Ok(())` if the storage length is exactly `width * height * 3`
pub fn validate_grid_storage(grid: &PixelGrid) -> Result<(), FilterError> {
    let (width, height) = grid.dimensions();
    let expected = expected_subpixels(width, height);
    let actual = grid.as_raw().len();
    if expected == actual {
        Ok(())
    } else {
        Err(FilterError::DimensionMismatch { expected, actual })
    }
}

/// Returns true when the grid has no cells to process.
#[inline]
pub fn is_empty_grid(grid: &PixelGrid) -> bool {
    grid.width() == 0 || grid.height() == 0
}
