use image::Rgb;
use log::debug;

use crate::error::FilterError;
use crate::filters::stencil::{apply_stencil, Kernel3, MissingNeighbor, Neighborhood};
use crate::grid::{PixelGrid, CHANNELS};
use crate::utils::round_clamp_f32_to_primitive;

/// Horizontal Sobel kernel
pub const SOBEL_X: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];

/// Vertical Sobel kernel
pub const SOBEL_Y: Kernel3 = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Trait for Sobel edge detection on a pixel grid.
///
/// For each channel of each cell, `Gx` and `Gy` are the weighted sums of
/// the 3x3 window under [`SOBEL_X`] and [`SOBEL_Y`]. Neighbors outside the
/// grid read as solid black. The new channel value is
/// `round(sqrt(Gx² + Gy²))` clamped to `[0, 255]`.
///
/// All gradients are computed from the grid as it was before the pass.
pub trait EdgesExt {
    /// Runs edge detection, consuming the grid.
    ///
    /// # Errors
    ///
    /// * `FilterError::DimensionMismatch` - When the storage does not match the grid shape
    fn detect_edges(self) -> Result<Self, FilterError>
    where
        Self: Sized;

    /// Runs edge detection in place.
    fn detect_edges_mut(&mut self) -> Result<&mut Self, FilterError>;
}

impl EdgesExt for PixelGrid {
    fn detect_edges(mut self) -> Result<Self, FilterError> {
        self.detect_edges_mut()?;
        Ok(self)
    }

    fn detect_edges_mut(&mut self) -> Result<&mut Self, FilterError> {
        debug!("edges: {}x{} grid", self.width(), self.height());
        apply_stencil(self, MissingNeighbor::Black, sobel_magnitude)?;
        Ok(self)
    }
}

/// Per-channel `(Gx, Gy)` of a window.
pub fn sobel_gradients(hood: &Neighborhood) -> [(i32, i32); CHANNELS] {
    std::array::from_fn(|channel| {
        (
            hood.weighted_sum(&SOBEL_X, channel),
            hood.weighted_sum(&SOBEL_Y, channel),
        )
    })
}

fn sobel_magnitude(hood: &Neighborhood) -> Rgb<u8> {
    Rgb(sobel_gradients(hood).map(|(gx, gy)| {
        let magnitude = ((gx * gx + gy * gy) as f32).sqrt();
        round_clamp_f32_to_primitive::<u8>(magnitude)
    }))
}
