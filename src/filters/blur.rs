use image::Rgb;
use log::debug;

use crate::error::FilterError;
use crate::filters::stencil::{apply_stencil, MissingNeighbor, Neighborhood};
use crate::grid::{PixelGrid, CHANNELS};

/// Trait for applying a 3x3 box blur to a pixel grid.
///
/// Each cell becomes the per-channel mean of itself and the compass
/// neighbors that exist. Cells outside the grid do not take part, so a
/// corner averages 4 cells, a non-corner edge 6, and an interior cell 9.
/// The mean uses truncating integer division.
///
/// All means are computed from the grid as it was before the pass.
pub trait BlurExt {
    /// Blurs the grid, consuming it.
    ///
    /// # Errors
    ///
    /// * `FilterError::DimensionMismatch` - When the storage does not match the grid shape
    ///
    /// # Examples
    ///
    /// ```
    /// use pixel_filters::BlurExt;
    /// use imageproc::rgb_image;
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let grid = rgb_image!([0, 0, 0], [9, 9, 9]);
    /// let blurred = grid.blur()?;
    /// assert_eq!(blurred, rgb_image!([4, 4, 4], [4, 4, 4]));
    /// # Ok(())
    /// # }
    /// # example().unwrap();
    /// ```
    fn blur(self) -> Result<Self, FilterError>
    where
        Self: Sized;

    /// Blurs the grid in place.
    fn blur_mut(&mut self) -> Result<&mut Self, FilterError>;
}

impl BlurExt for PixelGrid {
    fn blur(mut self) -> Result<Self, FilterError> {
        self.blur_mut()?;
        Ok(self)
    }

    fn blur_mut(&mut self) -> Result<&mut Self, FilterError> {
        debug!("blur: {}x{} grid", self.width(), self.height());
        apply_stencil(self, MissingNeighbor::Skip, box_mean)?;
        Ok(self)
    }
}

/// Truncated per-channel mean of the participating cells.
fn box_mean(hood: &Neighborhood) -> Rgb<u8> {
    let mut sums = [0u32; CHANNELS];
    let mut count = 0u32;
    for pixel in hood.samples() {
        for (sum, &value) in sums.iter_mut().zip(pixel.0.iter()) {
            *sum += u32::from(value);
        }
        count += 1;
    }
    // the center always participates, so count is at least 1
    Rgb(sums.map(|sum| (sum / count.max(1)) as u8))
}
