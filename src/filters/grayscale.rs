use image::Rgb;
use log::debug;

use crate::error::FilterError;
use crate::grid::PixelGrid;
use crate::utils::validate_grid_storage;

/// Trait for converting a pixel grid to grayscale.
///
/// Every cell is replaced by the mean of its red, green and blue values,
/// rounded to the nearest integer and written to all three channels. Each
/// cell depends only on itself, so the pass runs in place.
pub trait GrayscaleExt {
    /// Converts the grid to grayscale, consuming it.
    ///
    /// # Errors
    ///
    /// * `FilterError::DimensionMismatch` - When the storage does not match the grid shape
    ///
    /// # Examples
    ///
    /// ```
    /// use pixel_filters::{GrayscaleExt, PixelGrid};
    /// use image::Rgb;
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let grid = PixelGrid::from_pixel(2, 2, Rgb([10, 20, 31]));
    /// let gray = grid.grayscale()?;
    /// assert_eq!(gray.get_pixel(0, 0), &Rgb([20, 20, 20]));
    /// # Ok(())
    /// # }
    /// # example().unwrap();
    /// ```
    fn grayscale(self) -> Result<Self, FilterError>
    where
        Self: Sized;

    /// Converts the grid to grayscale in place.
    fn grayscale_mut(&mut self) -> Result<&mut Self, FilterError>;
}

impl GrayscaleExt for PixelGrid {
    fn grayscale(mut self) -> Result<Self, FilterError> {
        self.grayscale_mut()?;
        Ok(self)
    }

    fn grayscale_mut(&mut self) -> Result<&mut Self, FilterError> {
        validate_grid_storage(self)?;
        debug!("grayscale: {}x{} grid", self.width(), self.height());

        #[cfg(feature = "rayon")]
        {
            use rayon::prelude::*;
            self.par_pixels_mut()
                .for_each(|pixel| *pixel = grayscale_pixel(*pixel));
        }
        #[cfg(not(feature = "rayon"))]
        self.pixels_mut()
            .for_each(|pixel| *pixel = grayscale_pixel(*pixel));

        Ok(self)
    }
}

/// Mean of the three channels, rounded half away from zero.
#[inline]
fn grayscale_pixel(Rgb([red, green, blue]): Rgb<u8>) -> Rgb<u8> {
    let sum = u16::from(red) + u16::from(green) + u16::from(blue);
    // a third is never exactly .5 away, so +1 before dividing rounds to nearest
    let intensity = ((sum + 1) / 3) as u8;
    Rgb([intensity; 3])
}
