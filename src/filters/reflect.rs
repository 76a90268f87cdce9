use log::debug;

use crate::error::FilterError;
use crate::grid::{PixelGrid, CHANNELS};
use crate::utils::{is_empty_grid, validate_grid_storage};

/// Trait for mirroring a pixel grid left to right.
///
/// Column `j` of every row is swapped with column `width - 1 - j`. The
/// middle column of an odd-width row stays where it is. Applying the
/// reflection twice restores the original grid.
pub trait ReflectExt {
    /// Mirrors the grid horizontally, consuming it.
    ///
    /// # Errors
    ///
    /// * `FilterError::DimensionMismatch` - When the storage does not match the grid shape
    fn reflect(self) -> Result<Self, FilterError>
    where
        Self: Sized;

    /// Mirrors the grid horizontally in place.
    fn reflect_mut(&mut self) -> Result<&mut Self, FilterError>;
}

impl ReflectExt for PixelGrid {
    fn reflect(mut self) -> Result<Self, FilterError> {
        self.reflect_mut()?;
        Ok(self)
    }

    fn reflect_mut(&mut self) -> Result<&mut Self, FilterError> {
        validate_grid_storage(self)?;
        if is_empty_grid(self) {
            return Ok(self);
        }

        let width = self.width() as usize;
        debug!("reflect: {}x{} grid", width, self.height());

        let row_len = width * CHANNELS;
        #[cfg(feature = "rayon")]
        {
            use rayon::prelude::*;
            self.par_chunks_exact_mut(row_len).for_each(|row| {
                reflect_row(row, width);
            });
        }
        #[cfg(not(feature = "rayon"))]
        self.chunks_exact_mut(row_len).for_each(|row| {
            reflect_row(row, width);
        });

        Ok(self)
    }
}

/// Index of the column that `col` swaps with.
#[inline]
fn mirror_column(col: usize, width: usize) -> usize {
    width - 1 - col
}

/// Reverses the pixel order of one row of interleaved subpixels.
///
/// Returns the number of pixel swaps performed, which is `width / 2`.
fn reflect_row(row: &mut [u8], width: usize) -> usize {
    let mut swaps = 0;
    for col in 0..width / 2 {
        let mirror = mirror_column(col, width);
        let (left, right) = row.split_at_mut(mirror * CHANNELS);
        left[col * CHANNELS..(col + 1) * CHANNELS].swap_with_slice(&mut right[..CHANNELS]);
        swaps += 1;
    }
    swaps
}
