//! Snapshot, compute, commit.
//!
//! Passes whose output for a cell depends on the original values of its
//! neighbors cannot write into the grid while still reading from it. The
//! stencil runner borrows the live grid immutably as the snapshot, computes
//! every output cell into a separate buffer, and only then replaces the grid
//! with that buffer.

use image::{ImageBuffer, Rgb};
use itertools::iproduct;
use log::trace;

use crate::error::FilterError;
use crate::grid::{Compass, Coordinate, PixelGrid, CHANNELS};
use crate::utils::{is_empty_grid, validate_grid_storage};

/// 3x3 weight matrix, indexed `[row][col]` with the center at `[1][1]`.
pub type Kernel3 = [[i32; 3]; 3];

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// What a stencil sees where a neighbor falls outside the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingNeighbor {
    /// The neighbor does not participate
    Skip,
    /// The neighbor reads as a solid black pixel
    Black,
}

/// The 3x3 window around one cell, read from the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighborhood {
    cells: [[Option<Rgb<u8>>; 3]; 3],
}

impl Neighborhood {
    /// Gathers the window centered on `at`.
    ///
    /// # Panics
    ///
    /// If `at` lies outside `snapshot`.
    pub fn gather(snapshot: &PixelGrid, at: Coordinate, policy: MissingNeighbor) -> Self {
        let (width, height) = snapshot.dimensions();
        let mut cells = [[None; 3]; 3];
        cells[1][1] = Some(*snapshot.get_pixel(at.col, at.row));

        for direction in Compass::ALL {
            let (d_row, d_col) = direction.offset();
            let sample = match at.neighbor(direction, height, width) {
                Some(n) => Some(*snapshot.get_pixel(n.col, n.row)),
                None => match policy {
                    MissingNeighbor::Skip => None,
                    MissingNeighbor::Black => Some(BLACK),
                },
            };
            cells[(d_row + 1) as usize][(d_col + 1) as usize] = sample;
        }

        Self { cells }
    }

    pub fn center(&self) -> Option<Rgb<u8>> {
        self.cells[1][1]
    }

    /// The sample in `direction`, `None` if it was skipped.
    pub fn get(&self, direction: Compass) -> Option<Rgb<u8>> {
        let (d_row, d_col) = direction.offset();
        self.cells[(d_row + 1) as usize][(d_col + 1) as usize]
    }

    /// Every sample that participates, center included.
    pub fn samples(&self) -> impl Iterator<Item = Rgb<u8>> + '_ {
        self.cells.iter().flatten().flatten().copied()
    }

    /// Weighted sum of one channel over the window. Skipped cells add nothing.
    pub fn weighted_sum(&self, kernel: &Kernel3, channel: usize) -> i32 {
        iproduct!(0..3, 0..3)
            .filter_map(|(r, c)| self.cells[r][c].map(|p| kernel[r][c] * i32::from(p[channel])))
            .sum()
    }
}

/// Runs `stencil` over every cell of `grid`.
///
/// Each output cell is computed from the pre-pass grid only. The grid is
/// replaced once all cells are computed, and is left untouched on error.
pub fn apply_stencil<F>(
    grid: &mut PixelGrid,
    policy: MissingNeighbor,
    stencil: F,
) -> Result<(), FilterError>
where
    F: Fn(&Neighborhood) -> Rgb<u8> + Sync,
{
    validate_grid_storage(grid)?;
    if is_empty_grid(grid) {
        return Ok(());
    }

    let committed = compute(grid, policy, &stencil)?;
    trace!(
        "committing {}x{} stencil output",
        committed.width(),
        committed.height()
    );
    *grid = committed;
    Ok(())
}

fn compute<F>(
    snapshot: &PixelGrid,
    policy: MissingNeighbor,
    stencil: &F,
) -> Result<PixelGrid, FilterError>
where
    F: Fn(&Neighborhood) -> Rgb<u8> + Sync,
{
    let (width, height) = snapshot.dimensions();
    let row_len = width as usize * CHANNELS;
    let mut output = vec![0u8; row_len * height as usize];

    let fill_row = |(row, dst): (usize, &mut [u8])| {
        for (col, cell) in dst.chunks_exact_mut(CHANNELS).enumerate() {
            let at = Coordinate::new(row as u32, col as u32);
            let hood = Neighborhood::gather(snapshot, at, policy);
            cell.copy_from_slice(&stencil(&hood).0);
        }
    };

    // workers read only the snapshot and each owns one output row
    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        output.par_chunks_mut(row_len).enumerate().for_each(fill_row);
    }
    #[cfg(not(feature = "rayon"))]
    output.chunks_mut(row_len).enumerate().for_each(fill_row);

    ImageBuffer::from_raw(width, height, output).ok_or(FilterError::ImageBufferCreationFailed)
}
