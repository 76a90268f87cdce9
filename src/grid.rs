use image::{ImageBuffer, Rgb};
use imageproc::definitions::Image;

use crate::error::FilterError;
use crate::utils::expected_subpixels;

/// Row-major grid of 8-bit RGB pixels.
///
/// Rows run along `y` and columns along `x`, so `height()` is the row count
/// and `width()` the column count.
pub type PixelGrid = Image<Rgb<u8>>;

/// Subpixels per cell.
pub const CHANNELS: usize = 3;

/// The eight compass directions around a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compass {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Compass {
    /// All directions, clockwise from north
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// `(row, col)` offset of this direction. North is the previous row.
    pub const fn offset(self) -> (i64, i64) {
        match self {
            Self::North => (-1, 0),
            Self::NorthEast => (-1, 1),
            Self::East => (0, 1),
            Self::SouthEast => (1, 1),
            Self::South => (1, 0),
            Self::SouthWest => (1, -1),
            Self::West => (0, -1),
            Self::NorthWest => (-1, -1),
        }
    }
}

/// A cell position within a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub row: u32,
    pub col: u32,
}

impl Coordinate {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Returns the neighbor in `direction`, or `None` if it falls outside
    /// a `height` x `width` grid.
    pub fn neighbor(self, direction: Compass, height: u32, width: u32) -> Option<Self> {
        self.offset_by(direction.offset(), height, width)
    }

    /// Returns the cell at `(d_row, d_col)` from this one, if it lies inside
    /// a `height` x `width` grid.
    pub fn offset_by(self, (d_row, d_col): (i64, i64), height: u32, width: u32) -> Option<Self> {
        let row = i64::from(self.row) + d_row;
        let col = i64::from(self.col) + d_col;
        if (0..i64::from(height)).contains(&row) && (0..i64::from(width)).contains(&col) {
            Some(Self::new(row as u32, col as u32))
        } else {
            None
        }
    }
}

/// Builds a grid from raw interleaved RGB subpixels.
///
/// Unlike `ImageBuffer::from_raw`, the buffer must be exactly
/// `height * width * 3` long.
///
/// # Errors
///
/// * `FilterError::DimensionMismatch` - When the buffer length differs from the declared shape
///
/// # Examples
///
/// ```
/// use pixel_filters::pixel_grid_from_raw;
///
/// let grid = pixel_grid_from_raw(1, 2, vec![255, 0, 0, 0, 0, 255]).unwrap();
/// assert_eq!(grid.dimensions(), (2, 1));
///
/// assert!(pixel_grid_from_raw(2, 2, vec![0; 11]).is_err());
/// ```
pub fn pixel_grid_from_raw(
    height: u32,
    width: u32,
    data: Vec<u8>,
) -> Result<PixelGrid, FilterError> {
    let expected = expected_subpixels(width, height);
    if data.len() != expected {
        return Err(FilterError::DimensionMismatch {
            expected,
            actual: data.len(),
        });
    }
    ImageBuffer::from_raw(width, height, data).ok_or(FilterError::ImageBufferCreationFailed)
}

/// Builds a grid from a list of rows.
///
/// Every row must have the length of the first one. An empty list gives a
/// 0x0 grid; a list of empty rows gives a grid of width 0.
///
/// # Errors
///
/// * `FilterError::RaggedRows` - When a row length differs from the first row
pub fn pixel_grid_from_rows(rows: Vec<Vec<Rgb<u8>>>) -> Result<PixelGrid, FilterError> {
    let width = rows.first().map_or(0, Vec::len);
    if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
        return Err(FilterError::RaggedRows {
            row,
            expected: width,
            actual: cells.len(),
        });
    }

    let height = rows.len();
    let data: Vec<u8> = rows.into_iter().flatten().flat_map(|p| p.0).collect();
    pixel_grid_from_raw(height as u32, width as u32, data)
}
