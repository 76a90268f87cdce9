use thiserror::Error;

/// Error type for pixel grid construction and filter passes
///
/// Every filter is total over a well-formed grid, so these variants only
/// describe precondition violations and selection failures. A pass that
/// returns an error has not modified the grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Backing storage does not match the declared dimensions
    ///
    /// Returned when the number of subpixels held by a grid differs from
    /// `height * width * 3`.
    #[error("Grid storage does not match its dimensions: expected {expected} subpixels, got {actual}")]
    DimensionMismatch {
        /// Subpixel count implied by the declared dimensions
        expected: usize,
        /// Subpixel count actually present in storage
        actual: usize,
    },

    /// A row supplied to a row-wise constructor has the wrong length
    #[error("Row {row} has {actual} pixels, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Failed to create ImageBuffer from processed pixels
    ///
    /// This error indicates that the computed output buffer could not be
    /// wrapped into a grid of the original shape.
    #[error("Failed to create ImageBuffer from processed pixels")]
    ImageBufferCreationFailed,

    /// The requested filter name is not recognised
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),
}
