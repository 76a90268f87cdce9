//! In-place spatial filters for RGB pixel grids.
//!
//! Four passes are provided as extension traits on [`PixelGrid`]:
//! grayscale, horizontal reflection, 3x3 box blur and Sobel edge detection.
//! Blur and edge detection read every neighbor from the grid as it was
//! before the pass started.

mod error;
mod filters;
mod grid;
#[cfg(test)]
mod test_utils;
mod utils;

pub use error::FilterError;
pub use filters::blur::BlurExt;
pub use filters::edges::{sobel_gradients, EdgesExt, SOBEL_X, SOBEL_Y};
pub use filters::grayscale::GrayscaleExt;
pub use filters::reflect::ReflectExt;
pub use filters::select::{ApplyFilterExt, Filter};
pub use filters::stencil::{apply_stencil, Kernel3, MissingNeighbor, Neighborhood};
pub use grid::{pixel_grid_from_raw, pixel_grid_from_rows, Compass, Coordinate, PixelGrid};
