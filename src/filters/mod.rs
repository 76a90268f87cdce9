pub mod blur;
pub mod edges;
pub mod grayscale;
pub mod reflect;
pub mod select;
pub mod stencil;

pub use blur::BlurExt;
pub use edges::EdgesExt;
pub use grayscale::GrayscaleExt;
pub use reflect::ReflectExt;
