//! Raster data model
//!
//! Rasters are the values every channel operation consumes and produces:
//! a 2D scalar field or a 3D channel stack plus spatial and label metadata.

mod grid;
mod layer;
pub mod types;

pub use grid::Raster;
pub use layer::{Contours, Layer};
pub(crate) use layer::rasters;
pub use types::{Bounds, RasterData, RasterMode};
