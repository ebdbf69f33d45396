//! Color map lookup and display styles
//!
//! Color maps turn a scalar in `[0, 1]` into an RGBA quadruple. Styles
//! associate raster labels with display options such as the color map name.

mod builtin;
mod lookup;
pub mod style;

pub use builtin::{ColorStop, ColormapRegistry};
pub use lookup::{Colormap, ColormapProvider};
pub use style::{StyleLookup, StyleOpts, StyleRegistry, StyleValue, register_default_styles};
