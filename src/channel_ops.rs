//! Raster channel operations
//!
//! Composites depth-1 rasters into RGB(A), splits them back apart, renders
//! color-mapped rasters and builds hue/confidence/strength images.

pub mod colormap;
pub mod colorspace;
pub mod common;
pub mod conversions;
pub mod operations;
pub mod raster;

pub use common::{ChannelError, Result};

pub use raster::{Bounds, Contours, Layer, Raster, RasterData, RasterMode};

pub use colormap::{
    Colormap, ColormapProvider, ColormapRegistry, StyleLookup, StyleOpts, StyleRegistry,
    StyleValue, register_default_styles,
};

pub use operations::{
    AlphaOverlay, AlphaOverlayConfig, ChannelOperation, ChannelSplitter, Cmap2RgbConfig,
    ColorizeConfig, Colorizer, ColormapConverter, HcsCompositor, HcsConfig, OperationContext,
    OperationRegistry, RgbaCombiner, RgbaConfig, SplitConfig, register_channel_operations,
};

pub use conversions::ChannelPipeline;
