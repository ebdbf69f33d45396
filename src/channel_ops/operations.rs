//! Channel operations
//!
//! Each operation is a stateless component configured once and applied to
//! an overlay of layers, producing new rasters.

mod alpha_overlay;
mod cmap2rgb;
mod colorize;
mod hcs;
mod operation;
mod registry;
mod rgba;
mod split;
pub mod types;


pub use alpha_overlay::AlphaOverlay;
pub use cmap2rgb::ColormapConverter;
pub use colorize::Colorizer;
pub use hcs::HcsCompositor;
pub use operation::{ChannelOperation, OperationContext};
pub use registry::{OperationRegistry, register_channel_operations};
pub use rgba::{RgbaCombiner, clip_unit};
pub use split::ChannelSplitter;
pub use types::{
    AlphaOverlayConfig, Cmap2RgbConfig, Cmap2RgbConfigBuilder, ColorizeConfig, HcsConfig,
    HcsConfigBuilder, RgbaConfig, SplitConfig,
};
