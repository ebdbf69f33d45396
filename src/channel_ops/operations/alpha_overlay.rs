use tracing::{info, instrument};

use crate::channel_ops::common::error::{ChannelError, Result};
use crate::channel_ops::operations::cmap2rgb::ColormapConverter;
use crate::channel_ops::operations::operation::{
    ChannelOperation, OperationContext, check_layer_count,
};
use crate::channel_ops::operations::rgba::RgbaCombiner;
use crate::channel_ops::operations::split::ChannelSplitter;
use crate::channel_ops::operations::types::AlphaOverlayConfig;
use crate::channel_ops::raster::{Layer, Raster};

/// Renders a color-mapped raster to RGBA with the alpha channel taken from
/// a second raster.
///
/// The color map's own alpha is discarded; the alpha source is clipped into
/// `[0, 1]` like any other combined channel.
#[derive(Debug, Clone, Default)]
pub struct AlphaOverlay {
    config: AlphaOverlayConfig,
}

impl AlphaOverlay {
    pub fn new(config: AlphaOverlayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AlphaOverlayConfig {
        &self.config
    }

    #[instrument(skip_all, fields(layers = layers.len()))]
    pub fn overlay(&self, layers: &[Layer], ctx: &OperationContext<'_>) -> Result<Raster> {
        check_layer_count("alpha_overlay", layers.len(), &[2], "2")?;
        let source = layers[0].as_raster(0)?;
        let alpha = layers[1].as_raster(1)?;

        let rendered = ColormapConverter::default().convert(source, ctx)?;
        let channels = ChannelSplitter::default().split(&rendered)?;
        let (r, g, b) = match channels.as_slice() {
            [r, g, b, _] => (r, g, b),
            other => {
                return Err(ChannelError::InvalidDepth {
                    expected: "4",
                    actual: other.len(),
                });
            }
        };

        let combined = RgbaCombiner::default().combine_rasters(&[r, g, b, alpha])?;
        let data = combined.channel_data()?.clone();

        info!(label = %self.config.label, "Alpha overlay complete");
        Ok(Raster::from_channels(data)?
            .with_bounds(source.bounds())
            .with_value(source.value())
            .with_label(&self.config.label))
    }
}

impl ChannelOperation for AlphaOverlay {
    fn name(&self) -> &'static str {
        "alpha_overlay"
    }

    fn process(&self, layers: &[Layer], ctx: &OperationContext<'_>) -> Result<Vec<Raster>> {
        Ok(vec![self.overlay(layers, ctx)?])
    }
}
