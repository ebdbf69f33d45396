use ndarray::Array2;
use tracing::{info, instrument};

use crate::channel_ops::common::error::Result;
use crate::channel_ops::operations::hcs::HcsCompositor;
use crate::channel_ops::operations::operation::{
    ChannelOperation, OperationContext, check_layer_count, check_same_shape,
};
use crate::channel_ops::operations::types::ColorizeConfig;
use crate::channel_ops::raster::{Layer, Raster};

/// Colorizes a grayscale raster with the hue of a second raster.
///
/// Shortcut for HCS with the second layer as hue, full confidence and the
/// first layer's normalized view as strength.
#[derive(Debug, Clone, Default)]
pub struct Colorizer {
    config: ColorizeConfig,
}

impl Colorizer {
    pub fn new(config: ColorizeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ColorizeConfig {
        &self.config
    }

    #[instrument(skip_all, fields(layers = layers.len()))]
    pub fn colorize(&self, layers: &[Layer]) -> Result<Raster> {
        check_layer_count("colorize", layers.len(), &[2], "2")?;
        let intensity = layers[0].as_raster(0)?;
        let hue = layers[1].as_raster(1)?;
        intensity.scalar_data()?;
        hue.scalar_data()?;
        check_same_shape(intensity, hue)?;

        let confidence =
            Raster::from_scalar(Array2::ones(intensity.shape())).with_bounds(intensity.bounds());
        let strength = intensity.normalized_raster()?;

        let hcs = HcsCompositor::default().composite_rasters(&[hue, &confidence, &strength])?;
        info!(label = %self.config.label, "Colorized raster");
        Ok(hcs.with_label(&self.config.label))
    }
}

impl ChannelOperation for Colorizer {
    fn name(&self) -> &'static str {
        "colorize"
    }

    fn process(&self, layers: &[Layer], _ctx: &OperationContext<'_>) -> Result<Vec<Raster>> {
        Ok(vec![self.colorize(layers)?])
    }
}
