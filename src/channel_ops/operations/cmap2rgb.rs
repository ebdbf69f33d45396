use ndarray::Array3;
use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::channel_ops::colormap::StyleLookup;
use crate::channel_ops::common::error::{ChannelError, Result};
use crate::channel_ops::operations::operation::{
    ChannelOperation, OperationContext, check_layer_count,
};
use crate::channel_ops::operations::types::Cmap2RgbConfig;
use crate::channel_ops::raster::{Layer, Raster};

/// Renders a depth-1 raster through a named color map into RGBA.
///
/// The color map comes from the configuration when one is forced,
/// otherwise from the `cmap` entry of the raster's active style.
#[derive(Debug, Clone, Default)]
pub struct ColormapConverter {
    config: Cmap2RgbConfig,
}

impl ColormapConverter {
    pub fn new(config: Cmap2RgbConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Cmap2RgbConfig {
        &self.config
    }

    /// Name of the color map that would be applied to `raster`.
    pub fn resolve_cmap(&self, raster: &Raster, styles: &dyn StyleLookup) -> Result<String> {
        self.config
            .cmap
            .clone()
            .or_else(|| {
                styles
                    .style_for(raster)
                    .and_then(|style| style.text("cmap"))
                    .map(str::to_string)
            })
            .filter(|name| !name.is_empty())
            .ok_or(ChannelError::MissingColormap)
    }

    #[instrument(skip_all, fields(label = raster.label()))]
    pub fn convert(&self, raster: &Raster, ctx: &OperationContext<'_>) -> Result<Raster> {
        let data = raster.scalar_data()?;
        let name = self.resolve_cmap(raster, ctx.styles)?;
        let colormap = ctx
            .colormaps
            .colormap(&name)
            .ok_or_else(|| ChannelError::UnknownColormap(name.clone()))?;
        debug!(cmap = %name, "Applying color map");

        let samples: Vec<f64> = data.iter().copied().collect();
        let colors: Vec<[f64; 4]> = samples.par_iter().map(|&x| colormap(x)).collect();

        let (rows, cols) = data.dim();
        let rgba = Array3::from_shape_fn((rows, cols, 4), |(row, col, channel)| {
            colors[row * cols + col][channel]
        });

        Ok(raster.clone_with_data(rgba)?.with_label(&self.config.label))
    }
}

impl ChannelOperation for ColormapConverter {
    fn name(&self) -> &'static str {
        "cmap2rgb"
    }

    fn process(&self, layers: &[Layer], ctx: &OperationContext<'_>) -> Result<Vec<Raster>> {
        check_layer_count("cmap2rgb", layers.len(), &[1], "1")?;
        Ok(vec![self.convert(layers[0].as_raster(0)?, ctx)?])
    }
}
