use ndarray::{Array2, ArrayView2, Axis};
use tracing::{debug, instrument, warn};

use crate::channel_ops::common::error::Result;
use crate::channel_ops::operations::operation::{
    ChannelOperation, OperationContext, check_layer_count, check_same_shape,
};
use crate::channel_ops::operations::types::RgbaConfig;
use crate::channel_ops::raster::{Layer, Raster, rasters};

/// Clip samples into `[0, 1]`, reporting whether any sample was out of range.
///
/// The input is left untouched.
pub fn clip_unit(data: &Array2<f64>) -> (Array2<f64>, bool) {
    let out_of_range = data.iter().any(|&x| !(0.0..=1.0).contains(&x) && !x.is_nan());
    if !out_of_range {
        return (data.clone(), false);
    }
    (data.mapv(|x| x.clamp(0.0, 1.0)), true)
}

/// Stacks three or four depth-1 rasters into one RGB or RGBA raster.
///
/// Layers are taken as R, G, B and optionally A in order. Out-of-range
/// samples are clipped into `[0, 1]` with a warning.
#[derive(Debug, Clone, Default)]
pub struct RgbaCombiner {
    config: RgbaConfig,
}

impl RgbaCombiner {
    pub fn new(config: RgbaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RgbaConfig {
        &self.config
    }

    #[instrument(skip_all, fields(layers = layers.len()))]
    pub fn combine(&self, layers: &[Layer]) -> Result<Raster> {
        check_layer_count("RGBA", layers.len(), &[3, 4], "3 or 4")?;
        let rasters = rasters(layers)?;
        self.combine_rasters(&rasters)
    }

    /// Like [`RgbaCombiner::combine`], but writes the clipped samples back
    /// into the caller's layers before combining.
    #[instrument(skip_all, fields(layers = layers.len()))]
    pub fn combine_in_place(&self, layers: &mut [Layer]) -> Result<Raster> {
        check_layer_count("RGBA", layers.len(), &[3, 4], "3 or 4")?;
        {
            let rasters = rasters(layers)?;
            self.validate(&rasters)?;
        }

        for (index, layer) in layers.iter_mut().enumerate() {
            let raster = layer.as_raster_mut(index)?;
            let label = raster.label().to_string();
            let data = raster.scalar_data_mut()?;
            let (clipped, was_clipped) = clip_unit(data);
            if was_clipped {
                warn!(layer = index, label = %label, "Clipping input data into the interval [0, 1]");
                *data = clipped;
            }
        }

        self.combine(layers)
    }

    pub(crate) fn combine_rasters(&self, rasters: &[&Raster]) -> Result<Raster> {
        check_layer_count("RGBA", rasters.len(), &[3, 4], "3 or 4")?;
        self.validate(rasters)?;

        let mut channels = Vec::with_capacity(rasters.len());
        for (index, raster) in rasters.iter().enumerate() {
            let (clipped, was_clipped) = clip_unit(raster.scalar_data()?);
            if was_clipped {
                warn!(layer = index, label = raster.label(), "Clipping data into the interval [0, 1]");
            }
            channels.push(clipped);
        }

        let views: Vec<ArrayView2<'_, f64>> = channels.iter().map(|c| c.view()).collect();
        let stacked = ndarray::stack(Axis(2), &views)?;
        debug!(shape = ?stacked.dim(), "Stacked channels");

        let first = rasters[0];
        Ok(first.clone_with_data(stacked)?.with_label(&self.config.label))
    }

    fn validate(&self, rasters: &[&Raster]) -> Result<()> {
        for raster in rasters {
            raster.scalar_data()?;
        }
        for raster in &rasters[1..] {
            check_same_shape(rasters[0], raster)?;
        }
        Ok(())
    }
}

impl ChannelOperation for RgbaCombiner {
    fn name(&self) -> &'static str {
        "RGBA"
    }

    fn process(&self, layers: &[Layer], _ctx: &OperationContext<'_>) -> Result<Vec<Raster>> {
        Ok(vec![self.combine(layers)?])
    }
}
