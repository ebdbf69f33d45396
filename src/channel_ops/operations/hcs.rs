use ndarray::{Array2, Array3, Axis, Zip};
use tracing::{debug, info, instrument};

use crate::channel_ops::colorspace::hsv_to_rgb;
use crate::channel_ops::common::error::Result;
use crate::channel_ops::operations::operation::{
    ChannelOperation, OperationContext, check_layer_count, check_same_shape,
};
use crate::channel_ops::operations::types::HcsConfig;
use crate::channel_ops::raster::{Layer, Raster, rasters};

/// Hue-Confidence-Strength compositor.
///
/// Takes a hue raster, a confidence raster and an optional strength raster
/// and maps them through HSV to a single RGB raster:
///
/// * hue is the raster's normalized view,
/// * saturation is `confidence * c_multiplier` clipped into `[0, 1]`,
/// * value is `strength * s_multiplier` clipped into `[0, 1]`, with a
///   strength of one everywhere when no strength raster is given.
///
/// With `flip_sc` the saturation and value planes trade places.
#[derive(Debug, Clone, Default)]
pub struct HcsCompositor {
    config: HcsConfig,
}

impl HcsCompositor {
    pub fn new(config: HcsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &HcsConfig {
        &self.config
    }

    #[instrument(skip_all, fields(layers = layers.len()))]
    pub fn composite(&self, layers: &[Layer]) -> Result<Raster> {
        check_layer_count("HCS", layers.len(), &[2, 3], "2 or 3")?;
        let rasters = rasters(layers)?;
        self.composite_rasters(&rasters)
    }

    pub(crate) fn composite_rasters(&self, rasters: &[&Raster]) -> Result<Raster> {
        check_layer_count("HCS", rasters.len(), &[2, 3], "2 or 3")?;
        let (hue, confidence) = (rasters[0], rasters[1]);
        let confidence_data = confidence.scalar_data()?;
        let hue_data = hue.normalized()?;
        check_same_shape(hue, confidence)?;

        let strength_data = match rasters.get(2) {
            Some(strength) => {
                let data = strength.scalar_data()?;
                check_same_shape(hue, strength)?;
                data.clone()
            }
            None => Array2::ones(hue.shape()),
        };

        let c_multiplier = self.config.c_multiplier;
        let s_multiplier = self.config.s_multiplier;
        let s = confidence_data.mapv(|x| (x * c_multiplier).clamp(0.0, 1.0));
        let v = strength_data.mapv(|x| (x * s_multiplier).clamp(0.0, 1.0));

        // Flipped value is re-clipped, flipped saturation is not.
        let (s, v) = if self.config.flip_sc {
            let flipped_v = s.mapv(|x| x.clamp(0.0, 1.0));
            (v, flipped_v)
        } else {
            (s, v)
        };

        let rgb = hsv_planes_to_rgb(&hue_data, &s, &v)?;
        debug!(shape = ?rgb.dim(), flip_sc = self.config.flip_sc, "Converted HSV planes");

        let output = hue.clone_with_data(rgb)?.with_label(&self.config.label);
        info!(label = output.label(), "HCS composite complete");
        Ok(output)
    }
}

/// Element-wise HSV to RGB over three equally shaped planes, stacked as `(H, W, 3)`.
fn hsv_planes_to_rgb(h: &Array2<f64>, s: &Array2<f64>, v: &Array2<f64>) -> Result<Array3<f64>> {
    let pixels = Zip::from(h)
        .and(s)
        .and(v)
        .par_map_collect(|&h, &s, &v| hsv_to_rgb(h, s, v));

    let r = pixels.mapv(|(r, _, _)| r);
    let g = pixels.mapv(|(_, g, _)| g);
    let b = pixels.mapv(|(_, _, b)| b);
    Ok(ndarray::stack(Axis(2), &[r.view(), g.view(), b.view()])?)
}

impl ChannelOperation for HcsCompositor {
    fn name(&self) -> &'static str {
        "HCS"
    }

    fn process(&self, layers: &[Layer], _ctx: &OperationContext<'_>) -> Result<Vec<Raster>> {
        Ok(vec![self.composite(layers)?])
    }
}
