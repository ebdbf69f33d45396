use ndarray::Axis;
use tracing::{debug, instrument};

use crate::channel_ops::common::error::{ChannelError, Result};
use crate::channel_ops::operations::operation::{
    ChannelOperation, OperationContext, check_layer_count,
};
use crate::channel_ops::operations::types::SplitConfig;
use crate::channel_ops::raster::{Layer, Raster, RasterMode};

const CHANNEL_LETTERS: [char; 4] = ['R', 'G', 'B', 'A'];

/// Splits an RGB or RGBA raster into one grayscale raster per channel.
#[derive(Debug, Clone, Default)]
pub struct ChannelSplitter {
    config: SplitConfig,
}

impl ChannelSplitter {
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    #[instrument(skip_all, fields(mode = %raster.mode(), depth = raster.depth()))]
    pub fn split(&self, raster: &Raster) -> Result<Vec<Raster>> {
        match raster.mode() {
            RasterMode::Rgb | RasterMode::Rgba => {}
            mode @ (RasterMode::Grayscale | RasterMode::Cmap) => {
                return Err(ChannelError::InvalidMode(format!(
                    "can only split rgb or rgba rasters, got {mode}"
                )));
            }
        }

        let data = raster.channel_data()?;
        let channels = CHANNEL_LETTERS
            .iter()
            .take(raster.depth())
            .enumerate()
            .map(|(index, letter)| {
                let channel = data.index_axis(Axis(2), index).to_owned();
                Ok(raster
                    .clone_with_data(channel)?
                    .with_mode(RasterMode::Grayscale)?
                    .with_label(format!("{letter} {}", self.config.label)))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(channels = channels.len(), "Split raster");
        Ok(channels)
    }
}

impl ChannelOperation for ChannelSplitter {
    fn name(&self) -> &'static str {
        "split"
    }

    fn process(&self, layers: &[Layer], _ctx: &OperationContext<'_>) -> Result<Vec<Raster>> {
        check_layer_count("split", layers.len(), &[1], "1")?;
        self.split(layers[0].as_raster(0)?)
    }
}
