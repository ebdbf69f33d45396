use crate::channel_ops::common::error::{ChannelError, Result};
use crate::channel_ops::raster::grid::Raster;

/// Contour lines drawn over a raster, one polyline per level crossing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Contours {
    pub label: String,
    pub levels: Vec<f64>,
    pub lines: Vec<Vec<(f64, f64)>>,
}

/// One element of an overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    Raster(Raster),
    Contours(Contours),
}

impl Layer {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Raster(_) => "raster",
            Self::Contours(_) => "contours",
        }
    }

    /// Borrow the raster held by the layer at `index` of an overlay.
    pub fn as_raster(&self, index: usize) -> Result<&Raster> {
        match self {
            Self::Raster(raster) => Ok(raster),
            other => Err(ChannelError::TypeMismatch {
                index,
                found: other.kind(),
            }),
        }
    }

    pub fn as_raster_mut(&mut self, index: usize) -> Result<&mut Raster> {
        match self {
            Self::Raster(raster) => Ok(raster),
            other => Err(ChannelError::TypeMismatch {
                index,
                found: other.kind(),
            }),
        }
    }
}

impl From<Raster> for Layer {
    fn from(raster: Raster) -> Self {
        Self::Raster(raster)
    }
}

impl From<Contours> for Layer {
    fn from(contours: Contours) -> Self {
        Self::Contours(contours)
    }
}

/// Every layer as a raster, failing on the first non-raster.
pub(crate) fn rasters(layers: &[Layer]) -> Result<Vec<&Raster>> {
    layers
        .iter()
        .enumerate()
        .map(|(index, layer)| layer.as_raster(index))
        .collect()
}
