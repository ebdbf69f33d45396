use crate::channel_ops::colormap::{ColormapProvider, StyleLookup};
use crate::channel_ops::common::error::{ChannelError, Result};
use crate::channel_ops::raster::{Layer, Raster};

/// Read-only collaborators an operation may consult.
#[derive(Clone, Copy)]
pub struct OperationContext<'a> {
    pub styles: &'a dyn StyleLookup,
    pub colormaps: &'a dyn ColormapProvider,
}

impl<'a> OperationContext<'a> {
    pub fn new(styles: &'a dyn StyleLookup, colormaps: &'a dyn ColormapProvider) -> Self {
        Self { styles, colormaps }
    }
}

pub trait ChannelOperation: Send + Sync {
    fn name(&self) -> &'static str;
    fn process(&self, layers: &[Layer], ctx: &OperationContext<'_>) -> Result<Vec<Raster>>;
}

pub(crate) fn check_layer_count(
    operation: &'static str,
    actual: usize,
    allowed: &[usize],
    expected: &'static str,
) -> Result<()> {
    if allowed.contains(&actual) {
        return Ok(());
    }
    Err(ChannelError::InvalidInputCount {
        operation,
        expected,
        actual,
    })
}

pub(crate) fn check_same_shape(reference: &Raster, other: &Raster) -> Result<()> {
    if reference.shape() != other.shape() {
        return Err(ChannelError::ShapeMismatch {
            expected: reference.shape(),
            actual: other.shape(),
        });
    }
    Ok(())
}
