use tracing::{info, instrument};

use crate::channel_ops::{
    colormap::{
        ColormapProvider, ColormapRegistry, StyleLookup, StyleRegistry, register_default_styles,
    },
    common::error::Result,
    operations::{OperationContext, OperationRegistry, register_channel_operations},
    raster::{Layer, Raster},
};

/// Owns a style lookup, a color map provider and an operation registry,
/// and runs registered operations by name against them.
pub struct ChannelPipeline<S: StyleLookup, C: ColormapProvider> {
    styles: S,
    colormaps: C,
    operations: OperationRegistry,
}

impl ChannelPipeline<StyleRegistry, ColormapRegistry> {
    /// Default styles, built-in color maps and the standard composite operations.
    pub fn new() -> Self {
        let mut styles = StyleRegistry::new();
        register_default_styles(&mut styles);

        let mut operations = OperationRegistry::new();
        register_channel_operations(&mut operations);

        Self {
            styles,
            colormaps: ColormapRegistry::with_builtin(),
            operations,
        }
    }
}

impl Default for ChannelPipeline<StyleRegistry, ColormapRegistry> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StyleLookup, C: ColormapProvider> ChannelPipeline<S, C> {
    pub fn with_custom(styles: S, colormaps: C, operations: OperationRegistry) -> Self {
        Self {
            styles,
            colormaps,
            operations,
        }
    }

    pub fn context(&self) -> OperationContext<'_> {
        OperationContext::new(&self.styles, &self.colormaps)
    }

    #[instrument(skip(self, layers), fields(layers = layers.len()))]
    pub fn run(&self, operation: &str, layers: &[Layer]) -> Result<Vec<Raster>> {
        let outputs = self.operations.invoke(operation, layers, &self.context())?;
        info!(
            outputs = outputs.len(),
            labels = ?outputs.iter().map(Raster::label).collect::<Vec<_>>(),
            "Operation complete"
        );
        Ok(outputs)
    }

    pub fn operations(&self) -> &OperationRegistry {
        &self.operations
    }

    pub fn operations_mut(&mut self) -> &mut OperationRegistry {
        &mut self.operations
    }

    pub fn styles(&self) -> &S {
        &self.styles
    }

    pub fn styles_mut(&mut self) -> &mut S {
        &mut self.styles
    }

    pub fn colormaps(&self) -> &C {
        &self.colormaps
    }

    pub fn colormaps_mut(&mut self) -> &mut C {
        &mut self.colormaps
    }
}
