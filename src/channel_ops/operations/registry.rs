use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::channel_ops::common::error::{ChannelError, Result};
use crate::channel_ops::operations::alpha_overlay::AlphaOverlay;
use crate::channel_ops::operations::hcs::HcsCompositor;
use crate::channel_ops::operations::operation::{ChannelOperation, OperationContext};
use crate::channel_ops::operations::rgba::RgbaCombiner;
use crate::channel_ops::raster::{Layer, Raster};

/// Named operations available to an orchestration layer.
#[derive(Default)]
pub struct OperationRegistry {
    operations: BTreeMap<String, Box<dyn ChannelOperation>>,
}

impl OperationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `operation` to `name`, replacing any previous binding.
    pub fn register(&mut self, name: impl Into<String>, operation: Box<dyn ChannelOperation>) {
        let name = name.into();
        debug!(name = %name, operation = operation.name(), "Registering operation");
        self.operations.insert(name, operation);
    }

    pub fn get(&self, name: &str) -> Option<&dyn ChannelOperation> {
        self.operations.get(name).map(|op| op.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.operations.keys().map(String::as_str).collect()
    }

    pub fn invoke(
        &self,
        name: &str,
        layers: &[Layer],
        ctx: &OperationContext<'_>,
    ) -> Result<Vec<Raster>> {
        let operation = self
            .get(name)
            .ok_or_else(|| ChannelError::UnknownOperation(name.to_string()))?;
        info!(operation = name, layers = layers.len(), "Invoking operation");
        operation.process(layers, ctx)
    }
}

impl std::fmt::Debug for OperationRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperationRegistry")
            .field("operations", &self.names())
            .finish()
    }
}

/// Register the composite operations under `RGBA`, `HCS` and `alpha_overlay`.
pub fn register_channel_operations(registry: &mut OperationRegistry) {
    registry.register("RGBA", Box::new(RgbaCombiner::default()));
    registry.register("HCS", Box::new(HcsCompositor::default()));
    registry.register("alpha_overlay", Box::new(AlphaOverlay::default()));
}
