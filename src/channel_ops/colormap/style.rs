//! Display styles keyed by raster label

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::channel_ops::raster::Raster;

/// A single style option.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Text(String),
    /// Values handed out in turn, e.g. one color per contour level
    Cycle(Vec<String>),
}

/// Named display options for one kind of raster.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleOpts {
    entries: BTreeMap<String, StyleValue>,
}

impl StyleOpts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: StyleValue) -> Self {
        self.entries.insert(key.into(), value);
        self
    }

    pub fn with_text(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(key, StyleValue::Text(value.into()))
    }

    /// Gray color map with nearest-neighbour interpolation.
    pub fn gray_nearest() -> Self {
        Self::new()
            .with_text("cmap", "gray")
            .with_text("interpolation", "nearest")
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    /// A text entry; cycles are not text.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.entries.get(key)? {
            StyleValue::Text(text) => Some(text),
            StyleValue::Cycle(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolves the active style of a raster.
pub trait StyleLookup {
    fn style_for(&self, raster: &Raster) -> Option<&StyleOpts>;
}

/// Styles keyed by label, with spaces in labels read as underscores.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    styles: HashMap<String, StyleOpts>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key under which a raster with `label` finds its style.
    pub fn style_key(label: &str) -> String {
        label.trim().replace(' ', "_")
    }

    pub fn set(&mut self, key: impl Into<String>, opts: StyleOpts) {
        let key = key.into();
        debug!(style = %key, "Setting style");
        self.styles.insert(key, opts);
    }

    pub fn get(&self, key: &str) -> Option<&StyleOpts> {
        self.styles.get(key)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl StyleLookup for StyleRegistry {
    fn style_for(&self, raster: &Raster) -> Option<&StyleOpts> {
        self.styles.get(&Self::style_key(raster.label()))
    }
}

/// Install the default styles for the labels channel operations produce.
pub fn register_default_styles(registry: &mut StyleRegistry) {
    for channel in ["R", "G", "B", "A"] {
        registry.set(format!("{channel}_Channel"), StyleOpts::gray_nearest());
    }
    registry.set(
        "Level_Contours",
        StyleOpts::new().with(
            "color",
            StyleValue::Cycle(vec!["b".into(), "g".into(), "r".into()]),
        ),
    );
    registry.set("RGB", StyleOpts::new().with_text("interpolation", "nearest"));
    registry.set("RGBA", StyleOpts::new().with_text("interpolation", "nearest"));
}
