//! Channel operation configuration types

use crate::channel_ops::common::error::{ChannelError, Result};

/// Configuration for combining depth-1 rasters into RGB(A)
#[derive(Debug, Clone, PartialEq)]
pub struct RgbaConfig {
    /// Label of the combined raster
    pub label: String,
}

impl Default for RgbaConfig {
    fn default() -> Self {
        Self {
            label: "RGBA".to_string(),
        }
    }
}

/// Configuration for splitting RGB(A) rasters into channels
#[derive(Debug, Clone, PartialEq)]
pub struct SplitConfig {
    /// Suffix following the channel letter, e.g. `"R Channel"`
    pub label: String,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            label: "Channel".to_string(),
        }
    }
}

/// Configuration for rendering a color-mapped raster to RGBA
#[derive(Debug, Clone, PartialEq)]
pub struct Cmap2RgbConfig {
    /// Forces a color map; otherwise the `cmap` entry of the raster's style is used
    pub cmap: Option<String>,
    pub label: String,
}

impl Default for Cmap2RgbConfig {
    fn default() -> Self {
        Self {
            cmap: None,
            label: "RGB".to_string(),
        }
    }
}

impl Cmap2RgbConfig {
    pub fn builder() -> Cmap2RgbConfigBuilder {
        Cmap2RgbConfigBuilder::default()
    }
}

/// Builder for Cmap2RgbConfig
#[derive(Default)]
pub struct Cmap2RgbConfigBuilder {
    cmap: Option<String>,
    label: Option<String>,
}

impl Cmap2RgbConfigBuilder {
    pub fn cmap(mut self, cmap: impl Into<String>) -> Self {
        self.cmap = Some(cmap.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn build(self) -> Cmap2RgbConfig {
        let default = Cmap2RgbConfig::default();
        Cmap2RgbConfig {
            cmap: self.cmap.or(default.cmap),
            label: self.label.unwrap_or(default.label),
        }
    }
}

/// Configuration for hue/confidence/strength compositing
#[derive(Debug, Clone, PartialEq)]
pub struct HcsConfig {
    /// Multiplier for the strength value
    pub s_multiplier: f64,
    /// Multiplier for the confidence value
    pub c_multiplier: f64,
    /// Whether to flip the strength and confidence channels
    pub flip_sc: bool,
    pub label: String,
}

impl Default for HcsConfig {
    fn default() -> Self {
        Self {
            s_multiplier: 1.0,
            c_multiplier: 1.0,
            flip_sc: false,
            label: "HCS".to_string(),
        }
    }
}

impl HcsConfig {
    pub fn builder() -> HcsConfigBuilder {
        HcsConfigBuilder::default()
    }

    /// Multipliers must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("s_multiplier", self.s_multiplier),
            ("c_multiplier", self.c_multiplier),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChannelError::InvalidParameter {
                    name,
                    value: value.to_string(),
                    reason: "must be a finite, non-negative number",
                });
            }
        }
        Ok(())
    }
}

/// Builder for HcsConfig
#[derive(Default)]
pub struct HcsConfigBuilder {
    s_multiplier: Option<f64>,
    c_multiplier: Option<f64>,
    flip_sc: Option<bool>,
    label: Option<String>,
}

impl HcsConfigBuilder {
    pub fn s_multiplier(mut self, multiplier: f64) -> Self {
        self.s_multiplier = Some(multiplier);
        self
    }

    pub fn c_multiplier(mut self, multiplier: f64) -> Self {
        self.c_multiplier = Some(multiplier);
        self
    }

    pub fn flip_sc(mut self, flip: bool) -> Self {
        self.flip_sc = Some(flip);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn build(self) -> HcsConfig {
        let default = HcsConfig::default();
        HcsConfig {
            s_multiplier: self.s_multiplier.unwrap_or(default.s_multiplier),
            c_multiplier: self.c_multiplier.unwrap_or(default.c_multiplier),
            flip_sc: self.flip_sc.unwrap_or(default.flip_sc),
            label: self.label.unwrap_or(default.label),
        }
    }
}

/// Configuration for colorizing a grayscale raster
#[derive(Debug, Clone, PartialEq)]
pub struct ColorizeConfig {
    pub label: String,
}

impl Default for ColorizeConfig {
    fn default() -> Self {
        Self {
            label: "Colorized".to_string(),
        }
    }
}

/// Configuration for alpha overlays
#[derive(Debug, Clone, PartialEq)]
pub struct AlphaOverlayConfig {
    pub label: String,
}

impl Default for AlphaOverlayConfig {
    fn default() -> Self {
        Self {
            label: "AlphaOverlay".to_string(),
        }
    }
}

impl RgbaConfig {
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl SplitConfig {
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl ColorizeConfig {
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl AlphaOverlayConfig {
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}
