//! Raster metadata types

use std::fmt;

use ndarray::{Array2, Array3};

/// Spatial extent of a raster in sheet coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl Bounds {
    pub const fn new(left: f64, bottom: f64, right: f64, top: f64) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }
}

impl Default for Bounds {
    /// Unit box centred on the origin.
    fn default() -> Self {
        Self::new(-0.5, -0.5, 0.5, 0.5)
    }
}

/// How a raster's samples are meant to be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RasterMode {
    /// Depth 1, rendered in gray levels
    Grayscale,
    /// Depth 1, rendered through a named color map
    Cmap,
    /// Depth 3
    Rgb,
    /// Depth 4
    Rgba,
}

impl RasterMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Grayscale => "grayscale",
            Self::Cmap => "cmap",
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
        }
    }

    /// Whether this mode can tag a raster of the given depth.
    pub fn accepts_depth(&self, depth: usize) -> bool {
        match self {
            Self::Grayscale | Self::Cmap => depth == 1,
            Self::Rgb => depth == 3,
            Self::Rgba => depth == 4,
        }
    }
}

impl fmt::Display for RasterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sample storage: a scalar field or a stack of channels along the last axis.
#[derive(Debug, Clone, PartialEq)]
pub enum RasterData {
    /// Shape `(H, W)`
    Scalar(Array2<f64>),
    /// Shape `(H, W, depth)`
    Channels(Array3<f64>),
}

impl RasterData {
    pub fn depth(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Channels(array) => array.dim().2,
        }
    }

    /// Spatial shape `(H, W)`.
    pub fn shape(&self) -> (usize, usize) {
        match self {
            Self::Scalar(array) => array.dim(),
            Self::Channels(array) => {
                let (rows, cols, _) = array.dim();
                (rows, cols)
            }
        }
    }
}

impl From<Array2<f64>> for RasterData {
    fn from(array: Array2<f64>) -> Self {
        Self::Scalar(array)
    }
}

impl From<Array3<f64>> for RasterData {
    fn from(array: Array3<f64>) -> Self {
        Self::Channels(array)
    }
}
