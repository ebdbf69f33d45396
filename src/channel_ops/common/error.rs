use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChannelError {
    #[error("Invalid number of input layers for {operation}: expected {expected}, got {actual}")]
    InvalidInputCount {
        operation: &'static str,
        expected: &'static str,
        actual: usize,
    },

    #[error("Invalid raster depth: expected {expected}, got {actual}")]
    InvalidDepth { expected: &'static str, actual: usize },

    #[error("Layer {index} is a {found} layer, expected a raster")]
    TypeMismatch { index: usize, found: &'static str },

    #[error("Raster shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("Invalid raster mode: {0}")]
    InvalidMode(String),

    #[error("No color map supplied and no cmap in the active style")]
    MissingColormap,

    #[error("Unknown color map: {0}")]
    UnknownColormap(String),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("Array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

pub type Result<T> = std::result::Result<T, ChannelError>;
