//! Main Raster type

use ndarray::{Array2, Array3};

use crate::channel_ops::common::error::{ChannelError, Result};
use crate::channel_ops::raster::types::{Bounds, RasterData, RasterMode};

const DEFAULT_VALUE: &str = "Z";

/// A 2D raster with one, three or four channels.
///
/// Bounds, region-of-interest bounds and the value annotation are carried
/// through operations untouched; the label is normally replaced by each
/// operation that produces a new raster.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use raster_channels_rs::channel_ops::{Raster, RasterMode};
///
/// let raster = Raster::from_scalar(array![[0.0, 0.5], [0.75, 1.0]])
///     .with_label("Orientation");
///
/// assert_eq!(raster.depth(), 1);
/// assert_eq!(raster.mode(), RasterMode::Cmap);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    data: RasterData,
    mode: RasterMode,
    bounds: Bounds,
    roi_bounds: Option<Bounds>,
    label: String,
    value: String,
    value_range: Option<(f64, f64)>,
}

impl Raster {
    /// Create a depth-1 raster in `cmap` mode.
    pub fn from_scalar(data: Array2<f64>) -> Self {
        Self {
            data: RasterData::Scalar(data),
            mode: RasterMode::Cmap,
            bounds: Bounds::default(),
            roi_bounds: None,
            label: String::new(),
            value: DEFAULT_VALUE.to_string(),
            value_range: None,
        }
    }

    /// Create a depth-3 (`rgb`) or depth-4 (`rgba`) raster.
    pub fn from_channels(data: Array3<f64>) -> Result<Self> {
        let data = RasterData::Channels(data);
        let mode = derive_mode(&data, RasterMode::Cmap)?;
        Ok(Self {
            data,
            mode,
            bounds: Bounds::default(),
            roi_bounds: None,
            label: String::new(),
            value: DEFAULT_VALUE.to_string(),
            value_range: None,
        })
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_roi_bounds(mut self, roi_bounds: Option<Bounds>) -> Self {
        self.roi_bounds = roi_bounds;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Fix the range used by [`Raster::normalized`] instead of the data's own extent.
    pub fn with_value_range(mut self, low: f64, high: f64) -> Self {
        self.value_range = Some((low, high));
        self
    }

    /// Retag the raster. Fails with `InvalidMode` if the mode does not fit the depth.
    pub fn with_mode(mut self, mode: RasterMode) -> Result<Self> {
        if !mode.accepts_depth(self.depth()) {
            return Err(ChannelError::InvalidMode(format!(
                "{} cannot describe a raster of depth {}",
                mode,
                self.depth()
            )));
        }
        self.mode = mode;
        Ok(self)
    }

    /// Copy metadata (bounds, roi, value, label) onto new data.
    ///
    /// The value range describes the old samples and is not carried over.
    ///
    /// Scalar data keeps this raster's mode when it is a depth-1 mode;
    /// channel data is tagged `rgb` or `rgba` by its depth.
    pub fn clone_with_data(&self, data: impl Into<RasterData>) -> Result<Self> {
        let data = data.into();
        let mode = derive_mode(&data, self.mode)?;
        Ok(Self {
            data,
            mode,
            bounds: self.bounds,
            roi_bounds: self.roi_bounds,
            label: self.label.clone(),
            value: self.value.clone(),
            value_range: None,
        })
    }

    // Dimensions

    pub fn depth(&self) -> usize {
        self.data.depth()
    }

    /// Spatial shape as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.data.shape()
    }

    // Metadata

    pub fn mode(&self) -> RasterMode {
        self.mode
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn roi_bounds(&self) -> Option<Bounds> {
        self.roi_bounds
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.value_range
    }

    // Data access

    pub fn data(&self) -> &RasterData {
        &self.data
    }

    /// The 2D samples of a depth-1 raster.
    pub fn scalar_data(&self) -> Result<&Array2<f64>> {
        match &self.data {
            RasterData::Scalar(array) => Ok(array),
            RasterData::Channels(array) => Err(ChannelError::InvalidDepth {
                expected: "1",
                actual: array.dim().2,
            }),
        }
    }

    pub fn scalar_data_mut(&mut self) -> Result<&mut Array2<f64>> {
        match &mut self.data {
            RasterData::Scalar(array) => Ok(array),
            RasterData::Channels(array) => Err(ChannelError::InvalidDepth {
                expected: "1",
                actual: array.dim().2,
            }),
        }
    }

    /// The channel stack of a depth-3 or depth-4 raster.
    pub fn channel_data(&self) -> Result<&Array3<f64>> {
        match &self.data {
            RasterData::Channels(array) => Ok(array),
            RasterData::Scalar(_) => Err(ChannelError::InvalidDepth {
                expected: "3 or 4",
                actual: 1,
            }),
        }
    }

    /// Normalized view of a depth-1 raster, clipped into `[0, 1]`.
    ///
    /// Samples are rescaled over `value_range` when one is set, otherwise
    /// over the data's own min/max. A flat raster normalizes to zeros.
    pub fn normalized(&self) -> Result<Array2<f64>> {
        let data = self.scalar_data()?;
        if data.is_empty() {
            return Ok(data.clone());
        }

        let (low, high) = self.value_range.unwrap_or_else(|| {
            data.iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                    (lo.min(x), hi.max(x))
                })
        });

        let span = high - low;
        if span.is_nan() || span <= 0.0 {
            return Ok(Array2::zeros(data.dim()));
        }

        Ok(data.mapv(|x| ((x - low) / span).clamp(0.0, 1.0)))
    }

    /// [`Raster::normalized`] wrapped back into a raster with this raster's metadata.
    pub fn normalized_raster(&self) -> Result<Self> {
        let normalized = self.normalized()?;
        let mut raster = self.clone_with_data(normalized)?;
        raster.value_range = Some((0.0, 1.0));
        Ok(raster)
    }
}

fn derive_mode(data: &RasterData, scalar_mode: RasterMode) -> Result<RasterMode> {
    match data.depth() {
        1 if scalar_mode.accepts_depth(1) => Ok(scalar_mode),
        1 => Ok(RasterMode::Cmap),
        3 => Ok(RasterMode::Rgb),
        4 => Ok(RasterMode::Rgba),
        depth => Err(ChannelError::InvalidDepth {
            expected: "1, 3 or 4",
            actual: depth,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_channel_depth_sets_mode() {
        let rgb = Raster::from_channels(Array3::zeros((2, 2, 3))).unwrap();
        assert_eq!(rgb.mode(), RasterMode::Rgb);
        assert_eq!(rgb.depth(), 3);

        let rgba = Raster::from_channels(Array3::zeros((2, 2, 4))).unwrap();
        assert_eq!(rgba.mode(), RasterMode::Rgba);
    }

    #[test]
    fn test_two_channel_stack_rejected() {
        let result = Raster::from_channels(Array3::zeros((2, 2, 2)));
        assert!(matches!(
            result.unwrap_err(),
            ChannelError::InvalidDepth { actual: 2, .. }
        ));
    }

    #[test]
    fn test_mode_must_fit_depth() {
        let raster = Raster::from_scalar(Array2::zeros((2, 2)));
        assert!(raster.clone().with_mode(RasterMode::Grayscale).is_ok());
        assert!(matches!(
            raster.with_mode(RasterMode::Rgb).unwrap_err(),
            ChannelError::InvalidMode(_)
        ));
    }

    #[test]
    fn test_normalized_uses_data_extent() {
        let raster = Raster::from_scalar(array![[2.0, 4.0], [6.0, 10.0]]);
        let normalized = raster.normalized().unwrap();
        assert_eq!(normalized, array![[0.0, 0.25], [0.5, 1.0]]);
    }

    #[test]
    fn test_normalized_clips_to_value_range() {
        let raster =
            Raster::from_scalar(array![[-1.0, 0.5], [1.0, 3.0]]).with_value_range(0.0, 2.0);
        let normalized = raster.normalized().unwrap();
        assert_eq!(normalized, array![[0.0, 0.25], [0.5, 1.0]]);
    }

    #[test]
    fn test_flat_raster_normalizes_to_zero() {
        let raster = Raster::from_scalar(Array2::from_elem((3, 3), 7.0));
        assert!(raster.normalized().unwrap().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_clone_with_data_keeps_metadata() {
        let roi = Bounds::new(-0.25, -0.25, 0.25, 0.25);
        let raster = Raster::from_scalar(Array2::zeros((2, 2)))
            .with_bounds(Bounds::new(0.0, 0.0, 2.0, 2.0))
            .with_roi_bounds(Some(roi))
            .with_value("Orientation")
            .with_mode(RasterMode::Grayscale)
            .unwrap();

        let rgb = raster.clone_with_data(Array3::zeros((2, 2, 3))).unwrap();
        assert_eq!(rgb.mode(), RasterMode::Rgb);
        assert_eq!(rgb.bounds(), Bounds::new(0.0, 0.0, 2.0, 2.0));
        assert_eq!(rgb.roi_bounds(), Some(roi));
        assert_eq!(rgb.value(), "Orientation");

        let scalar = raster.clone_with_data(Array2::ones((2, 2))).unwrap();
        assert_eq!(scalar.mode(), RasterMode::Grayscale);
    }
}
