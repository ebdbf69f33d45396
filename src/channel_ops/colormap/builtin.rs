//! Named color maps and multi-stop interpolation.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::channel_ops::colormap::lookup::{Colormap, ColormapProvider};
use crate::channel_ops::colorspace::hsv_to_rgb;

/// Returned for NaN samples.
const BAD_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 0.0];

/// A color stop: position in [0, 1] mapped to an RGB color in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub t: f64,
    pub rgb: [f64; 3],
}

impl ColorStop {
    pub const fn new(t: f64, r: f64, g: f64, b: f64) -> Self {
        Self { t, rgb: [r, g, b] }
    }
}

// Blue -> White -> Red, low values blue
const RDBU_R_STOPS: &[ColorStop] = &[
    ColorStop::new(0.00, 0.019608, 0.188235, 0.380392),
    ColorStop::new(0.25, 0.262745, 0.576471, 0.764706),
    ColorStop::new(0.50, 0.968627, 0.968627, 0.968627),
    ColorStop::new(0.75, 0.839216, 0.376471, 0.301961),
    ColorStop::new(1.00, 0.403922, 0.000000, 0.121569),
];

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn multi_stop(stops: &[ColorStop], t: f64) -> [f64; 3] {
    let first = stops[0].rgb;
    let last = stops[stops.len() - 1].rgb;
    if t <= stops[0].t {
        return first;
    }
    for pair in stops.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if t <= hi.t {
            let ratio = (t - lo.t) / (hi.t - lo.t);
            return [
                lerp(lo.rgb[0], hi.rgb[0], ratio),
                lerp(lo.rgb[1], hi.rgb[1], ratio),
                lerp(lo.rgb[2], hi.rgb[2], ratio),
            ];
        }
    }
    last
}

/// Build a color map from interpolation stops sorted by position.
///
/// Positions outside the first and last stop take the end colors.
fn from_stops(stops: &'static [ColorStop]) -> Colormap {
    Arc::new(move |t: f64| {
        if t.is_nan() {
            return BAD_COLOR;
        }
        let [r, g, b] = multi_stop(stops, t);
        [r, g, b, 1.0]
    })
}

fn gray() -> Colormap {
    Arc::new(|t: f64| {
        if t.is_nan() {
            return BAD_COLOR;
        }
        let v = t.clamp(0.0, 1.0);
        [v, v, v, 1.0]
    })
}

fn hsv() -> Colormap {
    Arc::new(|t: f64| {
        if t.is_nan() {
            return BAD_COLOR;
        }
        let (r, g, b) = hsv_to_rgb(t.clamp(0.0, 1.0), 1.0, 1.0);
        [r, g, b, 1.0]
    })
}

/// Color maps addressable by name.
#[derive(Clone, Default)]
pub struct ColormapRegistry {
    maps: HashMap<String, Colormap>,
}

impl ColormapRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with `gray`, `hsv` and `RdBu_r`.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register("gray", gray());
        registry.register("hsv", hsv());
        registry.register_stops("RdBu_r", RDBU_R_STOPS);
        registry
    }

    /// Add or replace a color map.
    pub fn register(&mut self, name: impl Into<String>, colormap: Colormap) {
        let name = name.into();
        debug!(colormap = %name, "Registering color map");
        self.maps.insert(name, colormap);
    }

    /// Add a color map interpolated linearly between `stops`.
    pub fn register_stops(&mut self, name: impl Into<String>, stops: &'static [ColorStop]) {
        self.register(name, from_stops(stops));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.maps.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.maps.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl ColormapProvider for ColormapRegistry {
    fn colormap(&self, name: &str) -> Option<Colormap> {
        self.maps.get(name).cloned()
    }
}

impl std::fmt::Debug for ColormapRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColormapRegistry")
            .field("maps", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        let registry = ColormapRegistry::with_builtin();
        assert_eq!(registry.names(), vec!["RdBu_r", "gray", "hsv"]);
    }

    #[test]
    fn test_gray_ramp() {
        let gray = ColormapRegistry::with_builtin().colormap("gray").unwrap();
        assert_eq!(gray(0.25), [0.25, 0.25, 0.25, 1.0]);
        assert_eq!(gray(1.5), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(gray(f64::NAN), BAD_COLOR);
    }

    #[test]
    fn test_hsv_endpoints_are_red() {
        let hsv = ColormapRegistry::with_builtin().colormap("hsv").unwrap();
        assert_eq!(hsv(0.0), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(hsv(1.0), [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_stops_interpolate() {
        let rdbu = ColormapRegistry::with_builtin().colormap("RdBu_r").unwrap();
        let mid = rdbu(0.5);
        assert!(mid[..3].iter().all(|c| (c - 0.968627).abs() < 1e-12));
        assert_eq!(mid[3], 1.0);

        let quarter = rdbu(0.125);
        let expected = lerp(RDBU_R_STOPS[0].rgb[0], RDBU_R_STOPS[1].rgb[0], 0.5);
        assert!((quarter[0] - expected).abs() < 1e-12);
        assert_eq!(rdbu(-3.0)[..3], RDBU_R_STOPS[0].rgb);
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = ColormapRegistry::with_builtin();
        registry.register("gray", Arc::new(|_: f64| [0.5, 0.5, 0.5, 0.5]));
        let gray = registry.colormap("gray").unwrap();
        assert_eq!(gray(0.0), [0.5, 0.5, 0.5, 0.5]);
        assert!(registry.colormap("viridis").is_none());
    }
}
