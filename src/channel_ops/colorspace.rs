//! HSV to RGB conversion

/// Convert one HSV triple to RGB, all components in `[0, 1]`.
///
/// Matches Python's `colorsys.hsv_to_rgb` branch for branch: zero
/// saturation is achromatic, the sextant is the truncated `h * 6` taken
/// modulo 6, so `h = 1.0` lands back on red.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }

    let sector = (h * 6.0).trunc();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rgb(actual: (f64, f64, f64), expected: (f64, f64, f64)) {
        assert!((actual.0 - expected.0).abs() < 1e-12, "{actual:?} != {expected:?}");
        assert!((actual.1 - expected.1).abs() < 1e-12, "{actual:?} != {expected:?}");
        assert!((actual.2 - expected.2).abs() < 1e-12, "{actual:?} != {expected:?}");
    }

    #[test]
    fn test_primaries() {
        assert_rgb(hsv_to_rgb(0.0, 1.0, 1.0), (1.0, 0.0, 0.0));
        assert_rgb(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), (0.0, 1.0, 0.0));
        assert_rgb(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0), (0.0, 0.0, 1.0));
    }

    #[test]
    fn test_hue_one_wraps_to_red() {
        assert_eq!(hsv_to_rgb(1.0, 1.0, 1.0), (1.0, 0.0, 0.0));
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        assert_eq!(hsv_to_rgb(0.4, 0.0, 0.3), (0.3, 0.3, 0.3));
        assert_eq!(hsv_to_rgb(0.0, 0.0, 1.0), (1.0, 1.0, 1.0));
    }

    #[test]
    fn test_matches_colorsys_mid_values() {
        // colorsys.hsv_to_rgb(0.5, 0.5, 0.5) == (0.25, 0.5, 0.5)
        assert_rgb(hsv_to_rgb(0.5, 0.5, 0.5), (0.25, 0.5, 0.5));
        // colorsys.hsv_to_rgb(0.9, 0.6, 0.8) == (0.8, 0.32, 0.608)
        assert_rgb(hsv_to_rgb(0.9, 0.6, 0.8), (0.8, 0.32, 0.608));
    }
}
