//! Mapping between pixel positions on the two selection surfaces and HSB.
//!
//! The square maps x to saturation (left = 0) and y to brightness (top =
//! full). The hue strip maps y to hue (top = 0°). Pointer positions are
//! clamped to the surface, so dragging past an edge pins the value at that
//! edge.

use serde::{Deserialize, Serialize};

use crate::color::Hsb;
use crate::constants::{HUE_MAX, PERCENT_MAX};

/// Offset of the saturation/brightness indicator inside the square.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectorPosition {
    pub x: f64,
    pub y: f64,
}

/// Vertical offset of the hue indicator inside the strip.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HuePosition {
    pub y: f64,
}

/// Fraction of `extent` covered by `pos`, clamped to 0.0–1.0.
///
/// `None` when the extent is degenerate or the position is not a number.
fn fraction(pos: f64, extent: f64) -> Option<f64> {
    if !extent.is_finite() || extent <= 0.0 || pos.is_nan() {
        return None;
    }
    Some((pos / extent).clamp(0.0, 1.0))
}

/// Saturation and brightness (percent) for a point on the square.
pub(crate) fn saturation_brightness_at(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> Option<(f64, f64)> {
    let sx = fraction(x, width)?;
    let by = fraction(y, height)?;
    Some((sx * PERCENT_MAX, (1.0 - by) * PERCENT_MAX))
}

/// Hue (degrees) for a vertical position on the strip.
pub(crate) fn hue_at(y: f64, height: f64) -> Option<f64> {
    fraction(y, height).map(|t| t * HUE_MAX)
}

/// Where the square's indicator sits for `hsb`.
pub(crate) fn selector_position(hsb: Hsb, width: f64, height: f64) -> SelectorPosition {
    SelectorPosition {
        x: hsb.s / PERCENT_MAX * width.max(0.0),
        y: (1.0 - hsb.b / PERCENT_MAX) * height.max(0.0),
    }
}

/// Where the strip's indicator sits for `hsb`.
pub(crate) fn hue_position(hsb: Hsb, height: f64) -> HuePosition {
    HuePosition {
        y: hsb.h / HUE_MAX * height.max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_of_square() {
        assert_eq!(
            saturation_brightness_at(0.0, 0.0, 150.0, 150.0),
            Some((0.0, 100.0))
        );
        assert_eq!(
            saturation_brightness_at(150.0, 150.0, 150.0, 150.0),
            Some((100.0, 0.0))
        );
        assert_eq!(
            saturation_brightness_at(75.0, 75.0, 150.0, 150.0),
            Some((50.0, 50.0))
        );
    }

    #[test]
    fn test_outside_square_is_clamped() {
        assert_eq!(
            saturation_brightness_at(-40.0, 900.0, 150.0, 150.0),
            Some((0.0, 0.0))
        );
        assert_eq!(
            saturation_brightness_at(f64::INFINITY, f64::NEG_INFINITY, 150.0, 150.0),
            Some((100.0, 100.0))
        );
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(saturation_brightness_at(10.0, 10.0, 0.0, 150.0), None);
        assert_eq!(saturation_brightness_at(f64::NAN, 10.0, 150.0, 150.0), None);
        assert_eq!(hue_at(10.0, -1.0), None);
        assert_eq!(hue_at(10.0, f64::NAN), None);
    }

    #[test]
    fn test_hue_strip() {
        assert_eq!(hue_at(0.0, 150.0), Some(0.0));
        assert_eq!(hue_at(75.0, 150.0), Some(180.0));
        assert_eq!(hue_at(-20.0, 150.0), Some(0.0));
        assert_eq!(hue_at(400.0, 150.0), Some(360.0));
    }

    #[test]
    fn test_positions_invert_mapping() {
        let hsb = Hsb::new(90.0, 40.0, 25.0);
        let pos = selector_position(hsb, 200.0, 100.0);
        assert_eq!(pos, SelectorPosition { x: 80.0, y: 75.0 });
        let (s, b) = saturation_brightness_at(pos.x, pos.y, 200.0, 100.0).unwrap();
        assert!((s - 40.0).abs() < 1e-9);
        assert!((b - 25.0).abs() < 1e-9);

        assert_eq!(hue_position(hsb, 120.0), HuePosition { y: 30.0 });
    }
}
