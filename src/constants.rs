//! Default sizes and values for the picker.

/// Default side length of the saturation/brightness square, in pixels
pub const SURFACE_SIZE: f64 = 150.0;

/// Default height of the hue strip, in pixels
pub const HUE_HEIGHT: f64 = 150.0;

/// Degrees in the hue circle
pub const HUE_MAX: f64 = 360.0;

/// Largest hue the strip can pick; the bottom edge must not wrap to 0
pub const HUE_BELOW_MAX: f64 = HUE_MAX - HUE_MAX * f64::EPSILON;

/// Upper bound of saturation and brightness percentages
pub const PERCENT_MAX: f64 = 100.0;
