//! Color math: conversions between RGB, HSB and HEX.
//!
//! The unit helpers work on normalized f64 in 0.0–1.0. The public functions
//! take and return the picker's representations: RGB channels 0–255, hue in
//! degrees, saturation and brightness as percentages, HEX as six lowercase
//! digits. RGB is the pivot for every HEX conversion.

use crate::color::{Hsb, Rgb};
use crate::constants::{HUE_MAX, PERCENT_MAX};
use crate::error::PickerError;

/// HSB → RGB. All values 0.0–1.0.
fn hsb_to_rgb_unit(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = (h * 6.0) % 6.0;
    let i = h6.floor() as u32;
    let f = h6 - h6.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// RGB → HSB. All values 0.0–1.0.
fn rgb_to_hsb_unit(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { delta / max };

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };

    (h, s, v)
}

/// Wrap a hue in degrees into `[0, 360)`.
pub(crate) fn wrap_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(HUE_MAX);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if wrapped >= HUE_MAX {
        0.0
    } else {
        wrapped
    }
}

/// Convert RGB channels to HSB.
///
/// Achromatic colors (all channels equal) have hue 0 and saturation 0.
pub fn rgb_to_hsb(rgb: Rgb) -> Hsb {
    let (h, s, v) = rgb_to_hsb_unit(
        rgb.r as f64 / 255.0,
        rgb.g as f64 / 255.0,
        rgb.b as f64 / 255.0,
    );
    Hsb {
        h: wrap_hue(h * HUE_MAX),
        s: s * PERCENT_MAX,
        b: v * PERCENT_MAX,
    }
}

/// Convert HSB to RGB, rounding every channel to the nearest integer.
///
/// Hue is wrapped into `[0, 360)`; saturation and brightness are clamped to
/// `[0, 100]` before conversion.
pub fn hsb_to_rgb(hsb: Hsb) -> Rgb {
    let h = wrap_hue(hsb.h) / HUE_MAX;
    let s = (hsb.s / PERCENT_MAX).clamp(0.0, 1.0);
    let v = (hsb.b / PERCENT_MAX).clamp(0.0, 1.0);
    let (r, g, b) = hsb_to_rgb_unit(h, s, v);
    Rgb::from_unit(r, g, b)
}

/// Parse six hex digits (optional leading `#`, any case) into RGB.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, PickerError> {
    let stripped = hex.strip_prefix('#').unwrap_or(hex);
    if stripped.len() != 6 || !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(PickerError::invalid_format(format!(
            "expected 6 hex digits, got {hex:?}"
        )));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&stripped[range], 16)
            .map_err(|e| PickerError::invalid_format(format!("bad hex channel in {hex:?}: {e}")))
    };
    Ok(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

/// Format RGB as six lowercase hex digits (no `#` prefix).
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// HEX → HSB, through RGB.
pub fn hex_to_hsb(hex: &str) -> Result<Hsb, PickerError> {
    hex_to_rgb(hex).map(rgb_to_hsb)
}

/// HSB → HEX, through RGB.
pub fn hsb_to_hex(hsb: Hsb) -> String {
    rgb_to_hex(hsb_to_rgb(hsb))
}
