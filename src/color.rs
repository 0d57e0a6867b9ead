//! Color representations and the picker's single color value.
//!
//! [`Color`] stores HSB as the ground truth; RGB and HEX are derived on
//! demand so the three forms can never drift apart.

use serde::{Deserialize, Serialize};

use crate::constants::{HUE_BELOW_MAX, PERCENT_MAX};
use crate::error::PickerError;
use crate::math;

/// RGB channels, each 0–255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create from 0–255 channels.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from normalized channels (0.0–1.0), rounding and clamping.
    pub(crate) fn from_unit(r: f64, g: f64, b: f64) -> Self {
        let to_u8 = |c: f64| (c * 255.0).round().clamp(0.0, 255.0) as u8;
        Self {
            r: to_u8(r),
            g: to_u8(g),
            b: to_u8(b),
        }
    }

    /// Validate loosely typed channels, e.g. from a bound form value.
    ///
    /// Channels must be whole numbers within 0–255; anything else is
    /// rejected rather than rounded.
    pub fn try_from_channels(r: f64, g: f64, b: f64) -> Result<Self, PickerError> {
        let channel = |name: &str, c: f64| {
            if !c.is_finite() || !(0.0..=255.0).contains(&c) {
                return Err(PickerError::invalid_format(format!(
                    "RGB channel {name} must be within 0-255, got {c}"
                )));
            }
            if c.fract() != 0.0 {
                return Err(PickerError::invalid_format(format!(
                    "RGB channel {name} must be a whole number, got {c}"
                )));
            }
            Ok(c as u8)
        };
        Ok(Self {
            r: channel("r", r)?,
            g: channel("g", g)?,
            b: channel("b", b)?,
        })
    }
}

/// Hue in degrees `[0, 360)`, saturation and brightness in percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsb {
    pub h: f64,
    pub s: f64,
    pub b: f64,
}

impl Hsb {
    /// Create from hue in degrees and percentages, unchecked.
    pub fn new(h: f64, s: f64, b: f64) -> Self {
        Self { h, s, b }
    }

    /// Wrap hue and clamp saturation/brightness into range.
    ///
    /// Fails if any component is not a finite number.
    pub fn normalized(self) -> Result<Self, PickerError> {
        if !(self.h.is_finite() && self.s.is_finite() && self.b.is_finite()) {
            return Err(PickerError::invalid_format(format!(
                "HSB components must be finite, got {self:?}"
            )));
        }
        Ok(Self {
            h: math::wrap_hue(self.h),
            s: self.s.clamp(0.0, PERCENT_MAX),
            b: self.b.clamp(0.0, PERCENT_MAX),
        })
    }

    /// Same hue at full saturation and brightness.
    pub fn pure_hue(self) -> Self {
        Self {
            h: self.h,
            s: PERCENT_MAX,
            b: PERCENT_MAX,
        }
    }

    pub(crate) fn is_achromatic(self) -> bool {
        self.s <= 0.0 || self.b <= 0.0
    }
}

/// Representation a bound value is kept in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    #[default]
    Hex,
    Rgb,
    Hsb,
}

/// A color value in whichever representation the host binds.
///
/// Channels are loosely typed so that a value straight from a form or a JSON
/// document can be validated by [`ColorValue::to_color`] rather than by the
/// deserializer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Hex(String),
    Rgb { r: f64, g: f64, b: f64 },
    Hsb { h: f64, s: f64, b: f64 },
}

impl ColorValue {
    /// Parse a bound value from JSON: a string is HEX, `{r,g,b}` is RGB and
    /// `{h,s,b}` is HSB.
    pub fn from_json(json: &str) -> Result<Self, PickerError> {
        serde_json::from_str(json)
            .map_err(|e| PickerError::invalid_format(format!("unrecognized color value: {e}")))
    }

    /// Which representation this value is in.
    pub fn format(&self) -> ColorFormat {
        match self {
            ColorValue::Hex(_) => ColorFormat::Hex,
            ColorValue::Rgb { .. } => ColorFormat::Rgb,
            ColorValue::Hsb { .. } => ColorFormat::Hsb,
        }
    }

    /// Validate and normalize into a [`Color`].
    pub fn to_color(&self) -> Result<Color, PickerError> {
        match self {
            ColorValue::Hex(hex) => Color::from_hex(hex),
            ColorValue::Rgb { r, g, b } => Rgb::try_from_channels(*r, *g, *b).map(Color::from_rgb),
            ColorValue::Hsb { h, s, b } => Color::from_hsb(Hsb::new(*h, *s, *b)),
        }
    }
}

impl From<Rgb> for ColorValue {
    fn from(rgb: Rgb) -> Self {
        ColorValue::Rgb {
            r: rgb.r as f64,
            g: rgb.g as f64,
            b: rgb.b as f64,
        }
    }
}

impl From<Hsb> for ColorValue {
    fn from(hsb: Hsb) -> Self {
        ColorValue::Hsb {
            h: hsb.h,
            s: hsb.s,
            b: hsb.b,
        }
    }
}

/// The picker's color, held as HSB.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    hsb: Hsb,
}

impl Color {
    /// Create from HSB, wrapping hue and clamping saturation/brightness.
    pub fn from_hsb(hsb: Hsb) -> Result<Self, PickerError> {
        Ok(Self {
            hsb: hsb.normalized()?,
        })
    }

    /// Create from 0–255 RGB channels.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            hsb: math::rgb_to_hsb(rgb),
        }
    }

    /// Parse six hex digits, with or without `#`.
    pub fn from_hex(hex: &str) -> Result<Self, PickerError> {
        math::hex_to_hsb(hex).map(|hsb| Self { hsb })
    }

    /// HSB form (hue 0–360, saturation and brightness 0–100).
    pub fn hsb(&self) -> Hsb {
        self.hsb
    }

    /// RGB form, channels rounded to 0–255.
    pub fn rgb(&self) -> Rgb {
        math::hsb_to_rgb(self.hsb)
    }

    /// Six lowercase hex digits, no `#`.
    pub fn hex(&self) -> String {
        math::hsb_to_hex(self.hsb)
    }

    /// Hue in degrees (0–360).
    pub fn hue(&self) -> f64 {
        self.hsb.h
    }

    /// Copy of this color with another hue, pinned inside `[0, 360)`.
    ///
    /// A hue at or past 360 stays just below it rather than wrapping to 0,
    /// so the hue indicator stays at the strip's bottom edge.
    pub(crate) fn with_hue(self, h: f64) -> Self {
        Self {
            hsb: Hsb {
                h: h.clamp(0.0, HUE_BELOW_MAX),
                ..self.hsb
            },
        }
    }

    /// Copy of this color with another saturation and brightness.
    pub(crate) fn with_saturation_brightness(self, s: f64, b: f64) -> Self {
        Self {
            hsb: Hsb {
                h: self.hsb.h,
                s: s.clamp(0.0, PERCENT_MAX),
                b: b.clamp(0.0, PERCENT_MAX),
            },
        }
    }

    /// The bound-value form of this color. HEX carries a leading `#`.
    pub fn to_value(&self, format: ColorFormat) -> ColorValue {
        match format {
            ColorFormat::Hex => ColorValue::Hex(format!("#{}", self.hex())),
            ColorFormat::Rgb => self.rgb().into(),
            ColorFormat::Hsb => self.hsb.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_black() {
        let c = Color::default();
        assert_eq!(c.hex(), "000000");
        assert_eq!(c.rgb(), Rgb::new(0, 0, 0));
        assert_eq!(c.hsb(), Hsb::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_forms_stay_consistent() {
        let c = Color::from_hex("#1976D2").unwrap();
        assert_eq!(c.rgb(), Rgb::new(25, 118, 210));
        assert_eq!(c.hex(), "1976d2");
        assert_eq!(math::hsb_to_rgb(c.hsb()), c.rgb());
    }

    #[test]
    fn test_from_hsb_normalizes() {
        let c = Color::from_hsb(Hsb::new(400.0, 120.0, -5.0)).unwrap();
        assert!((c.hsb().h - 40.0).abs() < 1e-9);
        assert_eq!(c.hsb().s, 100.0);
        assert_eq!(c.hsb().b, 0.0);
    }

    #[test]
    fn test_from_hsb_rejects_nan() {
        assert!(Color::from_hsb(Hsb::new(f64::NAN, 10.0, 10.0)).is_err());
        assert!(Color::from_hsb(Hsb::new(10.0, f64::INFINITY, 10.0)).is_err());
    }

    #[test]
    fn test_rgb_channels_validated() {
        assert_eq!(
            Rgb::try_from_channels(12.0, 255.0, 0.0).unwrap(),
            Rgb::new(12, 255, 0)
        );
        assert!(Rgb::try_from_channels(12.4, 0.0, 0.0).is_err());
        assert!(Rgb::try_from_channels(0.0, 254.6, 0.0).is_err());
        assert!(Rgb::try_from_channels(0.0, 0.0, 255.4).is_err());
        assert!(Rgb::try_from_channels(256.0, 0.0, 0.0).is_err());
        assert!(Rgb::try_from_channels(0.0, -1.0, 0.0).is_err());
        assert!(Rgb::try_from_channels(0.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_value_from_json() {
        assert_eq!(
            ColorValue::from_json(r##""#ff0000""##).unwrap(),
            ColorValue::Hex("#ff0000".to_string())
        );
        assert_eq!(
            ColorValue::from_json(r#"{"r": 1, "g": 2, "b": 3}"#).unwrap().format(),
            ColorFormat::Rgb
        );
        assert_eq!(
            ColorValue::from_json(r#"{"h": 10, "s": 20, "b": 30}"#).unwrap().format(),
            ColorFormat::Hsb
        );
    }

    #[test]
    fn test_value_from_json_rejects_non_numeric_channels() {
        assert!(matches!(
            ColorValue::from_json(r#"{"r": "red", "g": 0, "b": 0}"#),
            Err(PickerError::InvalidFormat { .. })
        ));
        assert!(ColorValue::from_json("42").is_err());
    }

    #[test]
    fn test_to_value_per_format() {
        let c = Color::from_rgb(Rgb::new(125, 255, 0));
        assert_eq!(c.to_value(ColorFormat::Hex), ColorValue::Hex("#7dff00".into()));
        assert_eq!(
            c.to_value(ColorFormat::Rgb),
            ColorValue::Rgb {
                r: 125.0,
                g: 255.0,
                b: 0.0
            }
        );
        assert_eq!(c.to_value(ColorFormat::Hsb).format(), ColorFormat::Hsb);
    }

    #[test]
    fn test_value_round_trips_through_color() {
        let value = ColorValue::Hsb {
            h: 200.0,
            s: 60.0,
            b: 80.0,
        };
        assert_eq!(value.to_color().unwrap().hex(), "52a3cc");
    }

    #[test]
    fn test_format_serde_lowercase() {
        let f: ColorFormat = serde_json::from_str(r#""rgb""#).unwrap();
        assert_eq!(f, ColorFormat::Rgb);
    }
}
