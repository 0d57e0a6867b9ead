//! Host-supplied picker configuration.

use serde::{Deserialize, Serialize};

use crate::color::ColorFormat;
use crate::constants;
use crate::error::PickerError;

/// Sizes and modes the host renders the picker with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Width of the saturation/brightness square, in pixels
    pub surface_width: f64,
    /// Height of the saturation/brightness square, in pixels
    pub surface_height: f64,
    /// Height of the hue strip, in pixels
    pub hue_height: f64,
    /// Panel is always shown; there is no overlay to open or close
    pub inline: bool,
    /// Ignore all user interaction
    pub disabled: bool,
    /// Representation of the bound value in change notifications
    pub format: ColorFormat,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            surface_width: constants::SURFACE_SIZE,
            surface_height: constants::SURFACE_SIZE,
            hue_height: constants::HUE_HEIGHT,
            inline: false,
            disabled: false,
            format: ColorFormat::Hex,
        }
    }
}

impl PickerConfig {
    /// Parse from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, PickerError> {
        serde_json::from_str(json)
            .map_err(|e| PickerError::invalid_format(format!("bad picker config: {e}")))
    }

    /// Show the panel permanently instead of as an overlay.
    pub fn inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    /// Ignore pointer and keyboard input.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Representation used for the bound value.
    pub fn format(mut self, format: ColorFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the square's size and the strip's height.
    pub fn size(mut self, surface_width: f64, surface_height: f64, hue_height: f64) -> Self {
        self.surface_width = surface_width;
        self.surface_height = surface_height;
        self.hue_height = hue_height;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = PickerConfig::default();
        assert_eq!(cfg.surface_width, 150.0);
        assert_eq!(cfg.surface_height, 150.0);
        assert_eq!(cfg.hue_height, 150.0);
        assert!(!cfg.inline);
        assert!(!cfg.disabled);
        assert_eq!(cfg.format, ColorFormat::Hex);
    }

    #[test]
    fn test_partial_json() {
        let cfg = PickerConfig::from_json(r#"{"inline": true, "format": "hsb"}"#).unwrap();
        assert!(cfg.inline);
        assert_eq!(cfg.format, ColorFormat::Hsb);
        assert_eq!(cfg.surface_width, 150.0);
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            PickerConfig::from_json(r#"{"format": "cmyk"}"#),
            Err(PickerError::InvalidFormat { .. })
        ));
    }
}
