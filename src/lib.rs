//! # hsb-picker
//!
//! The core of an HSB color picker: color-space conversions and the
//! controller behind a saturation/brightness square and a hue strip.
//!
//! The host renders the surfaces and forwards pointer and key events in
//! widget-local pixels; the controller keeps one color, available as RGB,
//! HSB and HEX, and reports every change.
//!
//! ## Usage
//!
//! ```rust
//! use hsb_picker::{ColorValue, PickerConfig, SelectionController, Surface};
//!
//! let mut picker = SelectionController::with_value(
//!     PickerConfig::default().inline(true),
//!     &ColorValue::Hex("#1976D2".into()),
//! )
//! .unwrap();
//! picker.set_on_change(|change| println!("picked #{}", change.hex));
//!
//! picker.pointer_down(Surface::Color, 100.0, 120.0);
//! picker.pointer_move(160.0, 130.0);
//! picker.on_pointer_up();
//! assert_eq!(picker.color().hsb().s, 100.0);
//! ```

mod color;

#[cfg(feature = "floem")]
mod binding;
mod config;
mod constants;
mod controller;
mod error;
mod geometry;
pub mod math;

pub use color::{Color, ColorFormat, ColorValue, Hsb, Rgb};
pub use config::PickerConfig;
pub use controller::{
    ColorChange, DragState, Key, PanelState, PointerCapture, Propagation, SelectionController,
    Surface,
};
pub use error::PickerError;
pub use geometry::{HuePosition, SelectorPosition};
pub use math::{hex_to_hsb, hex_to_rgb, hsb_to_hex, hsb_to_rgb, rgb_to_hex, rgb_to_hsb};

#[cfg(feature = "floem")]
pub use binding::bind_signal;
