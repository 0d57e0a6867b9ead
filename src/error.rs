//! Error type for rejected picker input.

use thiserror::Error;

/// Errors reported by the picker.
///
/// Pointer coordinates are never errors; they are clamped into range.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PickerError {
    /// Malformed HEX string, or an out-of-range / non-numeric channel
    #[error("Invalid format: {message}")]
    InvalidFormat {
        /// Description of what was wrong with the input
        message: String,
    },
}

impl PickerError {
    /// Create an invalid format error with a message.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }
}
