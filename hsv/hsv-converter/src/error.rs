//! Error types for hsv-converter

use core::fmt;

use crate::hsv::MAX_HUE;

/// Error returned by the validating constructors.
///
/// The conversion functions themselves never fail; hue wraps around the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorError {
    /// Hue above [`MAX_HUE`]
    HueOutOfRange(u16),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::HueOutOfRange(hue) => {
                write!(f, "Hue out of range: {hue} (max {MAX_HUE})")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ColorError {}
