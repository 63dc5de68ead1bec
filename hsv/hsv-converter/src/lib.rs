//! Integer HSV to RGB color conversion.
//!
//! Hue lives on a 1530-step wheel: six sectors of 255 steps, so one sector
//! covers 60 degrees. Saturation and value are full `u8` ranges. Everything is
//! computed with integer arithmetic, which keeps the crate usable on targets
//! without an FPU.
//!
//! ```
//! use hsv_converter::{color_from_hsv, red_from_color};
//!
//! let red = color_from_hsv(0, 255, 255);
//! assert_eq!(red, 0xFF0000);
//! assert_eq!(red_from_color(red), 0xFF);
//! ```

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod hsv;
pub mod rgb;

pub use error::ColorError;
pub use hsv::{
    HUE_STEPS, Hsv, MAX_HUE, MAX_SATURATION, MAX_VALUE, SECTOR_WIDTH, color_from_hsv,
    hue_from_degrees, rgb_from_hsv,
};
pub use rgb::{Rgb, blue_from_color, color_from_rgb, green_from_color, red_from_color};
