//! HSV to RGB conversion.
//!
//! The hue wheel is split into six sectors of [`SECTOR_WIDTH`] steps. In each
//! sector one channel is pinned at `value`, one sits on the desaturated floor
//! and the third ramps between the two:
//!
//! | sector | red  | green | blue |
//! |--------|------|-------|------|
//! | 0      | max  | rise  | min  |
//! | 1      | fall | max   | min  |
//! | 2      | min  | max   | rise |
//! | 3      | min  | fall  | max  |
//! | 4      | rise | min   | max  |
//! | 5      | max  | min   | fall |

use crate::error::ColorError;
use crate::rgb::{Rgb, color_from_rgb};

/// Hue steps per 60 degree sector
pub const SECTOR_WIDTH: u16 = 255;

/// Hue steps in a full turn of the wheel
pub const HUE_STEPS: u16 = 6 * SECTOR_WIDTH;

/// Largest hue that is not wrapped (359.76 degrees)
pub const MAX_HUE: u16 = HUE_STEPS - 1;

pub const MAX_SATURATION: u8 = u8::MAX;

pub const MAX_VALUE: u8 = u8::MAX;

const DEGREES_PER_TURN: u16 = 360;

/// Color in HSV form
///
/// The hue is stored as given. It is reduced onto the wheel when the color is
/// converted, see [`Hsv::wrapped`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Hsv {
    /// Hue in [0, 1529], larger values wrap
    pub hue: u16,
    /// 0 is gray, 255 is fully saturated
    pub saturation: u8,
    /// 0 is black, 255 is full brightness
    pub value: u8,
}

impl Hsv {
    pub const fn new(hue: u16, saturation: u8, value: u8) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Create a color, rejecting hues past [`MAX_HUE`] instead of wrapping them
    pub fn try_new(hue: u16, saturation: u8, value: u8) -> Result<Self, ColorError> {
        if hue > MAX_HUE {
            return Err(ColorError::HueOutOfRange(hue));
        }
        Ok(Self::new(hue, saturation, value))
    }

    /// Create a color from a hue in conventional degrees
    pub fn from_degrees(degrees: u16, saturation: u8, value: u8) -> Self {
        Self::new(hue_from_degrees(degrees), saturation, value)
    }

    /// Same color with the hue reduced into [0, MAX_HUE]
    pub const fn wrapped(self) -> Self {
        Self::new(self.hue % HUE_STEPS, self.saturation, self.value)
    }

    pub fn to_rgb(self) -> Rgb {
        rgb_from_hsv(self.hue, self.saturation, self.value)
    }

    /// Packed `0x00RRGGBB` form
    pub fn to_color(self) -> u32 {
        self.to_rgb().to_color()
    }
}

/// Map a hue in degrees onto the 1530-step wheel.
///
/// Degrees wrap at 360. Sector boundaries land exactly: 60 degrees is 255,
/// 120 is 510 and so on.
pub fn hue_from_degrees(degrees: u16) -> u16 {
    let degrees = u32::from(degrees % DEGREES_PER_TURN);
    (degrees * u32::from(HUE_STEPS) / u32::from(DEGREES_PER_TURN)) as u16
}

/// Convert HSV to RGB.
///
/// # Arguments
/// * `hue` - Hue on the 1530-step wheel, wrapped modulo 1530
/// * `saturation` - Saturation, 0 gives gray
/// * `value` - Brightness, 0 gives black
pub fn rgb_from_hsv(hue: u16, saturation: u8, value: u8) -> Rgb {
    if hue > MAX_HUE {
        log::trace!("Wrapping hue {hue} onto the {HUE_STEPS}-step wheel");
    }
    let hue = hue % HUE_STEPS;

    let sector = hue / SECTOR_WIDTH;
    let offset = hue % SECTOR_WIDTH;

    let floor = scale(u16::from(MAX_SATURATION - saturation), value);
    let rise = scale(blend(offset, saturation), value);
    let fall = scale(blend(SECTOR_WIDTH - offset, saturation), value);

    let (red, green, blue) = match sector {
        0 => (value, rise, floor),
        1 => (fall, value, floor),
        2 => (floor, value, rise),
        3 => (floor, fall, value),
        4 => (rise, floor, value),
        _ => (value, floor, fall),
    };
    Rgb::new(red, green, blue)
}

/// Convert HSV to a packed `0x00RRGGBB` color.
pub fn color_from_hsv(hue: u16, saturation: u8, value: u8) -> u32 {
    let rgb = rgb_from_hsv(hue, saturation, value);
    color_from_rgb(rgb.red, rgb.green, rgb.blue)
}

/// Pull a ramp position in [0, 255] toward full intensity as saturation drops.
///
/// At full saturation this is the ramp itself, at zero saturation it is 255.
#[inline(always)]
fn blend(ramp: u16, saturation: u8) -> u16 {
    let desaturation = u16::from(MAX_SATURATION - saturation);
    ramp + desaturation * (SECTOR_WIDTH - ramp) / SECTOR_WIDTH
}

/// Apply brightness to an intensity in [0, 255]. Products stay below 2^16.
#[inline(always)]
fn scale(intensity: u16, value: u8) -> u8 {
    (intensity * u16::from(value) / u16::from(MAX_VALUE)) as u8
}
