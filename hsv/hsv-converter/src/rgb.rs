//! RGB triples and packed `0x00RRGGBB` colors.

use core::fmt;

use crate::hsv::Hsv;

const CHANNEL_MASK: u32 = 0xFF;
const RED_SHIFT: u32 = 16;
const GREEN_SHIFT: u32 = 8;

/// RGB 8-bit per channel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Unpack a `0x00RRGGBB` color. The top byte is ignored.
    pub const fn from_color(color: u32) -> Self {
        Self::new(
            red_from_color(color),
            green_from_color(color),
            blue_from_color(color),
        )
    }

    /// Pack into `0x00RRGGBB`
    pub const fn to_color(self) -> u32 {
        color_from_rgb(self.red, self.green, self.blue)
    }
}

impl From<u32> for Rgb {
    fn from(color: u32) -> Self {
        Rgb::from_color(color)
    }
}

impl From<Rgb> for u32 {
    fn from(rgb: Rgb) -> Self {
        rgb.to_color()
    }
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        hsv.to_rgb()
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Rgb::new(red, green, blue)
    }
}

/// Byte order used by LED output buffers
impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        [rgb.red, rgb.green, rgb.blue]
    }
}

/// Formats as `#RRGGBB`
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

/// Concatenate RGB channels into `0x00RRGGBB` (the "hex" of a color).
pub const fn color_from_rgb(red: u8, green: u8, blue: u8) -> u32 {
    ((red as u32) << RED_SHIFT) | ((green as u32) << GREEN_SHIFT) | blue as u32
}

pub const fn red_from_color(color: u32) -> u8 {
    ((color >> RED_SHIFT) & CHANNEL_MASK) as u8
}

pub const fn green_from_color(color: u32) -> u8 {
    ((color >> GREEN_SHIFT) & CHANNEL_MASK) as u8
}

pub const fn blue_from_color(color: u32) -> u8 {
    (color & CHANNEL_MASK) as u8
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_color_from_rgb() {
        assert_eq!(color_from_rgb(0x12, 0x34, 0x56), 0x123456);
        assert_eq!(color_from_rgb(0, 0, 0), 0);
        assert_eq!(color_from_rgb(255, 255, 255), 0x00FF_FFFF);
    }

    #[test]
    fn test_channel_extraction() {
        assert_eq!(red_from_color(0x123456), 0x12);
        assert_eq!(green_from_color(0x123456), 0x34);
        assert_eq!(blue_from_color(0x123456), 0x56);
    }

    #[test]
    fn test_extraction_ignores_top_byte() {
        let color = 0xAB12_3456;
        assert_eq!(red_from_color(color), 0x12);
        assert_eq!(green_from_color(color), 0x34);
        assert_eq!(blue_from_color(color), 0x56);
        assert_eq!(Rgb::from_color(color).to_color(), 0x123456);
    }

    #[test]
    fn test_channel_round_trip() {
        for channel in 0..=255u8 {
            let packed = color_from_rgb(channel, 255 - channel, channel / 2);
            assert_eq!(red_from_color(packed), channel);
            assert_eq!(green_from_color(packed), 255 - channel);
            assert_eq!(blue_from_color(packed), channel / 2);
        }
    }

    #[test]
    fn test_conversions() {
        let rgb = Rgb::from((1, 2, 3));
        assert_eq!(rgb, Rgb::new(1, 2, 3));
        assert_eq!(u32::from(rgb), 0x010203);
        assert_eq!(Rgb::from(0x010203), rgb);
        assert_eq!(<[u8; 3]>::from(rgb), [1, 2, 3]);
        assert_eq!(Rgb::from(Hsv::new(1020, 255, 255)), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgb::new(0x12, 0xAB, 0x05).to_string(), "#12AB05");
        assert_eq!(Rgb::default().to_string(), "#000000");
    }
}
