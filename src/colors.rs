//! Color constants and color space helpers.
//!
//! HSV and the classic 0-255 color wheel are the usual ways to spread hues
//! over a strip, so both are provided alongside a handful of named colors.
//! Everything returns the crate's 8-bit [`Color`].

use crate::types::Color;
use palette::{FromColor, Hsv, Srgb};

/// All channels off.
pub const OFF: Color = Srgb::new(0, 0, 0);
pub const WHITE: Color = Srgb::new(255, 255, 255);
pub const RED: Color = Srgb::new(255, 0, 0);
pub const ORANGE: Color = Srgb::new(255, 40, 0);
pub const YELLOW: Color = Srgb::new(255, 150, 0);
pub const GREEN: Color = Srgb::new(0, 255, 0);
pub const CYAN: Color = Srgb::new(0, 255, 255);
pub const BLUE: Color = Srgb::new(0, 0, 255);
pub const PURPLE: Color = Srgb::new(180, 0, 255);
pub const MAGENTA: Color = Srgb::new(255, 0, 20);

/// Default palette for color cycles.
pub const RAINBOW: [Color; 6] = [RED, ORANGE, YELLOW, GREEN, BLUE, PURPLE];

/// Creates a color from HSV components (hue in degrees, saturation and value 0.0-1.0).
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Color {
    let hsv: Hsv = Hsv::new(hue, saturation, value);
    Srgb::<f32>::from_color(hsv).into_format()
}

/// Creates a color from hue only (full saturation and value).
#[inline]
pub fn hue(hue: f32) -> Color {
    hsv(hue, 1.0, 1.0)
}

/// Maps `0..=255` onto a red → green → blue → red color wheel.
pub fn wheel(pos: u8) -> Color {
    match pos {
        0..=84 => Srgb::new(255 - pos * 3, pos * 3, 0),
        85..=169 => {
            let pos = pos - 85;
            Srgb::new(0, 255 - pos * 3, pos * 3)
        }
        _ => {
            let pos = pos - 170;
            Srgb::new(pos * 3, 0, 255 - pos * 3)
        }
    }
}
