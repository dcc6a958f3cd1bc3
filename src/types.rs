//! Core value types shared by every animation.

use palette::Srgb;

/// An 8-bit sRGB color, one byte per channel.
pub type Color = Srgb<u8>;

/// An RGB color plus a separate white channel, for RGBW strips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgbw {
    /// The RGB part.
    pub color: Color,

    /// The dedicated white channel.
    pub white: u8,
}

impl Rgbw {
    /// Creates a new RGBW value.
    #[inline]
    pub const fn new(color: Color, white: u8) -> Self {
        Self { color, white }
    }
}

impl From<Color> for Rgbw {
    fn from(color: Color) -> Self {
        Self { color, white: 0 }
    }
}

/// Unpacks a `0xRRGGBB` integer into a color. Bits above 24 are ignored.
#[inline]
pub const fn color_from_hex(hex: u32) -> Color {
    Srgb::new(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
    )
}

/// Packs a color into a `0xRRGGBB` integer.
#[inline]
pub const fn color_to_hex(color: Color) -> u32 {
    ((color.red as u32) << 16) | ((color.green as u32) << 8) | color.blue as u32
}

/// Scales every channel by `numerator / denominator`, truncating toward zero.
///
/// Ratios above one saturate at 255.
pub(crate) fn scale(color: Color, numerator: u64, denominator: u64) -> Color {
    let channel = |c: u8| (c as u128 * numerator as u128 / denominator as u128).min(255) as u8;
    Srgb::new(channel(color.red), channel(color.green), channel(color.blue))
}

/// Animation construction and configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationError {
    /// The pixel sink reports zero pixels.
    EmptyPixelSink,

    /// A color cycle was given no colors.
    EmptyColorList,

    /// A fixed-capacity buffer (colors, fade table, peers, listeners) is full.
    CapacityExceeded,

    /// Comet tail length must be at least one pixel.
    InvalidTailLength,

    /// Chase bars must be at least one pixel wide.
    InvalidChaseSize,

    /// Waveform period too short to produce a ramp.
    InvalidPeriod,

    /// Cycle notification divisor must be non-zero.
    InvalidNotifyCycles,

    /// An animation sequence was given no animations.
    SequenceEmpty,

    /// Index does not address an animation in the sequence.
    InvalidIndex(usize),
}

impl core::fmt::Display for AnimationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AnimationError::EmptyPixelSink => {
                write!(f, "pixel sink must contain at least one pixel")
            }
            AnimationError::EmptyColorList => {
                write!(f, "color cycle must have at least one color")
            }
            AnimationError::CapacityExceeded => {
                write!(f, "animation capacity exceeded")
            }
            AnimationError::InvalidTailLength => {
                write!(f, "comet tail length must be at least 1")
            }
            AnimationError::InvalidChaseSize => {
                write!(f, "chase size must be at least 1")
            }
            AnimationError::InvalidPeriod => {
                write!(f, "waveform period must be at least 2ns")
            }
            AnimationError::InvalidNotifyCycles => {
                write!(f, "notify cycles must be at least 1")
            }
            AnimationError::SequenceEmpty => {
                write!(f, "animation sequence must have at least one animation")
            }
            AnimationError::InvalidIndex(index) => {
                write!(f, "no animation at index {}", index)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AnimationError {}
