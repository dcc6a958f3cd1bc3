//! Chase: theater-marquee bars marching along the strip.

use crate::animation::{Frame, FrameGenerator};
use crate::colors::{wheel, OFF};
use crate::sink::PixelSink;
use crate::types::{AnimationError, Color};

/// Per-pixel color hooks for [`Chase`].
///
/// `bar` numbers the bar/space groups from the start of the strip (a partial
/// leading group is bar 0); `pixel` is the index within the bar or space.
pub trait ChaseColors {
    /// Color of a lit pixel.
    fn bar_color(&self, color: Color, bar: usize, pixel: usize) -> Color {
        let _ = (bar, pixel);
        color
    }

    /// Color of a pixel between bars.
    fn space_color(&self, color: Color, bar: usize, pixel: usize) -> Color {
        let _ = (color, bar, pixel);
        OFF
    }
}

/// Bars in the animation color, spaces off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Marquee;

impl ChaseColors for Marquee {}

/// Each bar takes the next color of the color wheel, `step` positions apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RainbowBars {
    pub step: u8,
}

impl ChaseColors for RainbowBars {
    fn bar_color(&self, _color: Color, bar: usize, _pixel: usize) -> Color {
        wheel((bar as u8).wrapping_mul(self.step))
    }
}

/// `size` lit pixels followed by `spacing` dark pixels, repeated across the
/// strip and shifted one pixel per frame.
///
/// Every frame is the previous one moved by one pixel: at a non-zero offset
/// the strip starts partway through a bar or space. A cycle completes each
/// time the animation's draw count is a multiple of the strip length.
#[derive(Debug, Clone)]
pub struct Chase<P: ChaseColors = Marquee> {
    size: usize,
    spacing: usize,
    offset: usize,
    reverse: bool,
    initial_reverse: bool,
    colors: P,
}

impl Chase<Marquee> {
    /// Creates a single-color chase.
    ///
    /// # Errors
    /// * `InvalidChaseSize` - `size` is zero
    pub fn new(size: usize, spacing: usize, reverse: bool) -> Result<Self, AnimationError> {
        Self::with_colors(size, spacing, reverse, Marquee)
    }
}

impl<P: ChaseColors> Chase<P> {
    /// Creates a chase with custom bar and space colors.
    ///
    /// # Errors
    /// * `InvalidChaseSize` - `size` is zero
    pub fn with_colors(
        size: usize,
        spacing: usize,
        reverse: bool,
        colors: P,
    ) -> Result<Self, AnimationError> {
        if size == 0 {
            return Err(AnimationError::InvalidChaseSize);
        }
        Ok(Self {
            size,
            spacing,
            offset: 0,
            reverse,
            initial_reverse: reverse,
            colors,
        })
    }

    /// Length of one bar plus one space.
    pub fn repeat_width(&self) -> usize {
        self.size + self.spacing
    }

    /// Current shift of the pattern, `0..repeat_width()`.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Moves the pattern to `offset` (taken modulo the repeat width).
    pub fn set_offset(&mut self, offset: usize) {
        self.offset = offset % self.repeat_width();
    }

    /// True while the bars travel toward the start of the strip.
    pub fn reverse(&self) -> bool {
        self.reverse
    }

    /// Changes direction.
    pub fn set_reverse(&mut self, reverse: bool) {
        self.reverse = reverse;
    }

    /// The bar and space color provider.
    pub fn colors(&self) -> &P {
        &self.colors
    }
}

impl<P: ChaseColors> FrameGenerator for Chase<P> {
    const KIND: &'static str = "Chase";

    fn next_frame<S: PixelSink>(&mut self, frame: &mut Frame<'_, S>) {
        let width = self.repeat_width();
        let num_pixels = frame.num_pixels();
        let color = frame.color();

        for index in 0..num_pixels {
            // Position in an unshifted pattern that starts one full group early.
            let shifted = index + width - self.offset;
            let phase = shifted % width;
            let bar = if self.offset == 0 {
                index / width
            } else {
                shifted / width
            };

            let pixel = if phase < self.size {
                self.colors.bar_color(color, bar, phase)
            } else {
                self.colors.space_color(color, bar, phase - self.size)
            };
            frame.sink().set(index, pixel);
        }

        if frame.draw_count() as usize % num_pixels == 0 {
            frame.cycle_complete();
        }

        self.offset = if self.reverse {
            (self.offset + width - 1) % width
        } else {
            (self.offset + 1) % width
        };
    }

    fn reset(&mut self) {
        self.offset = 0;
        self.reverse = self.initial_reverse;
    }
}
