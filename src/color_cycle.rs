//! Color cycling, blink and solid fill.
//!
//! All three are one generator: a fixed list of colors shown one per frame.
//! Blink and solid differ only in how the list follows the animation color,
//! captured by [`CycleMode`].

use crate::animation::{Frame, FrameGenerator};
use crate::colors::{OFF, RAINBOW};
use crate::sink::PixelSink;
use crate::time::NANOS_PER_SECOND;
use crate::types::{AnimationError, Color};
use heapless::Vec;

/// How the color list reacts to animation color changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleMode {
    /// Fixed list given at construction. Color changes are ignored.
    Custom,

    /// List is `[color, OFF]`.
    Blink,

    /// List is `[color]`.
    Solid,
}

/// Fills the whole strip with each color of a list in turn.
///
/// One cycle is one pass through the list.
///
/// The list is drawn on its own: the animation color is not updated to the
/// color on the strip. With a custom list, `Animation::color()` keeps the
/// starting color (the first entry unless the builder set one); use
/// [`ColorCycle::current_color`] for the color of the last frame.
///
/// # Type Parameters
/// * `N` - Maximum number of colors (at least 2 for blink)
#[derive(Debug, Clone)]
pub struct ColorCycle<const N: usize = 8> {
    colors: Vec<Color, N>,
    index: usize,
    mode: CycleMode,
}

impl<const N: usize> ColorCycle<N> {
    /// Cycles through `colors` in order.
    ///
    /// # Errors
    /// * `EmptyColorList` - `colors` is empty
    /// * `CapacityExceeded` - More than `N` colors
    pub fn new(colors: &[Color]) -> Result<Self, AnimationError> {
        if colors.is_empty() {
            return Err(AnimationError::EmptyColorList);
        }

        let colors = Vec::from_slice(colors).map_err(|_| AnimationError::CapacityExceeded)?;
        Ok(Self {
            colors,
            index: 0,
            mode: CycleMode::Custom,
        })
    }

    /// Cycles through [`RAINBOW`].
    pub fn rainbow() -> Result<Self, AnimationError> {
        Self::new(&RAINBOW)
    }

    /// Blinks `color` on and off.
    pub fn blink(color: Color) -> Result<Self, AnimationError> {
        let mut cycle = Self::new(&[color, OFF])?;
        cycle.mode = CycleMode::Blink;
        Ok(cycle)
    }

    /// Holds `color`.
    pub fn solid(color: Color) -> Result<Self, AnimationError> {
        let mut cycle = Self::new(&[color])?;
        cycle.mode = CycleMode::Solid;
        Ok(cycle)
    }

    /// The colors being cycled through.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Color shown by the most recent frame. Before the first frame and
    /// after a reset this is the last entry of the list.
    pub fn current_color(&self) -> Color {
        let len = self.colors.len();
        self.colors[(self.index + len - 1) % len]
    }

    /// Index of the color the next frame shows.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Current mode.
    pub fn mode(&self) -> CycleMode {
        self.mode
    }
}

impl<const N: usize> FrameGenerator for ColorCycle<N> {
    const KIND: &'static str = "ColorCycle";

    fn default_color(&self) -> Color {
        self.colors[0]
    }

    fn default_speed_ns(&self) -> u64 {
        match self.mode {
            CycleMode::Solid => NANOS_PER_SECOND,
            _ => crate::animation::DEFAULT_SPEED_NS,
        }
    }

    fn next_frame<S: PixelSink>(&mut self, frame: &mut Frame<'_, S>) {
        let color = self.colors[self.index];
        frame.sink().fill(color);

        self.index = (self.index + 1) % self.colors.len();
        if self.index == 0 {
            frame.cycle_complete();
        }
    }

    fn reset(&mut self) {
        self.index = 0;
    }

    fn on_color_changed(&mut self, color: Color) {
        let list = match self.mode {
            CycleMode::Custom => return,
            CycleMode::Blink => [color, OFF],
            CycleMode::Solid => [color, color],
        };
        let len = self.colors.len();
        self.colors.clear();
        // Same length as the list the constructor already fit.
        let _ = self.colors.extend_from_slice(&list[..len]);
        self.index %= len;
    }
}
