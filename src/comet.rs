//! Comet: a bright head with a fading tail sweeping along the strip.

use crate::animation::{Frame, FrameGenerator};
use crate::colors::OFF;
use crate::sink::PixelSink;
use crate::types::{scale, AnimationError, Color};
use heapless::Vec;

/// A comet sweeping from one end of the strip to the other.
///
/// The fade table is `tail_length + 1` entries: a leading `OFF` pixel that
/// erases the trail, then a ramp from 10% to just under full brightness.
/// It is rebuilt only when the animation color changes.
///
/// A pass moves the head from just before the first pixel to just past the
/// last, `num_pixels + tail_length + 1` frames. Pixels outside the strip are
/// never addressed. With `bounce` the direction flips after every pass and a
/// cycle is a round trip; without it every pass is a cycle.
///
/// # Type Parameters
/// * `N` - Fade table capacity, at least `tail_length + 1`
#[derive(Debug, Clone)]
pub struct Comet<const N: usize = 16> {
    tail_length: usize,
    fade: Vec<Color, N>,
    reverse_fade: Vec<Color, N>,
    position: usize,
    passes: u8,
    reverse: bool,
    initial_reverse: bool,
    bounce: bool,
}

impl<const N: usize> Comet<N> {
    /// Creates a comet with a tail of `tail_length` lit pixels.
    ///
    /// # Errors
    /// * `InvalidTailLength` - `tail_length` is zero
    /// * `CapacityExceeded` - `tail_length + 1` exceeds `N`
    pub fn new(tail_length: usize, reverse: bool, bounce: bool) -> Result<Self, AnimationError> {
        if tail_length == 0 {
            return Err(AnimationError::InvalidTailLength);
        }
        if tail_length + 1 > N {
            return Err(AnimationError::CapacityExceeded);
        }

        let mut comet = Self {
            tail_length,
            fade: Vec::new(),
            reverse_fade: Vec::new(),
            position: 0,
            passes: 0,
            reverse,
            initial_reverse: reverse,
            bounce,
        };
        comet.compute_fade(OFF);
        Ok(comet)
    }

    /// Entry `n + 1` is `color * (0.1 + 0.9 * n / tail_length)`, in integer
    /// tenths so the table is exact.
    fn compute_fade(&mut self, color: Color) {
        let tail = self.tail_length as u64;

        self.fade.clear();
        self.reverse_fade.clear();
        // Capacity checked in `new`.
        let _ = self.fade.push(OFF);
        for n in 0..tail {
            let _ = self.fade.push(scale(color, 9 * n + tail, 10 * tail));
        }
        for color in self.fade.iter().rev() {
            let _ = self.reverse_fade.push(*color);
        }
    }

    /// Lit pixels in the tail, excluding the leading blank.
    pub fn tail_length(&self) -> usize {
        self.tail_length
    }

    /// The fade table, blank pixel first.
    pub fn fade_table(&self) -> &[Color] {
        &self.fade
    }

    /// True while the comet travels from the last pixel toward the first.
    pub fn reverse(&self) -> bool {
        self.reverse
    }

    /// Changes direction. Takes effect from the current sweep position.
    pub fn set_reverse(&mut self, reverse: bool) {
        self.reverse = reverse;
    }

    /// Whether the comet bounces at the ends.
    pub fn bounce(&self) -> bool {
        self.bounce
    }

    /// Enables or disables bouncing.
    pub fn set_bounce(&mut self, bounce: bool) {
        self.bounce = bounce;
        self.passes = 0;
    }

    /// Frames drawn so far in the current pass.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<const N: usize> FrameGenerator for Comet<N> {
    const KIND: &'static str = "Comet";

    fn next_frame<S: PixelSink>(&mut self, frame: &mut Frame<'_, S>) {
        let num_pixels = frame.num_pixels() as isize;
        let tail = self.tail_length as isize;
        let table_len = tail + 1;
        let offset = self.position as isize;

        let (start, colors) = if self.reverse {
            (num_pixels - offset, &self.reverse_fade)
        } else {
            (offset - tail, &self.fade)
        };

        if start <= 0 {
            let visible = table_len + start;
            if visible > 0 {
                frame
                    .sink()
                    .write_slice(0, &colors[(table_len - visible) as usize..]);
            }
        } else {
            frame.sink().write_slice(start as usize, colors);
        }

        self.position += 1;
        if self.position as isize > num_pixels + tail {
            self.position = 0;
            self.passes += 1;
            if self.bounce {
                self.reverse = !self.reverse;
            }
            if !self.bounce || self.passes == 2 {
                self.passes = 0;
                frame.cycle_complete();
            }
        }
    }

    fn reset(&mut self) {
        self.position = 0;
        self.passes = 0;
        self.reverse = self.initial_reverse;
    }

    fn on_color_changed(&mut self, color: Color) {
        self.compute_fade(color);
    }
}
