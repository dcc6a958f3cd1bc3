//! Pixel sink abstraction.
//!
//! Implement [`PixelSink`] for your strip driver (WS2812 over SPI/PIO, APA102,
//! a framebuffer, a test double). Animations only ever address pixels through
//! this trait and call [`PixelSink::show`] once per frame.

use crate::types::{Color, Rgbw};
use core::cell::RefCell;

/// Trait for abstracting addressable pixel buffers.
pub trait PixelSink {
    /// Number of addressable pixels.
    fn len(&self) -> usize;

    /// Returns true if the sink has no pixels.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads back the pixel at `index`, or `None` when out of range.
    fn get(&self, index: usize) -> Option<Color>;

    /// Writes one pixel. Out-of-range indices are ignored.
    fn set(&mut self, index: usize, color: Color);

    /// Writes `colors` starting at `start`, dropping anything past the end.
    fn write_slice(&mut self, start: usize, colors: &[Color]) {
        let len = self.len();
        if start >= len {
            return;
        }
        let count = colors.len().min(len - start);
        for (offset, color) in colors[..count].iter().enumerate() {
            self.set(start + offset, *color);
        }
    }

    /// Sets every pixel to `color`.
    fn fill(&mut self, color: Color) {
        for index in 0..self.len() {
            self.set(index, color);
        }
    }

    /// Sets every pixel to an RGBW value. Sinks without a white channel drop it.
    fn fill_rgbw(&mut self, pixel: Rgbw) {
        self.fill(pixel.color);
    }

    /// Pushes the buffer out to the hardware. Called once per frame.
    fn show(&mut self);

    /// Whether pixels carry a dedicated white channel.
    fn has_white_channel(&self) -> bool {
        false
    }
}

impl<S: PixelSink + ?Sized> PixelSink for &mut S {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, index: usize) -> Option<Color> {
        (**self).get(index)
    }

    fn set(&mut self, index: usize, color: Color) {
        (**self).set(index, color);
    }

    fn write_slice(&mut self, start: usize, colors: &[Color]) {
        (**self).write_slice(start, colors);
    }

    fn fill(&mut self, color: Color) {
        (**self).fill(color);
    }

    fn fill_rgbw(&mut self, pixel: Rgbw) {
        (**self).fill_rgbw(pixel);
    }

    fn show(&mut self) {
        (**self).show();
    }

    fn has_white_channel(&self) -> bool {
        (**self).has_white_channel()
    }
}

/// A pixel sink shared by several animations, typically peers drawing onto
/// the same strip.
///
/// Each call borrows the underlying sink for its duration only. Overlapping
/// writes are last-writer-wins in peer order.
///
/// # Panics
/// Every method panics if the sink is already borrowed, which only happens
/// if a [`PixelSink`] method re-enters another sink call on the same cell.
#[derive(Debug)]
pub struct SharedSink<'s, S: PixelSink> {
    inner: &'s RefCell<S>,
}

impl<'s, S: PixelSink> SharedSink<'s, S> {
    /// Wraps a shared sink.
    pub fn new(inner: &'s RefCell<S>) -> Self {
        Self { inner }
    }
}

impl<S: PixelSink> Clone for SharedSink<'_, S> {
    fn clone(&self) -> Self {
        Self { inner: self.inner }
    }
}

impl<S: PixelSink> PixelSink for SharedSink<'_, S> {
    fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    fn get(&self, index: usize) -> Option<Color> {
        self.inner.borrow().get(index)
    }

    fn set(&mut self, index: usize, color: Color) {
        self.inner.borrow_mut().set(index, color);
    }

    fn write_slice(&mut self, start: usize, colors: &[Color]) {
        self.inner.borrow_mut().write_slice(start, colors);
    }

    fn fill(&mut self, color: Color) {
        self.inner.borrow_mut().fill(color);
    }

    fn fill_rgbw(&mut self, pixel: Rgbw) {
        self.inner.borrow_mut().fill_rgbw(pixel);
    }

    fn show(&mut self) {
        self.inner.borrow_mut().show();
    }

    fn has_white_channel(&self) -> bool {
        self.inner.borrow().has_white_channel()
    }
}
