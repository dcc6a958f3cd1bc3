//! Shared test infrastructure for led-animation integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use led_animation::{Color, PixelSink, Rgbw, Srgb, TimeSource};

// ============================================================================
// Mock Strip
// ============================================================================

/// Mock pixel strip that snapshots its contents on every `show()`
pub struct MockStrip<const N: usize> {
    pixels: [Color; N],
    white: [u8; N],
    rgbw: bool,
    frames: heapless::Vec<[Color; N], 128>,
}

impl<const N: usize> MockStrip<N> {
    pub fn new() -> Self {
        Self {
            pixels: [OFF; N],
            white: [0; N],
            rgbw: false,
            frames: heapless::Vec::new(),
        }
    }

    pub fn rgbw() -> Self {
        Self {
            rgbw: true,
            ..Self::new()
        }
    }

    pub fn pixels(&self) -> &[Color; N] {
        &self.pixels
    }

    pub fn white(&self) -> &[u8; N] {
        &self.white
    }

    /// Buffer contents at each `show()`, oldest first
    pub fn frames(&self) -> &[[Color; N]] {
        &self.frames
    }

    pub fn last_frame(&self) -> [Color; N] {
        *self.frames.last().expect("no frame shown yet")
    }

    pub fn show_count(&self) -> usize {
        self.frames.len()
    }

    pub fn clear_frames(&mut self) {
        self.frames.clear();
    }
}

impl<const N: usize> PixelSink for MockStrip<N> {
    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<Color> {
        self.pixels.get(index).copied()
    }

    fn set(&mut self, index: usize, color: Color) {
        assert!(index < N, "pixel {} addressed on a {} pixel strip", index, N);
        self.pixels[index] = color;
    }

    fn fill_rgbw(&mut self, pixel: Rgbw) {
        self.fill(pixel.color);
        if self.rgbw {
            self.white = [pixel.white; N];
        }
    }

    fn show(&mut self) {
        // Drop the oldest frames once full so long-running tests keep the tail
        if self.frames.is_full() {
            self.frames.remove(0);
        }
        let _ = self.frames.push(self.pixels);
    }

    fn has_white_channel(&self) -> bool {
        self.rgbw
    }
}

/// Strip with no pixels, for construction error tests
pub struct EmptyStrip;

impl PixelSink for EmptyStrip {
    fn len(&self) -> usize {
        0
    }

    fn get(&self, _index: usize) -> Option<Color> {
        None
    }

    fn set(&mut self, _index: usize, _color: Color) {}

    fn show(&mut self) {}
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement (nanoseconds)
pub struct MockTimeSource {
    current_time: core::cell::Cell<u64>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(0),
        }
    }

    /// Advance time by the given number of nanoseconds
    pub fn advance(&self, nanos: u64) {
        self.current_time.set(self.current_time.get() + nanos);
    }

    pub fn set_time(&self, nanos: u64) {
        self.current_time.set(nanos);
    }
}

impl TimeSource for MockTimeSource {
    fn now_ns(&self) -> u64 {
        self.current_time.get()
    }
}

// ============================================================================
// Colors
// ============================================================================

pub use led_animation::colors::{BLUE, GREEN, OFF, RED};

pub const DIM_RED: Color = Srgb::new(100, 0, 0);

/// Speed used by most tests: one frame per millisecond
pub const FRAME_NS: u64 = 1_000_000;
