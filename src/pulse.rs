//! Pulse: the whole strip breathing in and out in one color.

use crate::animation::{Frame, FrameGenerator};
use crate::sink::PixelSink;
use crate::types::{AnimationError, Rgbw};
use crate::waveform::{TriangleWave, Waveform};

/// Fills the strip with the animation color at an intensity taken from a
/// [`Waveform`]. A cycle completes each time the waveform wraps.
///
/// On sinks with a white channel the configured white level pulses along
/// with the color; the capability is read once when the animation is built.
#[derive(Debug, Clone)]
pub struct Pulse<W: Waveform = TriangleWave> {
    waveform: W,
    white_level: u8,
    white: bool,
}

impl Pulse<TriangleWave> {
    /// Pulses over `period` seconds with a triangle wave.
    ///
    /// # Errors
    /// * `InvalidPeriod` - The period is shorter than 2ns
    pub fn new(period: f32) -> Result<Self, AnimationError> {
        Ok(Self::with_waveform(TriangleWave::from_seconds(period)?))
    }
}

impl<W: Waveform> Pulse<W> {
    /// Pulses using a custom waveform.
    pub fn with_waveform(waveform: W) -> Self {
        Self {
            waveform,
            white_level: 0,
            white: false,
        }
    }

    /// Sets the peak white level used on RGBW sinks.
    pub fn white_level(mut self, level: u8) -> Self {
        self.white_level = level;
        self
    }

    /// Whether frames are written with a white channel.
    pub fn supports_white(&self) -> bool {
        self.white
    }

    /// The underlying waveform.
    pub fn waveform(&self) -> &W {
        &self.waveform
    }
}

impl<W: Waveform> FrameGenerator for Pulse<W> {
    const KIND: &'static str = "Pulse";

    fn setup<S: PixelSink>(&mut self, sink: &S) -> Result<(), AnimationError> {
        self.white = sink.has_white_channel();
        Ok(())
    }

    fn next_frame<S: PixelSink>(&mut self, frame: &mut Frame<'_, S>) {
        let sample = self
            .waveform
            .sample(frame.now_ns(), frame.color(), self.white_level);

        if self.white {
            frame.sink().fill_rgbw(Rgbw::new(sample.color, sample.white));
        } else {
            frame.sink().fill(sample.color);
        }

        if sample.wrapped {
            frame.cycle_complete();
        }
    }

    fn reset(&mut self) {
        self.waveform.restart();
    }
}
