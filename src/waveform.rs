//! Periodic brightness waveforms consumed by [`Pulse`](crate::Pulse).

use crate::time::seconds_to_nanos;
use crate::types::{scale, AnimationError, Color};

/// One waveform sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveSample {
    /// The base color at the current intensity.
    pub color: Color,

    /// The white level at the current intensity.
    pub white: u8,

    /// True if the waveform started a new period since the previous sample.
    pub wrapped: bool,
}

/// A restartable periodic intensity generator.
pub trait Waveform {
    /// Advances to `now_ns` and returns `color` and `white` at the current
    /// intensity.
    fn sample(&mut self, now_ns: u64, color: Color, white: u8) -> WaveSample;

    /// Starts over from zero intensity at the next sample.
    fn restart(&mut self);
}

/// Linear ramp from off to full over half a period and back down.
///
/// Only elapsed time between samples is accumulated, so the waveform keeps
/// its phase across gaps in sampling (e.g. while the animation is frozen it
/// jumps ahead by the frozen time once sampled again).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriangleWave {
    period_ns: u64,
    position_ns: u64,
    last_sample_ns: Option<u64>,
}

impl TriangleWave {
    /// Creates a triangle wave with the given period.
    ///
    /// # Errors
    /// * `InvalidPeriod` - `period_ns` is below 2
    pub fn new(period_ns: u64) -> Result<Self, AnimationError> {
        if period_ns < 2 {
            return Err(AnimationError::InvalidPeriod);
        }
        Ok(Self {
            period_ns,
            position_ns: 0,
            last_sample_ns: None,
        })
    }

    /// Creates a triangle wave with a period in fractional seconds.
    pub fn from_seconds(period: f32) -> Result<Self, AnimationError> {
        Self::new(seconds_to_nanos(period))
    }

    /// Period in nanoseconds.
    pub fn period_ns(&self) -> u64 {
        self.period_ns
    }

    /// Position within the current period.
    pub fn position_ns(&self) -> u64 {
        self.position_ns
    }
}

impl Waveform for TriangleWave {
    fn sample(&mut self, now_ns: u64, color: Color, white: u8) -> WaveSample {
        let elapsed = match self.last_sample_ns {
            Some(last) => now_ns.saturating_sub(last),
            None => 0,
        };
        self.last_sample_ns = Some(now_ns);

        let previous = self.position_ns;
        let advanced = previous as u128 + (elapsed % self.period_ns) as u128;
        self.position_ns = (advanced % self.period_ns as u128) as u64;

        let half = self.period_ns / 2;
        let level = if self.position_ns > half {
            self.period_ns - self.position_ns
        } else {
            self.position_ns
        };

        let white = (white as u128 * level as u128 / half as u128).min(255) as u8;
        WaveSample {
            color: scale(color, level, half),
            white,
            wrapped: self.position_ns < previous,
        }
    }

    fn restart(&mut self) {
        self.position_ns = 0;
        self.last_sample_ns = None;
    }
}
