//! Time abstraction for platform-agnostic scheduling.
//!
//! Animations schedule frames in integer nanoseconds. Speeds are accepted as
//! fractional seconds at the API boundary and converted once.

/// Nanoseconds in one second.
pub const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Trait for abstracting monotonic time sources.
pub trait TimeSource {
    /// Returns the current time in nanoseconds. Must never decrease.
    fn now_ns(&self) -> u64;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now_ns(&self) -> u64 {
        (**self).now_ns()
    }
}

/// Converts fractional seconds to nanoseconds. Negative and NaN inputs give zero.
#[inline]
pub fn seconds_to_nanos(seconds: f32) -> u64 {
    (seconds as f64 * NANOS_PER_SECOND as f64) as u64
}

/// Converts nanoseconds to fractional seconds.
#[inline]
pub fn nanos_to_seconds(nanos: u64) -> f32 {
    (nanos as f64 / NANOS_PER_SECOND as f64) as f32
}

/// Monotonic clock backed by [`std::time::Instant`], counting from creation.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    /// Creates a clock whose zero is now.
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl TimeSource for StdClock {
    fn now_ns(&self) -> u64 {
        let elapsed = self.origin.elapsed();
        elapsed.as_secs() * NANOS_PER_SECOND + elapsed.subsec_nanos() as u64
    }
}
