#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Animation`**: Drives one frame generator on one pixel sink at a fixed speed
//! - **`Animate`**: Object-safe animation interface used for peers, listeners and sequences
//! - **`FrameGenerator`**: Trait for stateful per-frame renderers
//! - **`ColorCycle`**: Color cycling, with `blink` and `solid` variants
//! - **`Comet`**, **`Pulse`**, **`Chase`**: The built-in moving animations
//! - **`PixelSink`**: Trait to implement for your LED strip
//! - **`TimeSource`**: Trait to implement for your clock
//! - **`AnimationSequence`**: Shows several animations one after another
//! - **`AnimationAction`**: Commands that can be sent to control animations
//!
//! Colors are `Srgb<u8>` from `palette`. Scheduling is done in integer
//! nanoseconds and no animation allocates.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

#[macro_use]
mod log;

pub mod types;
pub mod colors;
pub mod time;
pub mod sink;
pub mod animation;
pub mod color_cycle;
pub mod comet;
pub mod waveform;
pub mod pulse;
pub mod chase;
pub mod sequence;
pub mod command;

pub use animation::{
    Animate, Animation, AnimationBuilder, CycleListener, Frame, FrameGenerator, ListenerId,
    DEFAULT_SPEED_NS,
};
pub use chase::{Chase, ChaseColors, Marquee, RainbowBars};
pub use color_cycle::{ColorCycle, CycleMode};
pub use colors::{OFF, RAINBOW};
pub use comet::Comet;
pub use command::{AnimationAction, AnimationCommand};
pub use pulse::Pulse;
pub use sequence::AnimationSequence;
pub use sink::{PixelSink, SharedSink};
pub use time::{TimeSource, NANOS_PER_SECOND};
#[cfg(feature = "std")]
pub use time::StdClock;
pub use types::{color_from_hex, color_to_hex, AnimationError, Color, Rgbw};
pub use waveform::{TriangleWave, WaveSample, Waveform};
