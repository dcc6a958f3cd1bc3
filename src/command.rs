//! Command-based control for animations.

use crate::types::Color;

/// Actions for controlling animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationAction {
    /// Freeze the animation.
    Freeze,
    /// Resume a frozen animation.
    Resume,
    /// Rewind to the first frame.
    Reset,
    /// Change the animation color.
    SetColor(Color),
    /// Change the frame interval, in nanoseconds.
    SetSpeedNs(u64),
}

/// Action targeting one animation of an [`AnimationSequence`](crate::AnimationSequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationCommand {
    pub index: usize,
    pub action: AnimationAction,
}

impl AnimationCommand {
    /// Creates command.
    pub fn new(index: usize, action: AnimationAction) -> Self {
        Self { index, action }
    }
}
