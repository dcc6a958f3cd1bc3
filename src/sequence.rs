//! Playlists of animations shown one after another.

use crate::animation::Animate;
use crate::colors::OFF;
use crate::command::AnimationCommand;
use crate::time::{seconds_to_nanos, TimeSource};
use crate::types::AnimationError;
use heapless::Vec;

/// Shows one animation at a time from an ordered list.
///
/// The current animation is animated on every [`animate`](Self::animate)
/// call. The sequence moves to the next one after a fixed interval, when the
/// current animation completes a cycle, or when told to via
/// [`next`](Self::next), [`previous`](Self::previous) or
/// [`activate`](Self::activate). After the last animation it wraps to the
/// first.
///
/// Animations are borrowed and may be of different concrete types.
///
/// # Type Parameters
/// * `'a` - Lifetime of the clock and animation references
/// * `T` - Time source type
/// * `N` - Maximum number of animations
pub struct AnimationSequence<'a, T: TimeSource, const N: usize = 8> {
    animations: Vec<&'a mut dyn Animate, N>,
    time_source: &'a T,
    current: usize,
    advance_interval_ns: Option<u64>,
    advance_on_cycle_complete: bool,
    auto_clear: bool,
    auto_reset: bool,
    next_advance_ns: u64,
    advance_left_at_pause_ns: u64,
    cycles_at_activation: u32,
    paused: bool,
}

impl<'a, T: TimeSource, const N: usize> AnimationSequence<'a, T, N> {
    /// Creates a sequence starting at the first animation.
    ///
    /// # Errors
    /// * `SequenceEmpty` - No animations were given
    /// * `CapacityExceeded` - More than `N` animations
    pub fn new<I>(time_source: &'a T, animations: I) -> Result<Self, AnimationError>
    where
        I: IntoIterator<Item = &'a mut dyn Animate>,
    {
        let mut list = Vec::new();
        for animation in animations {
            list.push(animation)
                .map_err(|_| AnimationError::CapacityExceeded)?;
        }

        if list.is_empty() {
            return Err(AnimationError::SequenceEmpty);
        }

        let cycles_at_activation = list[0].cycle_count();
        Ok(Self {
            animations: list,
            time_source,
            current: 0,
            advance_interval_ns: None,
            advance_on_cycle_complete: false,
            auto_clear: false,
            auto_reset: false,
            next_advance_ns: 0,
            advance_left_at_pause_ns: 0,
            cycles_at_activation,
            paused: false,
        })
    }

    /// Advances to the next animation every `seconds`.
    pub fn advance_interval(self, seconds: f32) -> Self {
        self.advance_interval_ns(seconds_to_nanos(seconds))
    }

    /// Advances to the next animation every `interval_ns` nanoseconds.
    pub fn advance_interval_ns(mut self, interval_ns: u64) -> Self {
        self.advance_interval_ns = Some(interval_ns);
        self.next_advance_ns = self.time_source.now_ns().saturating_add(interval_ns);
        self
    }

    /// Advances when the current animation completes a cycle.
    pub fn advance_on_cycle_complete(mut self, enabled: bool) -> Self {
        self.advance_on_cycle_complete = enabled;
        self
    }

    /// Blanks the strip before switching animations.
    pub fn auto_clear(mut self, enabled: bool) -> Self {
        self.auto_clear = enabled;
        self
    }

    /// Resets each animation as it becomes current.
    pub fn auto_reset(mut self, enabled: bool) -> Self {
        self.auto_reset = enabled;
        self
    }

    /// Animates the current animation, advancing first if the interval has
    /// elapsed and afterwards if it completed a cycle.
    ///
    /// # Returns
    /// True if the current animation drew a frame.
    pub fn animate(&mut self) -> bool {
        if self.paused {
            return false;
        }

        if self.advance_interval_ns.is_some() && self.time_source.now_ns() >= self.next_advance_ns {
            self.next();
        }

        let drew = self.animations[self.current].animate();

        if self.advance_on_cycle_complete
            && self.animations[self.current].cycle_count() != self.cycles_at_activation
        {
            self.next();
        }

        drew
    }

    /// Switches to the animation at `index`.
    ///
    /// # Errors
    /// * `InvalidIndex` - No animation at `index`
    pub fn activate(&mut self, index: usize) -> Result<(), AnimationError> {
        if index >= self.animations.len() {
            return Err(AnimationError::InvalidIndex(index));
        }

        if self.auto_clear {
            self.animations[self.current].fill(OFF);
        }

        self.current = index;
        let animation = &mut self.animations[index];
        if self.auto_reset {
            animation.reset();
        }
        self.cycles_at_activation = animation.cycle_count();

        if let Some(interval) = self.advance_interval_ns {
            self.next_advance_ns = self.time_source.now_ns().saturating_add(interval);
            self.advance_left_at_pause_ns = interval;
        }

        debug!("sequence: activated {=usize}", index);
        Ok(())
    }

    /// Switches to the next animation, wrapping to the first.
    pub fn next(&mut self) {
        let index = (self.current + 1) % self.animations.len();
        // Index is in range by construction.
        let _ = self.activate(index);
    }

    /// Switches to the previous animation, wrapping to the last.
    pub fn previous(&mut self) {
        let len = self.animations.len();
        let index = (self.current + len - 1) % len;
        let _ = self.activate(index);
    }

    /// Freezes the current animation and stops advancing.
    ///
    /// Time spent frozen does not count toward the advance interval.
    pub fn freeze(&mut self) {
        let now = self.time_source.now_ns();
        self.paused = true;
        self.advance_left_at_pause_ns = self.next_advance_ns.saturating_sub(now);
        self.animations[self.current].freeze();
    }

    /// Resumes the current animation and the advance countdown.
    pub fn resume(&mut self) {
        let now = self.time_source.now_ns();
        if self.paused && self.advance_interval_ns.is_some() {
            self.next_advance_ns = now.saturating_add(self.advance_left_at_pause_ns);
        }
        self.advance_left_at_pause_ns = 0;
        self.paused = false;
        self.animations[self.current].resume();
    }

    /// Resets the current animation.
    pub fn reset(&mut self) {
        self.animations[self.current].reset();
    }

    /// Routes an action to the animation at the command's index.
    ///
    /// # Errors
    /// * `InvalidIndex` - No animation at that index
    pub fn handle_command(&mut self, command: AnimationCommand) -> Result<(), AnimationError> {
        let animation = self
            .animations
            .get_mut(command.index)
            .ok_or(AnimationError::InvalidIndex(command.index))?;
        animation.handle_action(command.action);
        Ok(())
    }

    /// The animation currently shown.
    pub fn current(&self) -> &dyn Animate {
        &*self.animations[self.current]
    }

    /// Index of the animation currently shown.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Returns true while frozen.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Number of animations in the sequence.
    pub fn len(&self) -> usize {
        self.animations.len()
    }

    /// Always false; a sequence holds at least one animation.
    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}
