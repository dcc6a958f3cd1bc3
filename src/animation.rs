//! The animation core: timing gate, pause/resume, color propagation,
//! cycle-complete notification and peer fan-out.
//!
//! Provides [`Animation`], which pairs a [`PixelSink`] with a
//! [`FrameGenerator`] and decides when the generator gets to draw. Also
//! defines the object-safe [`Animate`] trait through which peers, listeners
//! and sequences refer to animations of any concrete type.

use crate::colors::OFF;
use crate::command::AnimationAction;
use crate::sink::PixelSink;
use crate::time::{nanos_to_seconds, seconds_to_nanos, TimeSource};
use crate::types::{color_from_hex, AnimationError, Color};
use heapless::Vec;

/// Frame interval used when the builder is not given a speed.
pub const DEFAULT_SPEED_NS: u64 = 100_000_000;

/// Object-safe view of a running animation.
///
/// [`Animation`] implements this for every sink, clock and generator type, so
/// animations of different kinds can be linked as peers, handed to cycle
/// listeners, or collected into an [`AnimationSequence`](crate::AnimationSequence).
pub trait Animate {
    /// Draws a frame if the animation is due. Returns true if it drew.
    fn animate(&mut self) -> bool;

    /// Draws one frame unconditionally and flushes the sink.
    fn draw(&mut self);

    /// Pauses the animation, remembering the time left until the next frame.
    fn freeze(&mut self);

    /// Resumes a frozen animation.
    fn resume(&mut self);

    /// Rewinds the generator to its first frame.
    fn reset(&mut self);

    /// Fills the whole sink with `color` without touching animation state.
    fn fill(&mut self, color: Color);

    /// Current animation color.
    fn color(&self) -> Color;

    /// Changes the animation color. Setting the current color does nothing.
    fn set_color(&mut self, color: Color);

    /// Frame interval in nanoseconds.
    fn speed_ns(&self) -> u64;

    /// Sets the frame interval in nanoseconds.
    fn set_speed_ns(&mut self, speed_ns: u64);

    /// Returns true while frozen.
    fn is_paused(&self) -> bool;

    /// Completed animation cycles.
    fn cycle_count(&self) -> u32;

    /// Frames drawn through [`Animate::animate`].
    fn draw_count(&self) -> u32;

    /// Whether the generator ever reports completed cycles.
    fn cycle_complete_supported(&self) -> bool;

    /// Short name of the animation kind, e.g. `"Comet"`.
    fn kind(&self) -> &'static str;

    /// Optional user-supplied label.
    fn name(&self) -> Option<&'static str>;

    /// Applies a control action.
    fn handle_action(&mut self, action: AnimationAction) {
        match action {
            AnimationAction::Freeze => self.freeze(),
            AnimationAction::Resume => self.resume(),
            AnimationAction::Reset => self.reset(),
            AnimationAction::SetColor(color) => self.set_color(color),
            AnimationAction::SetSpeedNs(speed_ns) => self.set_speed_ns(speed_ns),
        }
    }
}

/// Receiver for cycle-complete notifications.
///
/// Implemented for every `Fn(&dyn Animate)`, so closures can be registered
/// directly. Listeners run synchronously inside [`Animate::animate`]; a
/// listener that drives the same animation again recurses without limit.
pub trait CycleListener {
    /// Called with the animation that just completed a notified cycle.
    fn on_cycle_complete(&self, animation: &dyn Animate);
}

impl<F> CycleListener for F
where
    F: Fn(&dyn Animate),
{
    fn on_cycle_complete(&self, animation: &dyn Animate) {
        self(animation)
    }
}

/// Stable handle for a registered cycle listener (its registration index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ListenerId(pub usize);

/// Per-frame context handed to a [`FrameGenerator`].
pub struct Frame<'f, S: PixelSink> {
    sink: &'f mut S,
    color: Color,
    draw_count: u32,
    now_ns: u64,
    completed_cycles: u32,
}

impl<'f, S: PixelSink> Frame<'f, S> {
    /// The sink to draw into. Flushing is done by the caller after the frame.
    #[inline]
    pub fn sink(&mut self) -> &mut S {
        &mut *self.sink
    }

    /// Number of pixels in the sink.
    #[inline]
    pub fn num_pixels(&self) -> usize {
        self.sink.len()
    }

    /// The animation color.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Frames drawn by the owning animation before this one.
    #[inline]
    pub fn draw_count(&self) -> u32 {
        self.draw_count
    }

    /// Time at which the frame is drawn.
    #[inline]
    pub fn now_ns(&self) -> u64 {
        self.now_ns
    }

    /// Reports that this frame completes a cycle.
    #[inline]
    pub fn cycle_complete(&mut self) {
        self.completed_cycles += 1;
    }
}

/// A stateful per-frame sequence producer.
///
/// Each implementation owns its own cursor and renders exactly one frame per
/// [`next_frame`](FrameGenerator::next_frame) call.
pub trait FrameGenerator {
    /// Short name of the animation kind.
    const KIND: &'static str;

    /// Whether [`Frame::cycle_complete`] is ever called.
    const CYCLE_COMPLETE_SUPPORTED: bool = true;

    /// Validates the generator against the sink and reads sink capabilities.
    /// Called once when the animation is built.
    fn setup<S: PixelSink>(&mut self, sink: &S) -> Result<(), AnimationError> {
        let _ = sink;
        Ok(())
    }

    /// Color the animation starts with unless the builder overrides it.
    fn default_color(&self) -> Color {
        OFF
    }

    /// Frame interval the animation starts with unless the builder overrides it.
    fn default_speed_ns(&self) -> u64 {
        DEFAULT_SPEED_NS
    }

    /// Renders the next frame into `frame`.
    fn next_frame<S: PixelSink>(&mut self, frame: &mut Frame<'_, S>);

    /// Rewinds to the first frame.
    fn reset(&mut self) {}

    /// Called whenever the animation color changes, including once at build time.
    fn on_color_changed(&mut self, color: Color) {
        let _ = color;
    }
}

/// Drives one [`FrameGenerator`] on one [`PixelSink`].
///
/// Call [`animate`](Animation::animate) from your main loop as often as you
/// like; a frame is drawn only once the configured speed has elapsed since
/// the previous one. Peers are drawn right after this animation, on its
/// schedule.
///
/// # Type Parameters
/// * `'a` - Lifetime of the clock, peer and listener references
/// * `S` - Pixel sink type (a `&mut` to your strip works)
/// * `T` - Time source type
/// * `G` - Frame generator type
/// * `PEERS` - Maximum number of peers
/// * `LISTENERS` - Maximum number of cycle listeners
pub struct Animation<
    'a,
    S: PixelSink,
    T: TimeSource,
    G: FrameGenerator,
    const PEERS: usize = 4,
    const LISTENERS: usize = 4,
> {
    sink: S,
    time_source: &'a T,
    generator: G,
    name: Option<&'static str>,
    color: Color,
    speed_ns: u64,
    paused: bool,
    next_update_ns: u64,
    time_left_at_pause_ns: u64,
    peers: Vec<&'a mut dyn Animate, PEERS>,
    listeners: Vec<&'a dyn CycleListener, LISTENERS>,
    notify_cycles: u32,
    cycle_count: u32,
    draw_count: u32,
}

impl<'a, S: PixelSink, T: TimeSource, G: FrameGenerator> Animation<'a, S, T, G> {
    /// Creates a builder with room for 4 peers and 4 listeners.
    ///
    /// Use [`AnimationBuilder::new`] directly for other capacities.
    pub fn builder(sink: S, time_source: &'a T, generator: G) -> AnimationBuilder<'a, S, T, G> {
        AnimationBuilder::new(sink, time_source, generator)
    }

    /// Builds an animation with default settings.
    pub fn new(sink: S, time_source: &'a T, generator: G) -> Result<Self, AnimationError> {
        Self::builder(sink, time_source, generator).build()
    }
}

impl<'a, S, T, G, const PEERS: usize, const LISTENERS: usize>
    Animation<'a, S, T, G, PEERS, LISTENERS>
where
    S: PixelSink,
    T: TimeSource,
    G: FrameGenerator,
{
    /// Draws a frame if the animation is not paused and is due.
    ///
    /// On a frame: the generator draws, the sink is flushed, the draw count
    /// increments, every peer draws, and the next frame is scheduled one
    /// speed interval from now.
    ///
    /// # Returns
    /// * `true` - A frame was drawn
    /// * `false` - Paused or not yet due
    pub fn animate(&mut self) -> bool {
        if self.paused {
            return false;
        }

        let now = self.time_source.now_ns();
        if now < self.next_update_ns {
            return false;
        }

        self.render(now);
        self.draw_count = self.draw_count.wrapping_add(1);

        for peer in self.peers.iter_mut() {
            peer.draw();
        }

        self.next_update_ns = now.saturating_add(self.speed_ns);
        true
    }

    /// Draws one frame unconditionally and flushes the sink.
    ///
    /// Does not advance the draw count or the schedule.
    pub fn draw(&mut self) {
        let now = self.time_source.now_ns();
        self.render(now);
    }

    fn render(&mut self, now_ns: u64) {
        let mut frame = Frame {
            sink: &mut self.sink,
            color: self.color,
            draw_count: self.draw_count,
            now_ns,
            completed_cycles: 0,
        };
        self.generator.next_frame(&mut frame);
        let completed = frame.completed_cycles;

        self.sink.show();

        for _ in 0..completed {
            self.signal_cycle_complete();
        }
    }

    /// Pauses the animation.
    ///
    /// Remembers how long was left until the next frame (zero if overdue) so
    /// [`resume`](Self::resume) can restore the schedule. Freezing while
    /// frozen recomputes that time.
    pub fn freeze(&mut self) {
        let now = self.time_source.now_ns();
        self.paused = true;
        self.time_left_at_pause_ns = self.next_update_ns.saturating_sub(now);
        debug!("freeze: {=u64}ns left", self.time_left_at_pause_ns);
    }

    /// Resumes the animation, scheduling the next frame after the time that
    /// was left when frozen.
    pub fn resume(&mut self) {
        let now = self.time_source.now_ns();
        self.next_update_ns = now.saturating_add(self.time_left_at_pause_ns);
        self.time_left_at_pause_ns = 0;
        self.paused = false;
        debug!("resume: next frame at {=u64}ns", self.next_update_ns);
    }

    /// Rewinds the generator. Counters and listeners are kept.
    pub fn reset(&mut self) {
        self.generator.reset();
    }

    /// Fills the sink with `color`. Does not flush.
    pub fn fill(&mut self, color: Color) {
        self.sink.fill(color);
    }

    /// Increments the cycle count and notifies listeners every
    /// `notify_cycles` cycles, in registration order.
    pub fn signal_cycle_complete(&mut self) {
        self.cycle_count = self.cycle_count.wrapping_add(1);
        trace!("{=str} cycle {=u32} complete", G::KIND, self.cycle_count);

        if self.cycle_count % self.notify_cycles == 0 {
            let this: &Self = self;
            for listener in this.listeners.iter() {
                listener.on_cycle_complete(this);
            }
        }
    }

    /// Registers a cycle-complete listener.
    ///
    /// # Errors
    /// * `CapacityExceeded` - `LISTENERS` listeners are already registered
    pub fn register_cycle_listener(
        &mut self,
        listener: &'a dyn CycleListener,
    ) -> Result<ListenerId, AnimationError> {
        let id = ListenerId(self.listeners.len());
        self.listeners
            .push(listener)
            .map_err(|_| AnimationError::CapacityExceeded)?;
        Ok(id)
    }

    /// Adds a peer, drawn every time this animation draws.
    ///
    /// # Errors
    /// * `CapacityExceeded` - `PEERS` peers are already linked
    pub fn add_peer(&mut self, peer: &'a mut dyn Animate) -> Result<(), AnimationError> {
        self.peers
            .push(peer)
            .map_err(|_| AnimationError::CapacityExceeded)
    }

    /// Number of linked peers.
    pub fn peer_count(&self) -> usize {
        self.peers.len()
    }

    /// Current animation color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Changes the color and lets the generator derive its secondary state.
    ///
    /// Setting the current color is a no-op.
    pub fn set_color(&mut self, color: Color) {
        if self.color == color {
            return;
        }
        self.color = color;
        self.generator.on_color_changed(color);
    }

    /// Changes the color from a packed `0xRRGGBB` value.
    pub fn set_color_hex(&mut self, hex: u32) {
        self.set_color(color_from_hex(hex));
    }

    /// Frame interval in fractional seconds.
    pub fn speed(&self) -> f32 {
        nanos_to_seconds(self.speed_ns)
    }

    /// Sets the frame interval in fractional seconds.
    pub fn set_speed(&mut self, seconds: f32) {
        self.speed_ns = seconds_to_nanos(seconds);
    }

    /// Frame interval in nanoseconds.
    pub fn speed_ns(&self) -> u64 {
        self.speed_ns
    }

    /// Sets the frame interval in nanoseconds.
    pub fn set_speed_ns(&mut self, speed_ns: u64) {
        self.speed_ns = speed_ns;
    }

    /// How many cycles pass between listener notifications.
    pub fn notify_cycles(&self) -> u32 {
        self.notify_cycles
    }

    /// Sets how many cycles pass between listener notifications.
    ///
    /// # Errors
    /// * `InvalidNotifyCycles` - `cycles` is zero
    pub fn set_notify_cycles(&mut self, cycles: u32) -> Result<(), AnimationError> {
        if cycles == 0 {
            return Err(AnimationError::InvalidNotifyCycles);
        }
        self.notify_cycles = cycles;
        Ok(())
    }

    /// Returns true while frozen.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Completed animation cycles.
    pub fn cycle_count(&self) -> u32 {
        self.cycle_count
    }

    /// Frames drawn through [`animate`](Self::animate).
    pub fn draw_count(&self) -> u32 {
        self.draw_count
    }

    /// Time of the next scheduled frame.
    pub fn next_update_ns(&self) -> u64 {
        self.next_update_ns
    }

    /// Whether the generator ever reports completed cycles.
    pub fn cycle_complete_supported(&self) -> bool {
        G::CYCLE_COMPLETE_SUPPORTED
    }

    /// Optional user-supplied label.
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// The frame generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Mutable access to the frame generator.
    pub fn generator_mut(&mut self) -> &mut G {
        &mut self.generator
    }

    /// The pixel sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the pixel sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

impl<S, T, G, const PEERS: usize, const LISTENERS: usize> Animate
    for Animation<'_, S, T, G, PEERS, LISTENERS>
where
    S: PixelSink,
    T: TimeSource,
    G: FrameGenerator,
{
    fn animate(&mut self) -> bool {
        Animation::animate(self)
    }

    fn draw(&mut self) {
        Animation::draw(self);
    }

    fn freeze(&mut self) {
        Animation::freeze(self);
    }

    fn resume(&mut self) {
        Animation::resume(self);
    }

    fn reset(&mut self) {
        Animation::reset(self);
    }

    fn fill(&mut self, color: Color) {
        Animation::fill(self, color);
    }

    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        Animation::set_color(self, color);
    }

    fn speed_ns(&self) -> u64 {
        self.speed_ns
    }

    fn set_speed_ns(&mut self, speed_ns: u64) {
        self.speed_ns = speed_ns;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn cycle_count(&self) -> u32 {
        self.cycle_count
    }

    fn draw_count(&self) -> u32 {
        self.draw_count
    }

    fn cycle_complete_supported(&self) -> bool {
        G::CYCLE_COMPLETE_SUPPORTED
    }

    fn kind(&self) -> &'static str {
        G::KIND
    }

    fn name(&self) -> Option<&'static str> {
        self.name
    }
}

impl<S, T, G, const PEERS: usize, const LISTENERS: usize> core::fmt::Display
    for Animation<'_, S, T, G, PEERS, LISTENERS>
where
    S: PixelSink,
    T: TimeSource,
    G: FrameGenerator,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.name {
            Some(name) => write!(f, "<{}: {}>", G::KIND, name),
            None => write!(f, "<{}>", G::KIND),
        }
    }
}

/// Builder for validated [`Animation`]s.
pub struct AnimationBuilder<
    'a,
    S: PixelSink,
    T: TimeSource,
    G: FrameGenerator,
    const PEERS: usize = 4,
    const LISTENERS: usize = 4,
> {
    sink: S,
    time_source: &'a T,
    generator: G,
    name: Option<&'static str>,
    color: Option<Color>,
    speed_ns: Option<u64>,
    paused: bool,
    notify_cycles: u32,
    peers: Vec<&'a mut dyn Animate, PEERS>,
    listeners: Vec<&'a dyn CycleListener, LISTENERS>,
}

impl<'a, S, T, G, const PEERS: usize, const LISTENERS: usize>
    AnimationBuilder<'a, S, T, G, PEERS, LISTENERS>
where
    S: PixelSink,
    T: TimeSource,
    G: FrameGenerator,
{
    /// Creates a builder for an animation drawing `generator` onto `sink`.
    pub fn new(sink: S, time_source: &'a T, generator: G) -> Self {
        Self {
            sink,
            time_source,
            generator,
            name: None,
            color: None,
            speed_ns: None,
            paused: false,
            notify_cycles: 1,
            peers: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Sets the frame interval in fractional seconds.
    pub fn speed(mut self, seconds: f32) -> Self {
        self.speed_ns = Some(seconds_to_nanos(seconds));
        self
    }

    /// Sets the frame interval in nanoseconds.
    pub fn speed_ns(mut self, speed_ns: u64) -> Self {
        self.speed_ns = Some(speed_ns);
        self
    }

    /// Sets the starting color.
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the starting color from a packed `0xRRGGBB` value.
    pub fn color_hex(mut self, hex: u32) -> Self {
        self.color = Some(color_from_hex(hex));
        self
    }

    /// Labels the animation.
    pub fn name(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    /// Starts the animation frozen.
    pub fn paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }

    /// Notify listeners only every `cycles` completed cycles. Default is 1.
    pub fn notify_cycles(mut self, cycles: u32) -> Self {
        self.notify_cycles = cycles;
        self
    }

    /// Adds a peer.
    ///
    /// # Errors
    /// * `CapacityExceeded` - More than `PEERS` peers
    pub fn peer(mut self, peer: &'a mut dyn Animate) -> Result<Self, AnimationError> {
        self.peers
            .push(peer)
            .map_err(|_| AnimationError::CapacityExceeded)?;
        Ok(self)
    }

    /// Registers a cycle listener.
    ///
    /// # Errors
    /// * `CapacityExceeded` - More than `LISTENERS` listeners
    pub fn listener(mut self, listener: &'a dyn CycleListener) -> Result<Self, AnimationError> {
        self.listeners
            .push(listener)
            .map_err(|_| AnimationError::CapacityExceeded)?;
        Ok(self)
    }

    /// Builds and validates the animation. The first frame is due immediately.
    ///
    /// # Errors
    /// * `EmptyPixelSink` - The sink has no pixels
    /// * `InvalidNotifyCycles` - `notify_cycles` is zero
    /// * Any error the generator reports from [`FrameGenerator::setup`]
    pub fn build(self) -> Result<Animation<'a, S, T, G, PEERS, LISTENERS>, AnimationError> {
        if self.sink.is_empty() {
            return Err(AnimationError::EmptyPixelSink);
        }

        if self.notify_cycles == 0 {
            return Err(AnimationError::InvalidNotifyCycles);
        }

        let mut generator = self.generator;
        generator.setup(&self.sink)?;

        let color = self.color.unwrap_or_else(|| generator.default_color());
        let speed_ns = self.speed_ns.unwrap_or_else(|| generator.default_speed_ns());
        generator.on_color_changed(color);

        Ok(Animation {
            sink: self.sink,
            time_source: self.time_source,
            generator,
            name: self.name,
            color,
            speed_ns,
            paused: self.paused,
            next_update_ns: self.time_source.now_ns(),
            time_left_at_pause_ns: 0,
            peers: self.peers,
            listeners: self.listeners,
            notify_cycles: self.notify_cycles,
            cycle_count: 0,
            draw_count: 0,
        })
    }
}
