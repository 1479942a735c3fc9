//! Time-indexed playback controller.
//!
//! Owns the current index, the play/pause flag and the single auto-advance
//! timer. Every transition that changes the index renders the new step into
//! the surface before returning.
//!
//! # State machine
//!
//! ```text
//!            toggle (start timer)
//!   Paused ───────────────────────▶ Playing
//!     ▲                               │  tick: index = (index + 1) % len
//!     └────────────────────────────────┘
//!            toggle (cancel timer)
//!
//!   slider input (either state): index = clamp(value), playing unchanged
//! ```

use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

use crate::dataset::Dataset;
use crate::player::render::markers::{render_step, MapSurface};
use crate::player::state::PlaybackState;
use crate::player::timer::{AutoAdvance, DEFAULT_PERIOD, MIN_PERIOD};

/// Fraction of the dataset covered by a large step.
const JUMP_FRACTION: f64 = 0.10;

pub struct PlaybackController<S: MapSurface> {
    dataset: Dataset,
    surface: S,
    state: PlaybackState,
    timer: Option<AutoAdvance>,
    period: Duration,
    generation: u64,
}

impl<S: MapSurface> PlaybackController<S> {
    /// Create a paused controller at index 0 and render that step.
    pub fn new(dataset: Dataset, surface: S) -> Self {
        Self::with_period(dataset, surface, DEFAULT_PERIOD)
    }

    /// Like [`new`](Self::new) with a custom auto-advance period.
    ///
    /// Periods below [`MIN_PERIOD`] are raised to it.
    pub fn with_period(dataset: Dataset, surface: S, period: Duration) -> Self {
        let mut controller = Self {
            dataset,
            surface,
            state: PlaybackState::default(),
            timer: None,
            period: period.max(MIN_PERIOD),
            generation: 0,
        };
        controller.render();
        controller
    }

    // === Accessors ===

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn index(&self) -> usize {
        self.state.index
    }

    pub fn is_playing(&self) -> bool {
        self.state.playing
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable surface access for view-only changes (popup selection).
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Range the slider must expose: `[0, len - 1]`.
    pub fn slider_range(&self) -> RangeInclusive<usize> {
        0..=self.dataset.max_index()
    }

    pub fn play_label(&self) -> &'static str {
        self.state.play_label()
    }

    pub fn has_active_timer(&self) -> bool {
        self.timer.is_some()
    }

    /// Generation of the running timer, if any.
    pub fn timer_generation(&self) -> Option<u64> {
        self.timer.as_ref().map(AutoAdvance::generation)
    }

    /// Time until the next auto-advance tick, `None` when paused.
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.as_ref().map(|t| t.remaining(now))
    }

    // === Play/pause ===

    /// Play/pause activation.
    pub fn toggle_play(&mut self, now: Instant) {
        if self.state.playing {
            self.pause();
        } else {
            self.play(now);
        }
    }

    /// Enter `Playing`; a no-op when already playing.
    pub fn play(&mut self, now: Instant) {
        if self.state.playing {
            return;
        }
        self.state.playing = true;
        self.start_timer(now);
        tracing::debug!(index = self.state.index, "playback started");
    }

    /// Enter `Paused`; the index stays where it is.
    pub fn pause(&mut self) {
        if !self.state.playing {
            return;
        }
        self.state.playing = false;
        self.cancel_timer();
        tracing::debug!(index = self.state.index, "playback paused");
    }

    fn start_timer(&mut self, now: Instant) {
        self.cancel_timer();
        self.generation += 1;
        self.timer = Some(AutoAdvance::start(self.generation, self.period, now));
    }

    fn cancel_timer(&mut self) {
        self.timer = None;
    }

    /// Fire the auto-advance timer if it is due.
    ///
    /// Returns true when the index advanced.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        if !timer.is_due(now) {
            return false;
        }
        timer.fire(now);
        self.advance();
        true
    }

    /// Move to the next step, wrapping after the last one.
    fn advance(&mut self) {
        self.state.index = (self.state.index + 1) % self.dataset.len();
        self.render();
    }

    // === Slider input ===

    /// Slider input: jump to `value`, clamped to the slider range.
    pub fn set_index(&mut self, value: usize) {
        self.state.index = value.min(self.dataset.max_index());
        self.render();
    }

    /// Move the slider by `delta` notches without wrapping.
    pub fn step_by(&mut self, delta: isize) {
        let target = self.state.index.saturating_add_signed(delta);
        self.set_index(target);
    }

    /// Move the slider by a tenth of the dataset (at least one notch).
    pub fn jump(&mut self, forward: bool) {
        let amount = ((self.dataset.len() as f64 * JUMP_FRACTION) as isize).max(1);
        self.step_by(if forward { amount } else { -amount });
    }

    pub fn jump_to_start(&mut self) {
        self.set_index(0);
    }

    pub fn jump_to_end(&mut self) {
        self.set_index(self.dataset.max_index());
    }

    fn render(&mut self) {
        if let Some(step) = self.dataset.get(self.state.index) {
            render_step(step, &mut self.surface);
            tracing::trace!(index = self.state.index, time = %step.time, "step rendered");
        }
    }
}
