//! Playback controller
//!
//! Owns the current position in a [`StepSequence`] and replays it under user
//! or timer control. The state machine is `Idle` (nothing loaded), `Ready`
//! (sequence installed, at step 0), `Playing`, `Paused`, and `Complete`
//! (auto-advance ran off the end). `Complete` is terminal only for the
//! timer: manual stepping and reset stay legal so the user can scrub after
//! playback finishes.
//!
//! # Scheduling discipline
//!
//! The controller is single-threaded and cooperative: the "timer" is one due
//! [`Instant`] held in a single `Option` slot, and the event loop calls
//! [`PlaybackController::poll`] to fire it. At most one tick is ever
//! pending; every operation that could invalidate it (pause, reset, a new
//! `generate`, jumps) clears the slot first, so a cancelled tick can never
//! fire and no two timers can overlap. All time-dependent operations take
//! `now` as a parameter, which keeps playback deterministic under test.

use crate::input::dataset::Dataset;
use crate::runner::{self, Algorithm};
use crate::step::{InvariantError, Step, StepSequence};
use std::time::{Duration, Instant};

/// Inclusive playback speed bounds, in milliseconds per step.
pub const SPEED_MIN_MS: u64 = 100;
pub const SPEED_MAX_MS: u64 = 2000;

/// Where the controller is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
    /// No sequence loaded.
    Idle,
    /// Sequence installed, positioned at step 0, timer idle.
    Ready,
    /// Auto-advancing on the tick schedule.
    Playing,
    /// Stopped by the user mid-sequence.
    Paused,
    /// Auto-advance reached the last step.
    Complete,
}

#[derive(Debug, Clone, Copy)]
struct PendingTick {
    due: Instant,
}

/// Replays one step sequence at a time; one instance per visualizer.
pub struct PlaybackController {
    sequence: Option<StepSequence>,
    current: usize,
    speed: Duration,
    mode: PlaybackMode,
    pending: Option<PendingTick>,
}

impl PlaybackController {
    pub fn new(speed_ms: u64) -> Self {
        PlaybackController {
            sequence: None,
            current: 0,
            speed: Duration::from_millis(speed_ms.clamp(SPEED_MIN_MS, SPEED_MAX_MS)),
            mode: PlaybackMode::Idle,
            pending: None,
        }
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    pub fn speed_ms(&self) -> u64 {
        self.speed.as_millis() as u64
    }

    pub fn sequence(&self) -> Option<&StepSequence> {
        self.sequence.as_ref()
    }

    /// Current position as `(index, length)`, once a sequence is loaded.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.sequence.as_ref().map(|seq| (self.current, seq.len()))
    }

    /// The step playback is currently showing.
    pub fn current_step(&self) -> Option<&Step> {
        self.sequence.as_ref().and_then(|seq| seq.get(self.current))
    }

    /// Runs the algorithm and installs the resulting sequence.
    ///
    /// Replacement is atomic with respect to the tick: the pending schedule
    /// is cancelled before the runner executes, so no step of an old
    /// sequence can be shown after a new generation starts. On an
    /// [`InvariantError`] the controller drops everything and returns to
    /// `Idle` — a partial sequence is never observable.
    pub fn generate(
        &mut self,
        dataset: &Dataset,
        algorithm: Algorithm,
    ) -> Result<(), InvariantError> {
        self.pending = None;
        match runner::run(dataset, algorithm) {
            Ok(sequence) => {
                self.sequence = Some(sequence);
                self.current = 0;
                self.mode = PlaybackMode::Ready;
                Ok(())
            }
            Err(err) => {
                self.sequence = None;
                self.current = 0;
                self.mode = PlaybackMode::Idle;
                Err(err)
            }
        }
    }

    /// Starts auto-advance. Legal from `Ready` and `Paused`; a no-op
    /// anywhere else.
    pub fn play(&mut self, now: Instant) {
        if self.sequence.is_none() {
            return;
        }
        if matches!(self.mode, PlaybackMode::Ready | PlaybackMode::Paused) {
            self.mode = PlaybackMode::Playing;
            self.pending = Some(PendingTick {
                due: now + self.speed,
            });
        }
    }

    /// Stops auto-advance; the cancelled tick can never fire.
    pub fn pause(&mut self) {
        if self.mode == PlaybackMode::Playing {
            self.pending = None;
            self.mode = PlaybackMode::Paused;
        }
    }

    /// Advances one step; a no-op at the last index. Stepping while
    /// `Playing` drops to `Paused` first.
    pub fn step(&mut self) {
        let Some(seq) = &self.sequence else {
            return;
        };
        if self.mode == PlaybackMode::Playing {
            self.pending = None;
            self.mode = PlaybackMode::Paused;
        }
        if self.current + 1 < seq.len() {
            self.current += 1;
        }
    }

    /// Moves one step back, floored at 0. All steps are pre-computed, so
    /// this never re-runs the algorithm. Scrubbing back out of `Complete`
    /// re-enters `Paused`.
    pub fn step_back(&mut self) {
        if self.sequence.is_none() {
            return;
        }
        if self.mode == PlaybackMode::Playing {
            self.pending = None;
        }
        if matches!(self.mode, PlaybackMode::Playing | PlaybackMode::Complete) {
            self.mode = PlaybackMode::Paused;
        }
        self.current = self.current.saturating_sub(1);
    }

    /// Back to step 0 and `Ready`, cancelling any schedule.
    pub fn reset(&mut self) {
        if self.sequence.is_none() {
            return;
        }
        self.pending = None;
        self.current = 0;
        self.mode = PlaybackMode::Ready;
    }

    /// Jumps straight to the terminal step.
    pub fn jump_to_end(&mut self) {
        let Some(seq) = &self.sequence else {
            return;
        };
        self.pending = None;
        self.current = seq.len() - 1;
        self.mode = PlaybackMode::Complete;
    }

    /// Updates the interval, clamped to `[100, 2000]` ms. A tick that is
    /// already pending keeps its due time; the new interval applies from
    /// the next scheduling on, and the single-slot schedule means no two
    /// timers can ever overlap.
    pub fn set_speed(&mut self, speed_ms: u64) {
        self.speed = Duration::from_millis(speed_ms.clamp(SPEED_MIN_MS, SPEED_MAX_MS));
    }

    /// Fires the pending tick if it is due, advancing one step per elapsed
    /// interval. At the last index the schedule is cancelled and the mode
    /// becomes `Complete`. Returns true when the position changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut advanced = false;
        while let Some(tick) = self.pending {
            if now < tick.due {
                break;
            }
            let Some(seq) = &self.sequence else {
                self.pending = None;
                break;
            };
            if self.current + 1 >= seq.len() {
                self.pending = None;
                self.mode = PlaybackMode::Complete;
                break;
            }
            self.current += 1;
            advanced = true;
            self.pending = Some(PendingTick {
                due: tick.due + self.speed,
            });
        }
        advanced
    }
}
