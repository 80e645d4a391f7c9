//! Progress engine: the timed hold/release state machine.
//!
//! Progress accumulates frame deltas while pressed and drains them while
//! released. Timestamps are passed in by the host (milliseconds on any
//! monotonic time base), which keeps the engine deterministic.

use crate::geometry::accel;

/// Derived phase of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressPhase {
    /// Nothing pressed, no progress.
    Idle,
    /// Pointer held, progress increasing.
    Pressing,
    /// Pointer released early, progress draining toward zero.
    Releasing,
    /// Duration reached. Terminal until `reset()`.
    Finished,
}

/// Whether the host must start a new frame chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRequest {
    /// Schedule one animation frame and tick from it.
    Schedule,
    /// Nothing to do (no state change, or a chain is already running).
    None,
}

/// Result of one animation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Progress is still changing; schedule the next frame.
    Continue,
    /// The hold completed on this tick. Reported once per completion.
    Completed,
    /// Progress drained back to zero; the chain ends.
    Idle,
    /// No chain was running; the tick was ignored.
    Stopped,
}

impl TickOutcome {
    /// Whether another frame should be scheduled.
    pub fn keeps_running(self) -> bool {
        matches!(self, TickOutcome::Continue)
    }
}

/// Hold-time state owned by a single widget.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressEngine {
    duration_ms: f64,
    is_pressed: bool,
    is_finished: bool,
    elapsed_ms: f64,
    last_tick_ms: f64,
    /// An animation chain is alive (a frame is pending or about to be).
    chain_alive: bool,
}

impl ProgressEngine {
    /// Create an idle engine. `duration_ms` must already be validated.
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            is_pressed: false,
            is_finished: false,
            elapsed_ms: 0.0,
            last_tick_ms: 0.0,
            chain_alive: false,
        }
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn is_pressed(&self) -> bool {
        self.is_pressed
    }

    pub fn is_finished(&self) -> bool {
        self.is_finished
    }

    /// Whether a frame chain is currently running.
    pub fn is_animating(&self) -> bool {
        self.chain_alive
    }

    /// Current phase, derived from the state fields.
    pub fn phase(&self) -> PressPhase {
        if self.is_finished {
            PressPhase::Finished
        } else if self.is_pressed {
            PressPhase::Pressing
        } else if self.elapsed_ms > 0.0 {
            PressPhase::Releasing
        } else {
            PressPhase::Idle
        }
    }

    /// Raw press fraction in `[0, 1]`.
    pub fn press_fraction(&self) -> f64 {
        (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Press fraction after the easing curve; this is what the arc shows.
    pub fn display_fraction(&self) -> f64 {
        accel(self.press_fraction())
    }

    /// Begin holding. Valid from `Idle` and `Releasing`.
    pub fn start_press(&mut self, now_ms: f64) -> FrameRequest {
        if self.is_finished || self.is_pressed {
            return FrameRequest::None;
        }
        log::debug!("Press started at {:.0}ms progress", self.elapsed_ms);
        self.is_pressed = true;
        self.last_tick_ms = now_ms;
        if self.chain_alive {
            // The draining chain picks up the press on its next tick.
            return FrameRequest::None;
        }
        self.chain_alive = true;
        FrameRequest::Schedule
    }

    /// Stop holding. The next tick switches to draining.
    pub fn end_press(&mut self) {
        if self.is_pressed {
            log::debug!("Press released at {:.0}ms progress", self.elapsed_ms);
        }
        self.is_pressed = false;
    }

    /// Advance by the time since the previous tick.
    pub fn tick(&mut self, now_ms: f64) -> TickOutcome {
        if !self.chain_alive {
            return TickOutcome::Stopped;
        }

        let dt = (now_ms - self.last_tick_ms).max(0.0);
        self.last_tick_ms = now_ms;

        if self.is_pressed {
            self.elapsed_ms = (self.elapsed_ms + dt).min(self.duration_ms);
            if self.elapsed_ms >= self.duration_ms {
                self.finish();
                return TickOutcome::Completed;
            }
        } else {
            self.elapsed_ms = (self.elapsed_ms - dt).max(0.0);
            if self.elapsed_ms <= 0.0 {
                self.chain_alive = false;
                return TickOutcome::Idle;
            }
        }
        TickOutcome::Continue
    }

    fn finish(&mut self) {
        log::info!("Long press completed after {:.0}ms", self.duration_ms);
        self.elapsed_ms = 0.0;
        self.is_pressed = false;
        self.is_finished = true;
        self.chain_alive = false;
    }

    /// Drop all progress and end the frame chain, from any phase.
    ///
    /// Used when the widget goes away; a pending frame then ticks as
    /// [`TickOutcome::Stopped`] and nothing completes.
    pub fn cancel(&mut self) {
        if self.chain_alive {
            log::debug!("Cancelled at {:.0}ms progress", self.elapsed_ms);
        }
        self.is_pressed = false;
        self.is_finished = false;
        self.elapsed_ms = 0.0;
        self.chain_alive = false;
    }

    /// Return a finished engine to `Idle`. Ignored in any other phase.
    pub fn reset(&mut self) -> bool {
        if !self.is_finished {
            log::trace!("Ignoring reset in {:?}", self.phase());
            return false;
        }
        self.is_pressed = false;
        self.is_finished = false;
        self.elapsed_ms = 0.0;
        true
    }
}
