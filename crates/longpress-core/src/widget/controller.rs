//! Input arbitration wired to the progress engine.

use crate::engine::{FrameRequest, PressPhase, ProgressEngine, TickOutcome};
use crate::input::{Device, InputArbiter, PressSignal, RawPointerEvent};

/// All mutable state of one widget.
///
/// `Clone` and free of callbacks so immediate-mode hosts can keep it in
/// their own per-widget storage between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct PressController {
    arbiter: InputArbiter,
    engine: ProgressEngine,
}

impl PressController {
    /// Create an idle controller for a validated duration.
    pub fn new(duration_ms: f64) -> Self {
        Self {
            arbiter: InputArbiter::new(),
            engine: ProgressEngine::new(duration_ms),
        }
    }

    pub fn engine(&self) -> &ProgressEngine {
        &self.engine
    }

    pub fn arbiter(&self) -> &InputArbiter {
        &self.arbiter
    }

    pub fn phase(&self) -> PressPhase {
        self.engine.phase()
    }

    /// Pointer down from `device`.
    pub fn on_device_down(&mut self, device: Device, now_ms: f64) -> FrameRequest {
        let signal = self.arbiter.on_device_down(device, self.engine.is_pressed());
        self.apply(signal, now_ms)
    }

    /// Pointer up from `device`.
    pub fn on_device_up(&mut self, device: Device, now_ms: f64) -> FrameRequest {
        let signal = self.arbiter.on_device_up(device, self.engine.is_pressed());
        self.apply(signal, now_ms)
    }

    /// Raw platform event.
    pub fn handle_raw(&mut self, event: RawPointerEvent, now_ms: f64) -> FrameRequest {
        let signal = self.arbiter.handle(event, self.engine.is_pressed());
        self.apply(signal, now_ms)
    }

    fn apply(&mut self, signal: Option<PressSignal>, now_ms: f64) -> FrameRequest {
        match signal {
            Some(PressSignal::Start) => self.engine.start_press(now_ms),
            Some(PressSignal::End) => {
                self.engine.end_press();
                FrameRequest::None
            }
            None => FrameRequest::None,
        }
    }

    /// Advance the animation.
    pub fn tick(&mut self, now_ms: f64) -> TickOutcome {
        self.engine.tick(now_ms)
    }

    /// Return a finished widget to idle.
    pub fn reset(&mut self) -> bool {
        self.engine.reset()
    }

    /// Discard press state and stop animating.
    pub fn cancel(&mut self) {
        self.engine.cancel();
    }
}
