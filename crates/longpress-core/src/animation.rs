//! Frame loops: "animate while the step says so".
//!
//! A loop runs one step per frame and ends as soon as a step returns
//! [`Frame::Stop`]. There is no cancellation token; a finished chain simply
//! doesn't schedule another frame.

use crate::clock::ManualClock;
use crate::engine::TickOutcome;

/// Decision returned by a frame step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Continue,
    Stop,
}

impl From<TickOutcome> for Frame {
    fn from(outcome: TickOutcome) -> Self {
        if outcome.keeps_running() {
            Frame::Continue
        } else {
            Frame::Stop
        }
    }
}

/// Deterministic loop with a fixed frame interval.
///
/// Stands in for a display's frame callback when running headless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStepLoop {
    /// Interval between frames in milliseconds.
    pub frame_ms: f64,
    /// Upper bound on frames, so a step that never stops can't hang.
    pub max_frames: usize,
}

impl FixedStepLoop {
    /// Default frame rate of the loop.
    pub const DEFAULT_FPS: f64 = 60.0;

    pub fn new(frame_ms: f64, max_frames: usize) -> Self {
        Self {
            frame_ms,
            max_frames,
        }
    }

    /// A loop running at `fps` frames per second.
    pub fn at_fps(fps: f64, max_frames: usize) -> Self {
        let fps = if fps.is_finite() && fps > 0.0 {
            fps
        } else {
            Self::DEFAULT_FPS
        };
        Self::new(1000.0 / fps, max_frames)
    }

    /// Advance `clock` one frame at a time and call `step` with the frame
    /// number (starting at 1) until it stops. Returns the frames executed.
    pub fn run_while(&self, clock: &ManualClock, mut step: impl FnMut(usize) -> Frame) -> usize {
        for frame in 1..=self.max_frames {
            clock.advance(self.frame_ms);
            if step(frame) == Frame::Stop {
                return frame;
            }
        }
        self.max_frames
    }
}

impl Default for FixedStepLoop {
    fn default() -> Self {
        Self::at_fps(Self::DEFAULT_FPS, 10_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Clock;

    #[test]
    fn test_stops_when_step_says_so() {
        let clock = ManualClock::new(0.0);
        let frames = FixedStepLoop::new(10.0, 100).run_while(&clock, |frame| {
            if frame == 7 { Frame::Stop } else { Frame::Continue }
        });
        assert_eq!(frames, 7);
        assert_eq!(clock.now_ms(), 70.0);
    }

    #[test]
    fn test_bounded_by_max_frames() {
        let clock = ManualClock::new(0.0);
        let frames = FixedStepLoop::new(1.0, 5).run_while(&clock, |_| Frame::Continue);
        assert_eq!(frames, 5);
    }

    #[test]
    fn test_outcome_to_frame() {
        assert_eq!(Frame::from(TickOutcome::Continue), Frame::Continue);
        assert_eq!(Frame::from(TickOutcome::Completed), Frame::Stop);
        assert_eq!(Frame::from(TickOutcome::Idle), Frame::Stop);
        assert_eq!(Frame::from(TickOutcome::Stopped), Frame::Stop);
    }

    #[test]
    fn test_invalid_fps_uses_default() {
        let looped = FixedStepLoop::at_fps(0.0, 1);
        assert!((looped.frame_ms - 1000.0 / 60.0).abs() < 1e-9);
    }
}
