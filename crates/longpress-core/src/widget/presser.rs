//! A configured widget instance with completion listeners.

use std::fmt;

use uuid::Uuid;

use crate::config::WidgetConfig;
use crate::engine::{FrameRequest, PressPhase, TickOutcome};
use crate::input::{Device, RawPointerEvent};
use crate::svg::render_svg;

use super::controller::PressController;
use super::view::WidgetView;

/// Unique identifier for a widget instance.
pub type WidgetId = Uuid;

type PressedListener = Box<dyn FnMut(WidgetId)>;

/// One long-press widget.
pub struct LongPresser {
    id: WidgetId,
    config: WidgetConfig,
    controller: PressController,
    listeners: Vec<PressedListener>,
}

impl fmt::Debug for LongPresser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LongPresser")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("controller", &self.controller)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl LongPresser {
    /// Create an idle widget.
    pub fn new(config: WidgetConfig) -> Self {
        let controller = PressController::new(config.duration_ms());
        let id = Uuid::new_v4();
        log::debug!("Created long presser {} ({:?})", id, config.text);
        Self {
            id,
            config,
            controller,
            listeners: Vec::new(),
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn controller(&self) -> &PressController {
        &self.controller
    }

    pub fn phase(&self) -> PressPhase {
        self.controller.phase()
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.controller.engine().elapsed_ms()
    }

    pub fn is_pressed(&self) -> bool {
        self.controller.engine().is_pressed()
    }

    pub fn is_finished(&self) -> bool {
        self.controller.engine().is_finished()
    }

    /// Register a listener called once per completed hold.
    pub fn on_pressed(&mut self, listener: impl FnMut(WidgetId) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Builder form of [`LongPresser::on_pressed`].
    pub fn with_on_pressed(mut self, listener: impl FnMut(WidgetId) + 'static) -> Self {
        self.on_pressed(listener);
        self
    }

    pub fn on_device_down(&mut self, device: Device, now_ms: f64) -> FrameRequest {
        self.controller.on_device_down(device, now_ms)
    }

    pub fn on_device_up(&mut self, device: Device, now_ms: f64) -> FrameRequest {
        self.controller.on_device_up(device, now_ms)
    }

    pub fn handle_raw(&mut self, event: RawPointerEvent, now_ms: f64) -> FrameRequest {
        self.controller.handle_raw(event, now_ms)
    }

    /// Advance the animation and notify listeners on completion.
    pub fn tick(&mut self, now_ms: f64) -> TickOutcome {
        let outcome = self.controller.tick(now_ms);
        if outcome == TickOutcome::Completed {
            for listener in &mut self.listeners {
                listener(self.id);
            }
        }
        outcome
    }

    /// Return a finished widget to idle. Returns false if it wasn't finished.
    pub fn reset(&mut self) -> bool {
        let reset = self.controller.reset();
        if reset {
            log::debug!("Long presser {} reset", self.id);
        }
        reset
    }

    /// Discard press state when the widget is torn down. Listeners are not
    /// called for a hold that was in progress.
    pub fn cancel(&mut self) {
        self.controller.cancel();
        log::debug!("Long presser {} cancelled", self.id);
    }

    /// Current visual state.
    pub fn view(&self) -> WidgetView {
        WidgetView::new(&self.config, &self.controller)
    }

    /// Render the widget as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        render_svg(&self.config, &self.view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::animation::{FixedStepLoop, Frame};
    use crate::clock::{Clock, ManualClock};

    fn counter(presser: &mut LongPresser) -> Rc<Cell<u32>> {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        presser.on_pressed(move |_| c.set(c.get() + 1));
        count
    }

    #[test]
    fn test_hold_fires_one_completion() {
        let mut presser = LongPresser::new(WidgetConfig::default().with_duration(0.75));
        let fired = counter(&mut presser);
        let clock = ManualClock::new(0.0);

        assert_eq!(presser.on_device_down(Device::Mouse, clock.now_ms()), FrameRequest::Schedule);
        let mut completed_at = None;
        let frames = FixedStepLoop::new(16.67, 60).run_while(&clock, |frame| {
            let outcome = presser.tick(clock.now_ms());
            if outcome == TickOutcome::Completed {
                completed_at = Some(frame);
            }
            outcome.into()
        });

        assert_eq!(frames, 45);
        assert_eq!(completed_at, Some(45));
        assert_eq!(fired.get(), 1);
        assert!(presser.is_finished());
        assert!(!presser.is_pressed());

        // Releasing after completion does nothing.
        presser.on_device_up(Device::Mouse, clock.now_ms());
        assert_eq!(presser.tick(clock.now_ms() + 16.67), TickOutcome::Stopped);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_short_hold_then_release() {
        let mut presser = LongPresser::new(WidgetConfig::default().with_duration(0.75));
        let fired = counter(&mut presser);
        let clock = ManualClock::new(1_000.0);

        presser.on_device_down(Device::Touch, clock.now_ms());
        FixedStepLoop::new(10.0, 30).run_while(&clock, |_| presser.tick(clock.now_ms()).into());
        assert!((presser.elapsed_ms() - 300.0).abs() < 1e-6);

        presser.on_device_up(Device::Touch, clock.now_ms());
        let release_start = clock.now_ms();
        let frames = FixedStepLoop::new(10.0, 100).run_while(&clock, |_| presser.tick(clock.now_ms()).into());

        assert!(clock.now_ms() - release_start <= 300.0 + 1e-6);
        assert_eq!(frames, 30);
        assert_eq!(presser.elapsed_ms(), 0.0);
        assert_eq!(presser.phase(), PressPhase::Idle);
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_reset_allows_second_completion() {
        let mut presser = LongPresser::new(WidgetConfig::default().with_duration(0.05));
        let fired = counter(&mut presser);

        presser.on_device_down(Device::Mouse, 0.0);
        assert_eq!(presser.tick(60.0), TickOutcome::Completed);
        assert!(presser.to_svg().contains("cursor: default"));

        assert!(presser.reset());
        assert_eq!(presser.phase(), PressPhase::Idle);
        assert!(presser.to_svg().contains("cursor: pointer"));

        // The mouse still owns the widget; a fresh down starts a new press.
        presser.on_device_up(Device::Mouse, 70.0);
        assert_eq!(presser.on_device_down(Device::Mouse, 100.0), FrameRequest::Schedule);
        assert_eq!(presser.tick(200.0), TickOutcome::Completed);
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn test_cancel_during_hold_skips_listeners() {
        let mut presser = LongPresser::new(WidgetConfig::default().with_duration(0.1));
        let fired = counter(&mut presser);
        let clock = ManualClock::new(0.0);

        presser.on_device_down(Device::Mouse, clock.now_ms());
        clock.advance(50.0);
        assert_eq!(presser.tick(clock.now_ms()), TickOutcome::Continue);

        presser.cancel();
        let frames = FixedStepLoop::new(16.0, 30).run_while(&clock, |_| presser.tick(clock.now_ms()).into());

        assert_eq!(frames, 1);
        assert_eq!(fired.get(), 0);
        assert!(!presser.is_pressed());
        assert_eq!(presser.phase(), PressPhase::Idle);
    }

    #[test]
    fn test_invalid_duration_uses_default() {
        let presser = LongPresser::new(WidgetConfig::default().with_duration(-5.0));
        assert_eq!(presser.controller().engine().duration_ms(), 1000.0);
    }

    #[test]
    fn test_instances_have_distinct_ids() {
        let a = LongPresser::new(WidgetConfig::default());
        let b = LongPresser::new(WidgetConfig::default());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_listener_receives_widget_id() {
        let seen = Rc::new(Cell::new(None));
        let s = seen.clone();
        let mut presser = LongPresser::new(WidgetConfig::default().with_duration(0.01))
            .with_on_pressed(move |id| s.set(Some(id)));

        presser.on_device_down(Device::Mouse, 0.0);
        presser.tick(20.0);
        assert_eq!(seen.get(), Some(presser.id()));
    }

    #[test]
    fn test_frame_conversion_stops_chain() {
        let mut presser = LongPresser::new(WidgetConfig::default());
        assert_eq!(Frame::from(presser.tick(0.0)), Frame::Stop);
    }
}
