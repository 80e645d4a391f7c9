//! Input arbitration between mouse and touch events.
//!
//! Touch screens fire a synthetic mouse-down/up shortly after every real
//! touch. Each widget keeps a latch recording which device class owns its
//! interaction, and events from the other class are dropped.

use serde::{Deserialize, Serialize};

/// Device class that produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Device {
    Mouse,
    Touch,
}

impl Device {
    /// The competing device class.
    pub fn other(self) -> Self {
        match self {
            Device::Mouse => Device::Touch,
            Device::Touch => Device::Mouse,
        }
    }
}

/// Whether a pointer went down or came up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    Down,
    Up,
}

/// Raw platform pointer events, named after the DOM events they come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawPointerEvent {
    MouseDown,
    MouseUp,
    TouchStart,
    TouchEnd,
}

impl RawPointerEvent {
    /// All events a host needs to listen for.
    pub const ALL: [RawPointerEvent; 4] = [
        RawPointerEvent::MouseDown,
        RawPointerEvent::MouseUp,
        RawPointerEvent::TouchStart,
        RawPointerEvent::TouchEnd,
    ];

    /// DOM event type string.
    pub fn dom_name(self) -> &'static str {
        match self {
            RawPointerEvent::MouseDown => "mousedown",
            RawPointerEvent::MouseUp => "mouseup",
            RawPointerEvent::TouchStart => "touchstart",
            RawPointerEvent::TouchEnd => "touchend",
        }
    }

    /// Device class and phase of this event.
    pub fn classify(self) -> (Device, PointerPhase) {
        match self {
            RawPointerEvent::MouseDown => (Device::Mouse, PointerPhase::Down),
            RawPointerEvent::MouseUp => (Device::Mouse, PointerPhase::Up),
            RawPointerEvent::TouchStart => (Device::Touch, PointerPhase::Down),
            RawPointerEvent::TouchEnd => (Device::Touch, PointerPhase::Up),
        }
    }
}

/// Logical press signal produced by the arbiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressSignal {
    Start,
    End,
}

/// Per-widget device latch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputArbiter {
    /// Device class that currently owns interaction (None until first event).
    active_device: Option<Device>,
}

impl InputArbiter {
    /// Create an arbiter with no owning device.
    pub fn new() -> Self {
        Self::default()
    }

    /// The device class that owns this widget, if any.
    pub fn active_device(&self) -> Option<Device> {
        self.active_device
    }

    /// Try to take ownership for `device`. Fails if the other class holds it.
    fn claim(&mut self, device: Device) -> bool {
        if self.active_device == Some(device.other()) {
            log::trace!("Ignoring {:?} event, {:?} owns the widget", device, device.other());
            return false;
        }
        self.active_device = Some(device);
        true
    }

    /// Pointer went down on the widget.
    pub fn on_device_down(&mut self, device: Device, is_pressed: bool) -> Option<PressSignal> {
        if !self.claim(device) || is_pressed {
            return None;
        }
        Some(PressSignal::Start)
    }

    /// Pointer came up on the widget.
    pub fn on_device_up(&mut self, device: Device, is_pressed: bool) -> Option<PressSignal> {
        if !self.claim(device) || !is_pressed {
            return None;
        }
        Some(PressSignal::End)
    }

    /// Route a raw event to the matching handler.
    pub fn handle(&mut self, event: RawPointerEvent, is_pressed: bool) -> Option<PressSignal> {
        match event.classify() {
            (device, PointerPhase::Down) => self.on_device_down(device, is_pressed),
            (device, PointerPhase::Up) => self.on_device_up(device, is_pressed),
        }
    }
}
