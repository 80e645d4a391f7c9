//! LongPress Core Library
//!
//! Platform-agnostic logic for the long-press button widget: the hold/release
//! state machine, mouse/touch arbitration, arc geometry and the SVG view.
//! Hosts (browser DOM, egui, headless preview) only translate their events
//! and frame callbacks into calls on [`LongPresser`] or [`PressController`].

pub mod animation;
pub mod clock;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod input;
pub mod svg;
pub mod widget;

pub use animation::{FixedStepLoop, Frame};
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::{ConfigError, WidgetConfig, DEFAULT_DURATION_MS};
pub use engine::{FrameRequest, PressPhase, ProgressEngine, TickOutcome};
pub use geometry::{accel, arc_points, polar_to_cartesian, progress_arc, svg_arc_path, ArcPath};
pub use input::{Device, InputArbiter, PointerPhase, PressSignal, RawPointerEvent};
pub use svg::render_svg;
pub use widget::{Cursor, LongPresser, PressController, WidgetId, WidgetView};
