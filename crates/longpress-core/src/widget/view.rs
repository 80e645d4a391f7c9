//! Visual state derived from the controller and configuration.

use crate::config::WidgetConfig;
use crate::engine::PressPhase;
use crate::geometry::{progress_arc, ArcPath};

use super::controller::PressController;

/// CSS class added to the completion overlay while it fades in.
pub const FADE_IN_CLASS: &str = "longpresser-fade-in";

/// Mouse cursor over the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// Interactive.
    #[default]
    Pointer,
    /// Finished, nothing left to press.
    Default,
}

impl Cursor {
    /// CSS `cursor` value.
    pub fn css(self) -> &'static str {
        match self {
            Cursor::Pointer => "pointer",
            Cursor::Default => "default",
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetView {
    /// Progress arc, already eased. Empty once finished.
    pub arc: ArcPath,
    /// Eased fraction the arc covers.
    pub arc_fraction: f64,
    /// Stroke of the base ring.
    pub ring_stroke: String,
    pub cursor: Cursor,
    /// Opacity of the completion circle and checkmark.
    pub overlay_opacity: f64,
    /// Whether the fade-in class is applied to the overlay.
    pub overlay_faded_in: bool,
}

impl WidgetView {
    /// Build the view for the controller's current state.
    pub fn new(config: &WidgetConfig, controller: &PressController) -> Self {
        let finished = controller.phase() == PressPhase::Finished;
        let arc_fraction = if finished {
            0.0
        } else {
            controller.engine().display_fraction()
        };
        let ring_stroke = if finished {
            &config.fg_stroke_color
        } else {
            &config.bg_stroke_color
        };

        Self {
            arc: progress_arc(arc_fraction),
            arc_fraction,
            ring_stroke: ring_stroke.clone(),
            cursor: if finished { Cursor::Default } else { Cursor::Pointer },
            overlay_opacity: if finished { 1.0 } else { 0.0 },
            overlay_faded_in: finished,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Device;

    fn config() -> WidgetConfig {
        WidgetConfig::new("Hold").with_duration(0.1)
    }

    #[test]
    fn test_idle_view() {
        let config = config();
        let view = WidgetView::new(&config, &PressController::new(config.duration_ms()));
        assert!(view.arc.is_empty());
        assert_eq!(view.ring_stroke, config.bg_stroke_color);
        assert_eq!(view.cursor, Cursor::Pointer);
        assert_eq!(view.overlay_opacity, 0.0);
        assert!(!view.overlay_faded_in);
    }

    #[test]
    fn test_pressing_view_uses_eased_fraction() {
        let config = config();
        let mut controller = PressController::new(config.duration_ms());
        controller.on_device_down(Device::Mouse, 0.0);
        controller.tick(50.0);

        let view = WidgetView::new(&config, &controller);
        assert!((view.arc_fraction - 0.5f64.powf(2.25)).abs() < 1e-9);
        assert!(!view.arc.is_empty());
        assert_eq!(view.ring_stroke, config.bg_stroke_color);
    }

    #[test]
    fn test_finished_view() {
        let config = config();
        let mut controller = PressController::new(config.duration_ms());
        controller.on_device_down(Device::Mouse, 0.0);
        controller.tick(150.0);

        let view = WidgetView::new(&config, &controller);
        assert!(view.arc.is_empty());
        assert_eq!(view.ring_stroke, config.fg_stroke_color);
        assert_eq!(view.cursor, Cursor::Default);
        assert_eq!(view.cursor.css(), "default");
        assert_eq!(view.overlay_opacity, 1.0);
        assert!(view.overlay_faded_in);
    }
}
