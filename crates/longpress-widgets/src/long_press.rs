//! Hold-to-confirm button painted with egui.

use std::hash::Hash;

use egui::{
    pos2, vec2, Align2, Color32, Context, CursorIcon, FontId, Id, Pos2, Rect, Sense, Shape,
    Stroke, Ui,
};
use longpress_core::geometry::{
    arc_points, ring_radius, CENTER, FINISHED_STROKE_WIDTH, RADIUS, STROKE_WIDTH,
};
use longpress_core::svg::{CHECK_COLOR, CHECK_GLYPH, OVERLAY_FILL, OVERLAY_STROKE};
use longpress_core::{
    Cursor, Device, PressController, TickOutcome, WidgetConfig, WidgetView,
};

use crate::colors::parse_css_color;
use crate::sizing;

/// Memory id of the button created with `id_salt(salt)` in `ui`.
pub fn long_press_id(ui: &Ui, salt: impl Hash) -> Id {
    ui.make_persistent_id(salt)
}

/// Return a finished button to idle. Returns false if it wasn't finished.
pub fn reset_long_press(ctx: &Context, id: Id) -> bool {
    ctx.data_mut(|d| match d.get_temp_mut_or_default::<Option<PressController>>(id) {
        Some(controller) => controller.reset(),
        None => false,
    })
}

/// A circular button that completes after being held for the configured time.
pub struct LongPressButton<'a> {
    config: &'a WidgetConfig,
    id: Option<Id>,
    size: f32,
}

impl<'a> LongPressButton<'a> {
    /// Create a new long-press button.
    pub fn new(config: &'a WidgetConfig) -> Self {
        Self {
            config,
            id: None,
            size: sizing::DEFAULT_SIZE,
        }
    }

    /// Diameter in points.
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Give the button a stable identity (needed for `reset_long_press`).
    pub fn id(mut self, id: Id) -> Self {
        self.id = Some(id);
        self
    }

    /// Show the button and return true on the frame the hold completes.
    pub fn show(self, ui: &mut Ui) -> bool {
        let (rect, response) = ui.allocate_exact_size(vec2(self.size, self.size), Sense::click_and_drag());
        let id = self.id.unwrap_or(response.id);

        let (now_ms, touching) = ui.input(|i| (i.time * 1000.0, i.any_touches()));
        let mut controller = ui
            .data_mut(|d| d.get_temp::<Option<PressController>>(id))
            .flatten()
            .unwrap_or_else(|| PressController::new(self.config.duration_ms()));

        if response.is_pointer_button_down_on() {
            let device = if touching { Device::Touch } else { Device::Mouse };
            controller.on_device_down(device, now_ms);
        } else if controller.engine().is_pressed() {
            // The release is reported by whichever device class pressed.
            let device = controller.arbiter().active_device().unwrap_or(Device::Mouse);
            controller.on_device_up(device, now_ms);
        }

        let mut completed = false;
        if controller.engine().is_animating() {
            completed = controller.tick(now_ms) == TickOutcome::Completed;
            if controller.engine().is_animating() {
                ui.ctx().request_repaint();
            }
        }

        let view = WidgetView::new(self.config, &controller);
        ui.data_mut(|d| d.insert_temp(id, Some(controller)));

        if ui.is_rect_visible(rect) {
            self.paint(ui, rect, &view);
        }

        let cursor = match view.cursor {
            Cursor::Pointer => CursorIcon::PointingHand,
            Cursor::Default => CursorIcon::Default,
        };
        response.on_hover_cursor(cursor);
        completed
    }

    fn paint(&self, ui: &Ui, rect: Rect, view: &WidgetView) {
        let scale = rect.width() / (RADIUS as f32 * 2.0);
        let to_screen = |p: kurbo::Point| -> Pos2 {
            pos2(rect.left() + p.x as f32 * scale, rect.top() + p.y as f32 * scale)
        };
        let center = to_screen(CENTER);
        let painter = ui.painter();

        painter.circle(
            center,
            ring_radius() as f32 * scale,
            parse_css_color(&self.config.bg_fill_color),
            Stroke::new(STROKE_WIDTH as f32 * scale, parse_css_color(&view.ring_stroke)),
        );

        let points: Vec<Pos2> = arc_points(CENTER, ring_radius(), view.arc_fraction, sizing::ARC_SEGMENTS)
            .into_iter()
            .map(to_screen)
            .collect();
        if points.len() >= 2 {
            painter.add(Shape::line(
                points,
                Stroke::new(STROKE_WIDTH as f32 * scale, parse_css_color(&self.config.fg_stroke_color)),
            ));
        }

        painter.text(
            center,
            Align2::CENTER_CENTER,
            &self.config.text,
            FontId::proportional(sizing::LABEL_FONT_SIZE * scale),
            parse_css_color(&self.config.text_color),
        );

        let opacity = view.overlay_opacity as f32;
        if opacity > 0.0 {
            let fade = |c: Color32| c.gamma_multiply(opacity);
            painter.circle(
                center,
                (RADIUS - FINISHED_STROKE_WIDTH / 2.0) as f32 * scale,
                fade(parse_css_color(OVERLAY_FILL)),
                Stroke::new(FINISHED_STROKE_WIDTH as f32 * scale, fade(parse_css_color(OVERLAY_STROKE))),
            );
            painter.text(
                center,
                Align2::CENTER_CENTER,
                CHECK_GLYPH,
                FontId::proportional(sizing::CHECK_FONT_SIZE * scale),
                fade(parse_css_color(CHECK_COLOR)),
            );
        }
    }
}
