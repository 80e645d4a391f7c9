//! egui components for the long-press button.
//!
//! - **LongPress**: [`LongPressButton`], the hold-to-confirm widget painted
//!   with the egui painter
//! - **Colors**: CSS color parsing for the configured widget colors

pub mod colors;
pub mod long_press;

pub use colors::{parse_css_color, try_parse_css_color};
pub use long_press::{long_press_id, reset_long_press, LongPressButton};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Default widget diameter
    pub const DEFAULT_SIZE: f32 = 100.0;
    /// Line segments used to approximate a full progress ring
    pub const ARC_SEGMENTS: usize = 96;
    /// Label font size at the default diameter
    pub const LABEL_FONT_SIZE: f32 = 15.2;
    /// Checkmark font size at the default diameter
    pub const CHECK_FONT_SIZE: f32 = 24.0;
}
