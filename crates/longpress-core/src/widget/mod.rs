//! The long-press widget.
//!
//! This module ties the pieces together:
//! - [`PressController`]: input arbiter plus progress engine, the whole
//!   mutable state of one widget
//! - [`WidgetView`]: the visual state a renderer draws
//! - [`LongPresser`]: a controller with its configuration, identity and
//!   completion listeners
//!
//! Every widget owns its own controller, so instances on the same page never
//! share a device latch.

mod controller;
mod presser;
mod view;

pub use controller::PressController;
pub use presser::{LongPresser, WidgetId};
pub use view::{Cursor, WidgetView, FADE_IN_CLASS};
