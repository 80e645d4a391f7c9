//! LongPress Application
//!
//! Host shell for the long-press widget: the browser binding that mounts
//! widgets into a page (WASM) and a headless native preview.

#[cfg(all(feature = "native", not(target_arch = "wasm32")))]
pub mod preview;

#[cfg(all(feature = "native", not(target_arch = "wasm32")))]
pub use preview::{simulate_hold, PreviewArgs, PreviewError, PreviewOptions, PreviewReport};

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{mount_long_presser, LongPressHandle};
