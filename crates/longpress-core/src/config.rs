//! Widget configuration supplied by the hosting page.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hold time used when no usable duration is configured.
pub const DEFAULT_DURATION_MS: f64 = 1000.0;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid widget options: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Options recognized when a widget is created.
///
/// Field names serialize in camelCase so the option bag a page already
/// builds (`{ text, textColor, fgStrokeColor, ... }`) deserializes as-is.
/// Colors are CSS color strings and are passed through to the renderer
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetConfig {
    /// Label shown at the center until the hold completes.
    pub text: String,
    /// Label color.
    pub text_color: String,
    /// Arc color while pressed, ring color once finished.
    pub fg_stroke_color: String,
    /// Ring color while idle.
    pub bg_stroke_color: String,
    /// Fill of the base circle.
    pub bg_fill_color: String,
    /// Hold time in seconds. Missing or non-positive values use the default.
    pub duration: Option<f64>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            text: "Press Me".to_string(),
            text_color: "#FFF".to_string(),
            fg_stroke_color: "#F00".to_string(),
            bg_stroke_color: "#A00".to_string(),
            bg_fill_color: "#800".to_string(),
            duration: None,
        }
    }
}

impl WidgetConfig {
    /// Create a configuration with the given label and default colors.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Parse an option bag from JSON.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the label.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the hold duration in seconds.
    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration = Some(seconds);
        self
    }

    /// Set the label, arc/finished, idle ring and fill colors.
    pub fn with_colors(
        mut self,
        text_color: impl Into<String>,
        fg_stroke_color: impl Into<String>,
        bg_stroke_color: impl Into<String>,
        bg_fill_color: impl Into<String>,
    ) -> Self {
        self.text_color = text_color.into();
        self.fg_stroke_color = fg_stroke_color.into();
        self.bg_stroke_color = bg_stroke_color.into();
        self.bg_fill_color = bg_fill_color.into();
        self
    }

    /// Effective hold time in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        match self.duration {
            Some(seconds) if seconds.is_finite() && seconds > 0.0 => seconds * 1000.0,
            Some(seconds) => {
                log::debug!("Ignoring duration {seconds}s, using {DEFAULT_DURATION_MS}ms");
                DEFAULT_DURATION_MS
            }
            None => DEFAULT_DURATION_MS,
        }
    }
}
