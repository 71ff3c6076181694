use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::PopupLayoutConfig;

/// Fixed texts shown by the annotation card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusTexts {
    /// Shown while an explanation request is in flight.
    #[serde(default = "default_loading_text")]
    pub loading_text: String,
    /// Substituted when the service fails or answers with an empty summary.
    #[serde(default = "default_fallback_text")]
    pub fallback_text: String,
    /// Shown when a selection is made on an empty timeline.
    #[serde(default = "default_empty_summary_text")]
    pub empty_summary_text: String,
    /// Shown when resolved text contains nothing renderable.
    #[serde(default = "default_empty_text")]
    pub empty_text: String,
}

impl Default for FocusTexts {
    fn default() -> Self {
        Self {
            loading_text: default_loading_text(),
            fallback_text: default_fallback_text(),
            empty_summary_text: default_empty_summary_text(),
            empty_text: default_empty_text(),
        }
    }
}

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can persist/load chart setup without
/// inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastChartConfig {
    pub container_width: f64,
    #[serde(default)]
    pub popup_layout: PopupLayoutConfig,
    #[serde(default)]
    pub texts: FocusTexts,
}

impl ForecastChartConfig {
    #[must_use]
    pub fn new(container_width: f64) -> Self {
        Self {
            container_width,
            popup_layout: PopupLayoutConfig::default(),
            texts: FocusTexts::default(),
        }
    }

    /// Sets annotation card geometry.
    #[must_use]
    pub fn with_popup_layout(mut self, popup_layout: PopupLayoutConfig) -> Self {
        self.popup_layout = popup_layout;
        self
    }

    #[must_use]
    pub fn with_texts(mut self, texts: FocusTexts) -> Self {
        self.texts = texts;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_container_width(self.container_width)?;
        self.popup_layout.validate()?;
        if self.texts.fallback_text.trim().is_empty() {
            return Err(ChartError::InvalidConfig(
                "fallback text must not be blank".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse chart config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize chart config: {e}"))
        })
    }
}

pub(super) fn validate_container_width(width: f64) -> ChartResult<()> {
    if !width.is_finite() || width < 0.0 {
        return Err(ChartError::InvalidContainer { width });
    }
    Ok(())
}

fn default_loading_text() -> String {
    "Analyzing this point...".to_owned()
}

fn default_fallback_text() -> String {
    "Unable to generate insight at the moment.".to_owned()
}

fn default_empty_summary_text() -> String {
    "No data available to summarize.".to_owned()
}

fn default_empty_text() -> String {
    "No insight available.".to_owned()
}
