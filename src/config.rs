use log::{warn, Level};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::FxError;
use crate::page::Page;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Id of the optional `<script type="application/json">` block that
/// overrides the defaults below.
pub const CONFIG_ELEMENT: &str = "#fxConfig";

/// Shortest counter animation, whatever the config says.
pub const MIN_COUNTER_MS: f64 = 200.0;

/// Tuning knobs for the landing page behaviors.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub carousel_interval_ms: u32,
    /// Scroll offset in px past which the navbar counts as scrolled.
    pub nav_scroll_threshold: f64,
    pub counter_duration_ms: f64,
    pub counter_visibility: f64,
    pub progress_visibility: f64,
    pub form_invalid_message: String,
    /// `{name}` is replaced with the trimmed name field.
    pub form_ack_message: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            carousel_interval_ms: 5200,
            nav_scroll_threshold: 12.0,
            counter_duration_ms: 950.0,
            counter_visibility: 0.4,
            progress_visibility: 0.35,
            form_invalid_message: "Please fill in all required fields.".to_string(),
            form_ack_message: "Thanks {name}! Message captured (demo).".to_string(),
        }
    }
}

impl Config {
    /// Parses a JSON object of overrides. Anything else, including a bare
    /// array serde would read as a tuple of fields, is rejected.
    pub fn from_json(raw: &str) -> Result<Self, FxError> {
        let fields: Map<String, Value> = serde_json::from_str(raw)?;
        let config: Self = serde_json::from_value(Value::Object(fields))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), FxError> {
        if self.carousel_interval_ms == 0 {
            return Err(FxError::ConfigRange(
                "carouselIntervalMs must be above 0".to_string(),
            ));
        }
        if !self.nav_scroll_threshold.is_finite() || !self.counter_duration_ms.is_finite() {
            return Err(FxError::ConfigRange(
                "navScrollThreshold and counterDurationMs must be finite".to_string(),
            ));
        }
        for (name, ratio) in [
            ("counterVisibility", self.counter_visibility),
            ("progressVisibility", self.progress_visibility),
        ] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(FxError::ConfigRange(format!(
                    "{} must be within 0..=1, got {}",
                    name, ratio
                )));
            }
        }
        Ok(())
    }

    /// Reads overrides from the page, falling back to defaults when the
    /// block is absent or malformed.
    pub fn from_page(page: &dyn Page) -> Self {
        let Some(block) = page.find(CONFIG_ELEMENT) else {
            return Self::default();
        };
        match Self::from_json(&block.text()) {
            Ok(config) => config,
            Err(err) => {
                warn!("Ignoring page config: {}", err);
                Self::default()
            }
        }
    }

    pub fn counter_duration(&self) -> f64 {
        self.counter_duration_ms.max(MIN_COUNTER_MS)
    }
}
