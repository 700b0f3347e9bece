use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures from the browser side of the page enhancements.
///
/// None of these ever reach the visitor. Behaviors log them and carry on
/// without the affected effect.
#[derive(Debug, Error)]
pub enum FxError {
    #[error("browser window or document is not available")]
    NoWindow,

    #[error("browser call failed: {0}")]
    Js(String),

    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("page config out of range: {0}")]
    ConfigRange(String),
}

impl From<JsValue> for FxError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        FxError::Js(message)
    }
}
