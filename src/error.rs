//! UI Error Type
//!
//! Failures from browser APIs. Callers at the UI edge decide whether
//! a failure is shown, logged, or swallowed.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("window is not available")]
    NoWindow,
    #[error("local storage unavailable: {0}")]
    Storage(String),
    #[error("media query failed: {0}")]
    MediaQuery(String),
    #[error("element #{0} not found")]
    ElementNotFound(String),
    #[error("clipboard write rejected: {0}")]
    Clipboard(String),
    #[error("javascript error: {0}")]
    Js(String),
    #[error("failed to deserialize {name}: {reason}")]
    Deserialize { name: String, reason: String },
}

/// Render a thrown JS value as text for logging
pub fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Js(js_message(&value))
    }
}

pub type UiResult<T> = Result<T, UiError>;
