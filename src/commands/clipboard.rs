//! Clipboard Commands
//!
//! Copy the text of a named element to the system clipboard.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::{js_message, UiError, UiResult};

#[wasm_bindgen]
extern "C" {
    /// Throws synchronously when `navigator.clipboard` is missing;
    /// `catch` turns both that and a rejected promise into `Err`.
    #[wasm_bindgen(js_namespace = ["navigator", "clipboard"], js_name = writeText, catch)]
    async fn write_text(text: &str) -> Result<JsValue, JsValue>;
}

/// Form value for inputs/textareas, text content otherwise
pub fn element_text(id: &str) -> UiResult<String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(UiError::NoWindow)?;
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| UiError::ElementNotFound(id.to_string()))?;

    if let Some(area) = element.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        return Ok(area.value());
    }
    if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
        return Ok(input.value());
    }
    Ok(element.text_content().unwrap_or_default())
}

/// Copy element `id` to the clipboard. No timeout: if the platform
/// promise never settles, neither does this future.
pub async fn copy_element_text(id: &str) -> UiResult<()> {
    let text = element_text(id)?;
    write_text(&text)
        .await
        .map_err(|e| UiError::Clipboard(js_message(&e)))?;
    log::debug!("[CLIPBOARD] copied {} chars from #{}", text.chars().count(), id);
    Ok(())
}
