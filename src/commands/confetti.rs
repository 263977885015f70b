//! Confetti Commands
//!
//! Drives the optional `window.confetti` (canvas-confetti) global.

use gloo_timers::callback::Timeout;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::{UiError, UiResult};

#[derive(Serialize)]
struct ConfettiOrigin {
    y: f64,
}

#[derive(Serialize)]
struct ConfettiOptions {
    #[serde(rename = "particleCount")]
    particle_count: u32,
    spread: u32,
    origin: ConfettiOrigin,
}

impl Default for ConfettiOptions {
    fn default() -> Self {
        Self {
            particle_count: 100,
            spread: 70,
            origin: ConfettiOrigin { y: 0.2 },
        }
    }
}

/// One burst. `Ok(false)` when the page did not load the confetti script.
pub fn fire_confetti() -> UiResult<bool> {
    let window = web_sys::window().ok_or(UiError::NoWindow)?;
    let confetti = js_sys::Reflect::get(&window, &JsValue::from_str("confetti"))?;
    let Some(confetti) = confetti.dyn_ref::<js_sys::Function>() else {
        return Ok(false);
    };

    let options = serde_wasm_bindgen::to_value(&ConfettiOptions::default())
        .map_err(|e| UiError::Js(e.to_string()))?;
    confetti.call1(&JsValue::NULL, &options)?;
    Ok(true)
}

/// Fire once after `delay_ms`
pub fn celebrate_after(delay_ms: u32) {
    Timeout::new(delay_ms, || match fire_confetti() {
        Ok(true) => log::debug!("[CONFETTI] fired"),
        Ok(false) => log::debug!("[CONFETTI] window.confetti not loaded"),
        Err(e) => log::warn!("[CONFETTI] {}", e),
    })
    .forget();
}
