//! Recipe Genie Frontend Entry Point

mod models;
mod error;
mod config;
mod theme;
mod route;
mod store;
mod context;
mod commands;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = config::load_config();
    if let Err(e) = console_log::init_with_level(config.log_level()) {
        web_sys::console::warn_1(&format!("logger init failed: {}", e).into());
    }
    log::info!("[MAIN] starting, demo_mode={}", config.demo_mode);

    mount_to_body(move || view! { <App config=config /> });
}
