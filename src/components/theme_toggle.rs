//! Theme Toggle Component
//!
//! Corner button flipping light/dark mode. Rendered by every top-level view.

use leptos::prelude::*;

use crate::store::{store_theme, store_toggle_theme, use_ui_store};
use crate::theme::BrowserThemeStorage;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_ui_store();

    let toggle = move |_| store_toggle_theme(&store, &BrowserThemeStorage);

    // Label names the mode a click switches to
    let label = move || if store_theme(&store).is_dark() { "Light" } else { "Dark" };

    view! {
        <button
            type="button"
            class="theme-toggle button is-small is-rounded"
            title="Toggle theme"
            on:click=toggle
        >
            {label}
        </button>
    }
}
