//! Navigation Bar Component
//!
//! Brand link, logout link and the mobile burger.

use leptos::prelude::*;

use crate::commands::ids;

/// Top navigation bar
///
/// The burger and the menu share one `is-active` flag so they always
/// open and close together.
#[component]
pub fn NavBar(
    /// Brand target; `None` renders plain text
    #[prop(optional)]
    brand_href: Option<&'static str>,
) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    let burger_class = move || {
        if menu_open.get() {
            "navbar-burger is-active"
        } else {
            "navbar-burger"
        }
    };
    let menu_class = move || {
        if menu_open.get() {
            "navbar-menu is-active"
        } else {
            "navbar-menu"
        }
    };

    let brand = match brand_href {
        Some(href) => view! { <a class="navbar-item has-text-weight-bold" href=href>"Recipe Generator"</a> }.into_any(),
        None => view! { <span class="navbar-item has-text-weight-bold">"Recipe Generator"</span> }.into_any(),
    };

    view! {
        <nav class="navbar" role="navigation" aria-label="main navigation">
            <div class="navbar-brand">
                {brand}
                <a
                    role="button"
                    class=burger_class
                    aria-label="menu"
                    aria-expanded=move || menu_open.get().to_string()
                    data-target=ids::NAV_MENU
                    on:click=toggle_menu
                >
                    <span aria-hidden="true"></span>
                    <span aria-hidden="true"></span>
                    <span aria-hidden="true"></span>
                </a>
            </div>
            <div id=ids::NAV_MENU class=menu_class>
                <div class="navbar-end">
                    <a class="navbar-item" href="/home">"Home"</a>
                    <a class="navbar-item" href="/logout">"Logout"</a>
                </div>
            </div>
        </nav>
    }
}
