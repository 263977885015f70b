//! Recipe Genie Frontend App
//!
//! Root component: sets up shared state, applies the theme, then renders
//! the one view the current path selects.

use leptos::prelude::*;
use leptos_toast::ToastHost;
use reactive_stores::Store;

use crate::components::{HomeView, LoginView, RegisterView, ResultView};
use crate::config::{load_page_data, AppConfig};
use crate::context::AppContext;
use crate::route::Route;
use crate::store::{store_dismiss_toast, store_init_theme, store_toasts, UiState};
use crate::theme::BrowserThemeStorage;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let store = Store::new(UiState::default());
    provide_context(store);
    provide_context(AppContext::new(config, load_page_data(), store));

    store_init_theme(&store, &BrowserThemeStorage);

    let route = Route::current();
    log::info!("[APP] rendering {:?}", route);

    let page = match route {
        Route::Login => view! { <LoginView /> }.into_any(),
        Route::Register => view! { <RegisterView /> }.into_any(),
        Route::Result => view! { <ResultView /> }.into_any(),
        Route::Home => view! { <HomeView /> }.into_any(),
    };

    view! {
        {page}
        <ToastHost
            toasts=Signal::derive(move || store_toasts(&store))
            on_dismiss=Callback::new(move |id| store_dismiss_toast(&store, id))
        />
    }
}
