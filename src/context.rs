//! Application Context
//!
//! Read-only page inputs provided via Leptos Context API.

use leptos::prelude::*;
use leptos_toast::ToastKind;

use crate::config::{AppConfig, PageData};
use crate::store::{store_push_toast, store_schedule_expiry, UiStore};

/// Config and injected render data, fixed for the page's lifetime
#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: StoredValue<AppConfig>,
    pub page: StoredValue<PageData>,
    store: UiStore,
}

impl AppContext {
    pub fn new(config: AppConfig, page: PageData, store: UiStore) -> Self {
        Self {
            config: StoredValue::new(config),
            page: StoredValue::new(page),
            store,
        }
    }

    /// Show a toast with the configured duration
    pub fn toast(&self, message: &str, kind: ToastKind) -> u32 {
        let duration = self.config.with_value(|c| c.toast_duration_ms);
        store_push_toast(&self.store, message, kind, duration)
    }

    /// Arm the configured expiry for a toast pushed directly into the queue
    pub fn expire_later(&self, id: u32) {
        let duration = self.config.with_value(|c| c.toast_duration_ms);
        store_schedule_expiry(&self.store, id, duration);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
