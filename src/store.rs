//! Global UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! The only process-wide mutable UI state: theme mode and the toast stack.

use leptos::prelude::*;
use leptos_toast::{expire_toast, schedule_dismiss, Toast, ToastKind, ToastQueue};
use reactive_stores::Store;

use crate::theme::{self, ThemeMode, ThemeStorage};

/// Global UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Effective light/dark mode
    pub theme: ThemeMode,
    /// Visible notifications, oldest first
    pub toasts: ToastQueue,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Theme
// ========================

/// Resolve the startup theme and paint the document root
pub fn store_init_theme<S: ThemeStorage>(store: &UiStore, storage: &S) {
    let mode = theme::resolve_initial(storage);
    if let Err(e) = theme::apply_to_document(mode) {
        log::debug!("[THEME] could not apply {}: {}", mode.as_str(), e);
    }
    log::info!("[THEME] initial mode {}", mode.as_str());
    store.theme().set(mode);
}

/// Flip, persist and re-apply the theme
pub fn store_toggle_theme<S: ThemeStorage>(store: &UiStore, storage: &S) {
    let next = theme::toggle(storage, store.theme().get_untracked());
    if let Err(e) = theme::apply_to_document(next) {
        log::debug!("[THEME] could not apply {}: {}", next.as_str(), e);
    }
    store.theme().set(next);
}

/// Current theme (tracked when called inside a reactive scope)
pub fn store_theme(store: &UiStore) -> ThemeMode {
    store.theme().get()
}

// ========================
// Toasts
// ========================

/// Run `f` against the toast queue
pub fn store_with_toasts<R>(store: &UiStore, f: impl FnOnce(&mut ToastQueue) -> R) -> R {
    let binding = store.toasts();
    let mut toasts = binding.write();
    f(&mut *toasts)
}

/// Arm the timer that removes toast `id`
pub fn store_schedule_expiry(store: &UiStore, id: u32, duration_ms: u32) {
    let store = *store;
    schedule_dismiss(duration_ms, move || store_with_toasts(&store, expire_toast(id)));
}

/// Show a toast now and remove it after `duration_ms`
pub fn store_push_toast(store: &UiStore, message: &str, kind: ToastKind, duration_ms: u32) -> u32 {
    let id = store_with_toasts(store, |q| q.push(message, kind));
    store_schedule_expiry(store, id, duration_ms);
    id
}

/// Remove a toast by ID (no-op if it already expired)
pub fn store_dismiss_toast(store: &UiStore, id: u32) {
    store_with_toasts(store, |q| q.dismiss(id));
}

/// Snapshot of visible toasts (tracked)
pub fn store_toasts(store: &UiStore) -> Vec<Toast> {
    store.toasts().read().toasts().to_vec()
}
