//! Leptos Toast Utilities
//!
//! Stacked, self-dismissing notifications for Leptos.
//! The queue is plain data so it can live in a signal or a store field;
//! every toast owns its own timer, which runs the closure from
//! `expire_toast` against whatever holds the queue.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Auto-dismiss delay when the caller does not configure one
pub const DEFAULT_DURATION_MS: u32 = 3000;

/// Visual variant, mapped onto notification CSS classes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Warning,
    Danger,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "notification is-success",
            ToastKind::Warning => "notification is-warning",
            ToastKind::Danger => "notification is-danger",
        }
    }
}

/// A single notification
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub kind: ToastKind,
}

/// Ordered toast stack, oldest first
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u32,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a toast and return its id
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u32 {
        self.next_id = self.next_id.wrapping_add(1);
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
        });
        id
    }

    /// Remove a toast by id. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u32) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn contains(&self, id: u32) -> bool {
        self.toasts.iter().any(|t| t.id == id)
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Expiry action for toast `id`, run by its timer
pub fn expire_toast(id: u32) -> impl FnOnce(&mut ToastQueue) + 'static {
    move |queue| {
        queue.dismiss(id);
    }
}

/// Run `on_expire` once after `duration_ms`.
/// The timer is detached; nothing cancels it.
pub fn schedule_dismiss<F>(duration_ms: u32, on_expire: F)
where
    F: FnOnce() + 'static,
{
    Timeout::new(duration_ms, on_expire).forget();
}

/// Fixed-position stack rendering every toast in `toasts`
///
/// Clicking a toast's close button calls `on_dismiss` with its id.
#[component]
pub fn ToastHost(
    #[prop(into)] toasts: Signal<Vec<Toast>>,
    #[prop(into)] on_dismiss: Callback<u32>,
) -> impl IntoView {
    view! {
        <div
            class="toast-host"
            style="position: fixed; right: 1rem; bottom: 1rem; z-index: 9999; display: flex; flex-direction: column; gap: 0.5rem;"
        >
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast.kind.css_class()
                            role="status"
                            style="min-width: 300px; border-radius: 12px;"
                        >
                            <button class="delete" on:click=move |_| on_dismiss.run(id)></button>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
