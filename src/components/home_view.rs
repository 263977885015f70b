//! Home View
//!
//! Recipe request form posting to `/generate`. The only client-side
//! interception is the empty-request guard.

use leptos::prelude::*;
use leptos_toast::{ToastKind, ToastQueue};

use super::{NavBar, ThemeToggle};
use crate::commands::ids;
use crate::context::use_app_context;
use crate::store::{store_with_toasts, use_ui_store};

pub const EMPTY_REQUEST_WARNING: &str = "Please enter either a recipe request or available ingredients!";

/// Outcome of the pre-submit check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Let the native form post go through
    Proceed,
    /// Cancel the post; `warning` is the toast that was shown
    Blocked { warning: u32 },
}

impl SubmitOutcome {
    pub fn cancels_submit(self) -> bool {
        matches!(self, SubmitOutcome::Blocked { .. })
    }

    /// Whether the submit control switches to its "generating" state
    pub fn starts_generating(self) -> bool {
        self == SubmitOutcome::Proceed
    }
}

/// Blank prompt and blank ingredients: warn once and block.
/// Anything else proceeds and leaves the queue alone.
pub fn guard_submit(prompt: &str, ingredients: &str, toasts: &mut ToastQueue) -> SubmitOutcome {
    if prompt.trim().is_empty() && ingredients.trim().is_empty() {
        let warning = toasts.push(EMPTY_REQUEST_WARNING, ToastKind::Warning);
        SubmitOutcome::Blocked { warning }
    } else {
        SubmitOutcome::Proceed
    }
}

/// Submit button label and disabled flag
pub fn submit_button_state(generating: bool) -> (&'static str, bool) {
    if generating {
        ("Generating...", true)
    } else {
        ("Generate Recipe", false)
    }
}

#[component]
pub fn HomeView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();
    let has_api_key = ctx.page.with_value(|p| p.has_api_key);

    let (prompt, set_prompt) = signal(String::new());
    let (ingredients, set_ingredients) = signal(String::new());
    let (generating, set_generating) = signal(false);

    // Blocked: cancel + warn. Allowed: leave the native submit alone.
    let on_submit = move |ev: web_sys::SubmitEvent| {
        let (p, i) = (prompt.get_untracked(), ingredients.get_untracked());
        let outcome = store_with_toasts(&store, |toasts| guard_submit(&p, &i, toasts));
        if let SubmitOutcome::Blocked { warning } = outcome {
            ev.prevent_default();
            ctx.expire_later(warning);
        } else {
            log::info!("[HOME] submitting recipe request");
        }
        set_generating.set(outcome.starts_generating());
    };

    view! {
        <div class="home-page">
            <ThemeToggle />
            <NavBar />
            <main class="section container">
                <Show when=move || !has_api_key>
                    <div class="notification is-danger" role="alert">
                        <strong>"Warning: "</strong>
                        "Missing " <code>"GOOGLE_API_KEY"</code> ". Recipe generation will not work."
                    </div>
                </Show>

                <div class="has-text-centered mb-6">
                    <h2 class="title is-3">"Create a new recipe"</h2>
                    <p class="subtitle is-6">"Enter a prompt and some ingredients to generate a new recipe."</p>
                </div>

                <form action="/generate" method="POST" on:submit=on_submit>
                    <div class="field">
                        <label class="label" for=ids::RECIPE_PROMPT>"Recipe Prompt"</label>
                        <div class="control">
                            <input
                                class="input"
                                type="text"
                                id=ids::RECIPE_PROMPT
                                name="recipe_prompt"
                                placeholder="e.g., a healthy chicken dish"
                                prop:value=prompt
                                on:input=move |ev| set_prompt.set(event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <div class="field">
                        <label class="label" for=ids::AVAILABLE_INGREDIENTS>"Available Ingredients"</label>
                        <div class="control">
                            <textarea
                                class="textarea"
                                id=ids::AVAILABLE_INGREDIENTS
                                name="available_ingredients"
                                rows="4"
                                placeholder="e.g., chicken breast, rice, broccoli"
                                prop:value=ingredients
                                on:input=move |ev| set_ingredients.set(event_target_value(&ev))
                            ></textarea>
                        </div>
                    </div>
                    <div class="columns">
                        <div class="column field">
                            <label class="label" for="servings">"Servings"</label>
                            <input class="input" type="text" id="servings" name="servings" placeholder="e.g., 4" />
                        </div>
                        <div class="column field">
                            <label class="label" for="cuisine">"Cuisine"</label>
                            <input class="input" type="text" id="cuisine" name="cuisine" placeholder="e.g., Italian" />
                        </div>
                        <div class="column field">
                            <label class="label" for="time_pref">"Time Preference"</label>
                            <input class="input" type="text" id="time_pref" name="time_pref" placeholder="e.g., 30 minutes" />
                        </div>
                    </div>
                    <button
                        type="submit"
                        id=ids::GENERATE_BUTTON
                        class=move || if generating.get() { "button is-primary is-fullwidth is-loading" } else { "button is-primary is-fullwidth" }
                        disabled=move || submit_button_state(generating.get()).1
                    >
                        {move || submit_button_state(generating.get()).0}
                    </button>
                </form>
            </main>

            <div
                id=ids::LOADING_OVERLAY
                class=move || if generating.get() { "loading-overlay" } else { "loading-overlay is-hidden" }
            >
                <p class="loading-text">"Cooking up your recipe..."</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_request_blocked_with_one_warning() {
        let mut toasts = ToastQueue::new();
        let outcome = guard_submit("", "", &mut toasts);

        assert!(outcome.cancels_submit());
        assert!(!outcome.starts_generating());
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.toasts()[0].kind, ToastKind::Warning);
        assert_eq!(toasts.toasts()[0].message, EMPTY_REQUEST_WARNING);
        assert_eq!(outcome, SubmitOutcome::Blocked { warning: toasts.toasts()[0].id });
    }

    #[test]
    fn test_whitespace_counts_as_blank() {
        let mut toasts = ToastQueue::new();
        assert!(guard_submit("   ", "\n\t", &mut toasts).cancels_submit());
        assert_eq!(toasts.len(), 1);
    }

    #[test]
    fn test_each_blocked_submit_warns_separately() {
        let mut toasts = ToastQueue::new();
        guard_submit("", "", &mut toasts);
        guard_submit("", "", &mut toasts);
        assert_eq!(toasts.len(), 2);
    }

    #[test]
    fn test_either_field_proceeds_without_toast() {
        for (prompt, ingredients) in [("pasta", ""), ("", "eggs, flour"), ("soup", "leeks")] {
            let mut toasts = ToastQueue::new();
            let outcome = guard_submit(prompt, ingredients, &mut toasts);
            assert_eq!(outcome, SubmitOutcome::Proceed);
            assert!(!outcome.cancels_submit());
            assert!(outcome.starts_generating());
            assert!(toasts.is_empty());
        }
    }

    #[test]
    fn test_submit_button_disabled_while_generating() {
        assert_eq!(submit_button_state(false), ("Generate Recipe", false));
        assert_eq!(submit_button_state(true), ("Generating...", true));
    }
}
