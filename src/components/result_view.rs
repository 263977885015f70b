//! Result View
//!
//! Renders the generated recipe, its shopping partition and the
//! copy / print / confetti actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_toast::ToastKind;

use super::{NavBar, ShoppingPanel, ThemeToggle};
use crate::commands::{self, ids};
use crate::config::ResultData;
use crate::context::{use_app_context, AppContext};

pub const PRINT_FAILED: &str = "Could not open the print dialog.";

/// Open the print dialog; a failure is reported as a danger toast
fn print_recipe(ctx: AppContext) {
    if let Err(e) = commands::print_page() {
        log::warn!("[RESULT] print failed: {}", e);
        ctx.toast(PRINT_FAILED, ToastKind::Danger);
    }
}

/// Copy a named element's text; only success is surfaced to the user
fn copy_to_clipboard(ctx: AppContext, id: &'static str) {
    spawn_local(async move {
        match commands::copy_element_text(id).await {
            Ok(()) => {
                ctx.toast("Copied!", ToastKind::Success);
            }
            Err(e) => log::warn!("[RESULT] copy from #{} failed: {}", id, e),
        }
    });
}

#[component]
pub fn ResultView() -> impl IntoView {
    let ctx = use_app_context();
    let demo_mode = ctx.config.with_value(|c| c.demo_mode);
    let resolved = ctx.page.with_value(|p| p.resolve_result(demo_mode));

    let body = match resolved {
        Some(data) => {
            let (celebrate, delay) = (
                ctx.page.with_value(|p| p.celebrate),
                ctx.config.with_value(|c| c.confetti_delay_ms),
            );
            if celebrate {
                commands::celebrate_after(delay);
            }
            view! { <RecipeDetails data=data celebrate=celebrate /> }.into_any()
        }
        None => {
            log::warn!("[RESULT] no recipe data injected and demo mode is off");
            view! {
                <div class="notification is-warning has-text-centered">
                    <p>"No recipe to show yet."</p>
                    <a href="/home">"Generate one"</a>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <div class="result-layout">
            <ThemeToggle />
            <NavBar brand_href="/home" />
            <main class="section container">
                {body}
                <div class="has-text-centered mt-6">
                    <a href="/home">"← Generate Another"</a>
                </div>
            </main>
        </div>
    }
}

#[component]
fn RecipeDetails(data: ResultData, celebrate: bool) -> impl IntoView {
    let ctx = use_app_context();
    let query = ctx.page.with_value(|p| p.query.clone());

    let ResultData { recipe, partition, is_sample } = data;
    let full_text = recipe.to_plain_text();
    let shopping_text = partition.shopping_list_text();
    let ingredient_lines = recipe.ingredient_lines();
    let steps = recipe.steps.clone();

    let meta = recipe
        .meta_entries()
        .into_iter()
        .map(|(label, value)| view! { <span class="tag is-light mr-2">{label} ": " {value}</span> })
        .collect_view();
    let tips_section = (!recipe.tips.is_empty()).then(|| {
        let tips = recipe.tips.clone();
        view! {
            <h3 class="title is-5 mt-5">"Tips"</h3>
            <ul class="tip-list">
                {tips.into_iter().map(|tip| view! { <li>{tip}</li> }).collect_view()}
            </ul>
        }
    });
    let nutrition = recipe.nutrition.as_ref().and_then(|n| n.summary_line());

    view! {
        <div id=ids::RESULT_PAGE data-celebrate=celebrate.to_string()>
            <Show when=move || is_sample>
                <div class="notification is-info is-light">"Preview: showing a sample recipe."</div>
            </Show>

            <div class="has-text-centered mb-6">
                <h2 class="title is-3">{recipe.title.clone()}</h2>
                <p class="subtitle is-6">{recipe.description.clone()}</p>
                <div>{meta}</div>
            </div>

            <div class="columns">
                <div class="column is-two-thirds">
                    <h3 class="title is-4">"Ingredients"</h3>
                    <ul class="ingredient-list">
                        {ingredient_lines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                    </ul>

                    <h3 class="title is-4 mt-5">"Instructions"</h3>
                    <ol class="instruction-list">
                        {steps.into_iter().map(|step| view! { <li>{step}</li> }).collect_view()}
                    </ol>

                    {tips_section}
                    {nutrition.map(|line| view! {
                        <p class="has-text-grey mt-4">"Nutrition (per serving): " {line}</p>
                    })}
                </div>
                <div class="column">
                    <ShoppingPanel
                        shopping_list=partition.shopping_list
                        have_items=partition.have_items
                    />
                </div>
            </div>

            <div class="buttons is-centered mt-5">
                <button type="button" class="button" on:click=move |_| copy_to_clipboard(ctx, ids::FULL_RECIPE_TEXT)>
                    "Copy recipe"
                </button>
                <button type="button" class="button" on:click=move |_| copy_to_clipboard(ctx, ids::SHOPPING_LIST_TEXT)>
                    "Copy shopping list"
                </button>
                <button
                    type="button"
                    class="button"
                    on:click=move |_| print_recipe(ctx)
                >
                    "Print"
                </button>
            </div>

            // Clipboard sources
            <textarea id=ids::FULL_RECIPE_TEXT class="is-hidden" readonly=true prop:value=full_text></textarea>
            <textarea id=ids::SHOPPING_LIST_TEXT class="is-hidden" readonly=true prop:value=shopping_text></textarea>

            {query.map(|q| view! {
                <p class="has-text-grey is-size-7 mt-4">"Generated based on your query: " <em>{q}</em></p>
            })}
        </div>
    }
}
