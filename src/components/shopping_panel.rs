//! Shopping Panel Component
//!
//! Items to buy (unchecked) and items already on hand (checked, disabled).

use leptos::prelude::*;

use crate::models::ShoppingItem;

#[component]
pub fn ShoppingPanel(shopping_list: Vec<ShoppingItem>, have_items: Vec<ShoppingItem>) -> impl IntoView {
    view! {
        <div class="box shopping-panel">
            <h3 class="title is-5">"Shopping List"</h3>
            <ul class="shopping-list">
                {shopping_list.into_iter().map(|item| view! {
                    <li>
                        <label class="checkbox">
                            <input type="checkbox" />
                            " " {item.display_line()}
                        </label>
                    </li>
                }).collect_view()}
            </ul>

            <h3 class="title is-5 mt-5">"You Have"</h3>
            <ul class="have-items">
                {have_items.into_iter().map(|item| view! {
                    <li class="has-text-grey" style="text-decoration: line-through;">
                        <label class="checkbox">
                            <input type="checkbox" checked=true disabled=true />
                            " " {item.display_line()}
                        </label>
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}
