//! Browser Command Wrappers
//!
//! Thin bindings to browser side effects, organized by concern.
//! None of them share state.

mod clipboard;
mod confetti;
mod window;

pub use clipboard::*;
pub use confetti::*;
pub use window::*;

/// Named elements that event handlers read from
pub mod ids {
    pub const RECIPE_PROMPT: &str = "recipe_prompt";
    pub const AVAILABLE_INGREDIENTS: &str = "available_ingredients";
    pub const GENERATE_BUTTON: &str = "generate-btn";
    pub const LOADING_OVERLAY: &str = "loading-overlay";
    pub const FULL_RECIPE_TEXT: &str = "full-recipe-text";
    pub const SHOPPING_LIST_TEXT: &str = "shopping-list-text";
    pub const RESULT_PAGE: &str = "result-page";
    pub const NAV_MENU: &str = "nav-menu";
}
