//! Page Data & Configuration
//!
//! Everything the embedding page hands to the client lives on `window`
//! as plain JS values:
//!
//! - `__APP_CONFIG__`: client settings (`AppConfig`)
//! - `__RECIPE_DATA__`, `__SHOPPING_LIST_DATA__`, `__HAVE_ITEMS_DATA__`
//! - `__HAS_API_KEY__`, `__CELEBRATE__`, `__QUERY__`
//!
//! Missing globals are `None`; malformed ones are logged and treated as missing.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::{js_message, UiError, UiResult};
use crate::models::{sample_partition, sample_recipe, Recipe, ShoppingItem, ShoppingPartition};

/// Client-side settings with defaults for every field
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Toast auto-dismiss delay
    pub toast_duration_ms: u32,
    /// Delay before the result-page confetti fires
    pub confetti_delay_ms: u32,
    /// Show the built-in sample recipe when no recipe was injected
    pub demo_mode: bool,
    /// `log` level name: error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: leptos_toast::DEFAULT_DURATION_MS,
            confetti_delay_ms: 300,
            demo_mode: cfg!(debug_assertions),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

/// Render data injected by the server template
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageData {
    pub recipe: Option<Recipe>,
    pub shopping_list: Option<Vec<ShoppingItem>>,
    pub have_items: Option<Vec<ShoppingItem>>,
    pub has_api_key: bool,
    pub celebrate: bool,
    pub query: Option<String>,
}

/// What the result page actually renders
#[derive(Debug, Clone, PartialEq)]
pub struct ResultData {
    pub recipe: Recipe,
    pub partition: ShoppingPartition,
    pub is_sample: bool,
}

impl PageData {
    /// Pick the recipe to show. Sample data only in demo mode and only
    /// when no recipe was injected at all.
    pub fn resolve_result(&self, demo_mode: bool) -> Option<ResultData> {
        match &self.recipe {
            Some(recipe) => Some(ResultData {
                recipe: recipe.clone(),
                partition: ShoppingPartition {
                    shopping_list: self.shopping_list.clone().unwrap_or_default(),
                    have_items: self.have_items.clone().unwrap_or_default(),
                },
                is_sample: false,
            }),
            None if demo_mode => Some(ResultData {
                recipe: sample_recipe(),
                partition: sample_partition(),
                is_sample: true,
            }),
            None => None,
        }
    }
}

// ========================
// Window Globals
// ========================

fn read_global(name: &str) -> UiResult<JsValue> {
    let window = web_sys::window().ok_or(UiError::NoWindow)?;
    js_sys::Reflect::get(&window, &JsValue::from_str(name))
        .map_err(|e| UiError::Js(js_message(&e)))
}

/// Deserialize `window[name]`; `Ok(None)` when undefined or null
fn global<T: DeserializeOwned>(name: &str) -> UiResult<Option<T>> {
    let value = read_global(name)?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(value)
        .map(Some)
        .map_err(|e| UiError::Deserialize {
            name: name.to_string(),
            reason: e.to_string(),
        })
}

fn global_or_none<T: DeserializeOwned>(name: &str) -> Option<T> {
    match global(name) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("[CONFIG] ignoring {}: {}", name, e);
            None
        }
    }
}

/// Truthy-ish flag: accepts booleans, numbers and strings like "true"/"1"
fn global_flag(name: &str) -> bool {
    let Ok(value) = read_global(name) else {
        return false;
    };
    if let Some(b) = value.as_bool() {
        return b;
    }
    if let Some(n) = value.as_f64() {
        return n != 0.0;
    }
    value
        .as_string()
        .map(|s| is_truthy(&s))
        .unwrap_or(false)
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes" | "on")
}

pub fn load_config() -> AppConfig {
    global_or_none("__APP_CONFIG__").unwrap_or_default()
}

pub fn load_page_data() -> PageData {
    let data = PageData {
        recipe: global_or_none("__RECIPE_DATA__"),
        shopping_list: global_or_none("__SHOPPING_LIST_DATA__"),
        have_items: global_or_none("__HAVE_ITEMS_DATA__"),
        has_api_key: global_flag("__HAS_API_KEY__"),
        celebrate: global_flag("__CELEBRATE__"),
        query: global_or_none::<String>("__QUERY__").filter(|q| !q.trim().is_empty()),
    };
    log::debug!(
        "[CONFIG] recipe={} shopping={} have={} api_key={}",
        data.recipe.is_some(),
        data.shopping_list.as_ref().map_or(0, Vec::len),
        data.have_items.as_ref().map_or(0, Vec::len),
        data.has_api_key
    );
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_fill_missing_fields() {
        let config: AppConfig = serde_json::from_str(r#"{"toast_duration_ms": 1500}"#).unwrap();
        assert_eq!(config.toast_duration_ms, 1500);
        assert_eq!(config.confetti_delay_ms, 300);
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_default_toast_duration() {
        assert_eq!(AppConfig::default().toast_duration_ms, 3000);
    }

    #[test]
    fn test_bad_log_level_falls_back() {
        let config = AppConfig { log_level: "loud".to_string(), ..Default::default() };
        assert_eq!(config.log_level(), log::Level::Info);
        let config = AppConfig { log_level: "debug".to_string(), ..Default::default() };
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_truthy_strings() {
        assert!(is_truthy("True"));
        assert!(is_truthy("1"));
        assert!(!is_truthy(""));
        assert!(!is_truthy("false"));
    }

    #[test]
    fn test_resolve_uses_injected_recipe() {
        let recipe = Recipe { title: "Soup".to_string(), ..Default::default() };
        let page = PageData {
            recipe: Some(recipe.clone()),
            have_items: Some(vec![ShoppingItem::new("Salt", "", "")]),
            ..Default::default()
        };

        let resolved = page.resolve_result(true).unwrap();
        assert_eq!(resolved.recipe, recipe);
        assert!(!resolved.is_sample);
        assert!(resolved.partition.shopping_list.is_empty());
        assert_eq!(resolved.partition.have_items.len(), 1);
    }

    #[test]
    fn test_resolve_sample_only_in_demo_mode() {
        let page = PageData::default();

        let demo = page.resolve_result(true).unwrap();
        assert!(demo.is_sample);
        assert_eq!(demo.recipe.title, "Delicious Chicken Curry");

        assert_eq!(page.resolve_result(false), None);
    }
}
