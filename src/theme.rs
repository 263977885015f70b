//! Theme State
//!
//! Light/dark mode resolution and persistence. Precedence on startup:
//! stored preference, then the system dark-mode query, then light.
//! The browser backend lives behind `ThemeStorage` so the rules can be
//! tested without a DOM.

use wasm_bindgen::JsCast;

use crate::error::{js_message, UiError, UiResult};

/// Key holding the persisted preference in local storage
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class toggled on `<html>` while dark mode is active
pub const DARK_CLASS: &str = "dark";

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Anything other than "dark" counts as an explicit light choice
    pub fn from_stored(value: &str) -> Self {
        if value == "dark" {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

/// Where the preference is read from and written to
pub trait ThemeStorage {
    fn load(&self) -> UiResult<Option<String>>;
    fn save(&self, value: &str) -> UiResult<()>;
    fn prefers_dark(&self) -> UiResult<bool>;
}

/// Effective mode on startup. Read failures degrade to light.
pub fn resolve_initial<S: ThemeStorage>(storage: &S) -> ThemeMode {
    match storage.load() {
        Ok(Some(value)) => ThemeMode::from_stored(&value),
        Ok(None) => match storage.prefers_dark() {
            Ok(true) => ThemeMode::Dark,
            Ok(false) => ThemeMode::Light,
            Err(e) => {
                log::debug!("[THEME] {}; using light", e);
                ThemeMode::Light
            }
        },
        Err(e) => {
            log::debug!("[THEME] {}; using light", e);
            ThemeMode::Light
        }
    }
}

/// Flip `current`, persist it, and return the new mode.
/// A failed write still flips the in-memory mode.
pub fn toggle<S: ThemeStorage>(storage: &S, current: ThemeMode) -> ThemeMode {
    let next = current.flipped();
    if let Err(e) = storage.save(next.as_str()) {
        log::debug!("[THEME] could not persist {}: {}", next.as_str(), e);
    }
    next
}

// ========================
// Browser Backend
// ========================

/// `localStorage` + `matchMedia`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserThemeStorage;

impl BrowserThemeStorage {
    fn storage(&self) -> UiResult<web_sys::Storage> {
        let window = web_sys::window().ok_or(UiError::NoWindow)?;
        window
            .local_storage()
            .map_err(|e| UiError::Storage(js_message(&e)))?
            .ok_or_else(|| UiError::Storage("localStorage is disabled".to_string()))
    }
}

impl ThemeStorage for BrowserThemeStorage {
    fn load(&self) -> UiResult<Option<String>> {
        self.storage()?
            .get_item(THEME_STORAGE_KEY)
            .map_err(|e| UiError::Storage(js_message(&e)))
    }

    fn save(&self, value: &str) -> UiResult<()> {
        self.storage()?
            .set_item(THEME_STORAGE_KEY, value)
            .map_err(|e| UiError::Storage(js_message(&e)))
    }

    fn prefers_dark(&self) -> UiResult<bool> {
        let window = web_sys::window().ok_or(UiError::NoWindow)?;
        let query = window
            .match_media(DARK_QUERY)
            .map_err(|e| UiError::MediaQuery(js_message(&e)))?;
        Ok(query.map(|q| q.matches()).unwrap_or(false))
    }
}

/// Set or clear the dark class on the document root
pub fn apply_to_document(mode: ThemeMode) -> UiResult<()> {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .ok_or(UiError::NoWindow)?;
    let html = root.unchecked_into::<web_sys::HtmlElement>();
    html.class_list().toggle_with_force(DARK_CLASS, mode.is_dark())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStorage {
        value: RefCell<Option<String>>,
        system_dark: bool,
        broken: bool,
    }

    impl MemoryStorage {
        fn with_system(system_dark: bool) -> Self {
            Self { system_dark, ..Default::default() }
        }

        fn with_stored(value: &str) -> Self {
            Self { value: RefCell::new(Some(value.to_string())), ..Default::default() }
        }
    }

    impl ThemeStorage for MemoryStorage {
        fn load(&self) -> UiResult<Option<String>> {
            if self.broken {
                return Err(UiError::Storage("blocked".to_string()));
            }
            Ok(self.value.borrow().clone())
        }

        fn save(&self, value: &str) -> UiResult<()> {
            if self.broken {
                return Err(UiError::Storage("blocked".to_string()));
            }
            *self.value.borrow_mut() = Some(value.to_string());
            Ok(())
        }

        fn prefers_dark(&self) -> UiResult<bool> {
            if self.broken {
                return Err(UiError::MediaQuery("blocked".to_string()));
            }
            Ok(self.system_dark)
        }
    }

    #[test]
    fn test_system_preference_without_stored_value() {
        assert_eq!(resolve_initial(&MemoryStorage::with_system(true)), ThemeMode::Dark);
        assert_eq!(resolve_initial(&MemoryStorage::with_system(false)), ThemeMode::Light);
    }

    #[test]
    fn test_stored_value_wins_over_system() {
        let storage = MemoryStorage {
            system_dark: true,
            ..MemoryStorage::with_stored("light")
        };
        assert_eq!(resolve_initial(&storage), ThemeMode::Light);
        assert_eq!(resolve_initial(&MemoryStorage::with_stored("dark")), ThemeMode::Dark);
    }

    #[test]
    fn test_unknown_stored_value_is_light() {
        let storage = MemoryStorage {
            system_dark: true,
            ..MemoryStorage::with_stored("purple")
        };
        assert_eq!(resolve_initial(&storage), ThemeMode::Light);
    }

    #[test]
    fn test_failures_fall_back_to_light() {
        let storage = MemoryStorage { system_dark: true, broken: true, ..Default::default() };
        assert_eq!(resolve_initial(&storage), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_persists_explicit_choice() {
        let storage = MemoryStorage::with_system(true);
        let initial = resolve_initial(&storage);
        let next = toggle(&storage, initial);

        assert_eq!(next, ThemeMode::Light);
        assert_eq!(storage.value.borrow().as_deref(), Some("light"));
        // explicit light now beats the dark system preference
        assert_eq!(resolve_initial(&storage), ThemeMode::Light);
    }

    #[test]
    fn test_double_toggle_round_trips() {
        let storage = MemoryStorage::with_stored("dark");
        let initial = resolve_initial(&storage);
        let once = toggle(&storage, initial);
        let twice = toggle(&storage, once);

        assert_eq!(twice, initial);
        assert_eq!(storage.value.borrow().as_deref(), Some("dark"));
    }

    #[test]
    fn test_toggle_flips_even_when_save_fails() {
        let storage = MemoryStorage { broken: true, ..Default::default() };
        assert_eq!(toggle(&storage, ThemeMode::Light), ThemeMode::Dark);
    }
}
