//! View Routing
//!
//! Picks the single top-level view from the page path. Evaluated once
//! at mount; in-page navigation is always a full page load.

/// Top-level views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Result,
    Home,
}

impl Route {
    /// Unmatched paths fall through to Home
    pub fn from_path(path: &str) -> Self {
        match path {
            "/login" => Route::Login,
            "/register" => Route::Register,
            p if p.starts_with("/generate") => Route::Result,
            _ => Route::Home,
        }
    }

    /// Route for the current `window.location.pathname`
    pub fn current() -> Self {
        let path = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        let route = Self::from_path(&path);
        log::debug!("[ROUTE] {} -> {:?}", path, route);
        route
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_matches() {
        assert_eq!(Route::from_path("/login"), Route::Login);
        assert_eq!(Route::from_path("/register"), Route::Register);
    }

    #[test]
    fn test_generate_prefix() {
        assert_eq!(Route::from_path("/generate"), Route::Result);
        assert_eq!(Route::from_path("/generate/anything"), Route::Result);
        assert_eq!(Route::from_path("/generated"), Route::Result);
    }

    #[test]
    fn test_fallback_home() {
        assert_eq!(Route::from_path("/anything-else"), Route::Home);
        assert_eq!(Route::from_path("/home"), Route::Home);
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        // exact match only, no trailing slash
        assert_eq!(Route::from_path("/login/"), Route::Home);
    }
}
