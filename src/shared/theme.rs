//! Theme persistence
//!
//! The chosen theme lives in durable client storage under `"theme"` and is
//! mirrored onto the document root as the `dark` class.

use crate::domain::models::Theme;
use crate::shared::logging::log_theme_applied;

/// Storage key holding "light" or "dark"
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class toggled on the document root in dark mode
pub const DARK_CLASS: &str = "dark";

/// Platform services the theme store needs
pub trait ThemeEnvironment {
    /// Persisted raw value, if any
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
    /// Platform color-scheme preference, `None` when unavailable
    fn prefers_dark(&self) -> Option<bool>;
    /// Add or remove the dark class on the document root
    fn set_dark_class(&self, dark: bool);
}

/// Persisted theme, else platform preference, else light.
/// Unknown persisted values are ignored.
pub fn get_initial_theme(env: &impl ThemeEnvironment) -> Theme {
    if let Some(theme) = env.load().and_then(|saved| saved.parse::<Theme>().ok()) {
        return theme;
    }
    env.prefers_dark()
        .map(Theme::system_default)
        .unwrap_or_default()
}

/// Mirror the theme onto the document root and persist it. Idempotent.
pub fn apply_theme(env: &impl ThemeEnvironment, theme: Theme) {
    env.set_dark_class(theme.is_dark());
    env.save(theme.as_str());
    log_theme_applied(theme.as_str());
}

/// Browser localStorage + `prefers-color-scheme` + `<html class>`
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserThemeEnvironment;

#[cfg(target_arch = "wasm32")]
impl BrowserThemeEnvironment {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(target_arch = "wasm32")]
impl ThemeEnvironment for BrowserThemeEnvironment {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(THEME_STORAGE_KEY).ok()?
    }

    fn save(&self, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(THEME_STORAGE_KEY, value);
        }
    }

    fn prefers_dark(&self) -> Option<bool> {
        web_sys::window()?
            .match_media("(prefers-color-scheme: dark)")
            .ok()?
            .map(|query| query.matches())
    }

    fn set_dark_class(&self, dark: bool) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let classes = root.class_list();
        let _ = if dark {
            classes.add_1(DARK_CLASS)
        } else {
            classes.remove_1(DARK_CLASS)
        };
    }
}

/// Desktop shell: theme kept for the session, root class set through eval.
/// No platform preference is reported, so a fresh session starts light.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct SessionThemeEnvironment {
    saved: std::cell::RefCell<Option<String>>,
}

#[cfg(not(target_arch = "wasm32"))]
impl ThemeEnvironment for SessionThemeEnvironment {
    fn load(&self) -> Option<String> {
        self.saved.borrow().clone()
    }

    fn save(&self, value: &str) {
        *self.saved.borrow_mut() = Some(value.to_string());
    }

    fn prefers_dark(&self) -> Option<bool> {
        None
    }

    fn set_dark_class(&self, dark: bool) {
        let method = if dark { "add" } else { "remove" };
        let script = format!("document.documentElement.classList.{method}('{DARK_CLASS}');");
        let _ = dioxus::document::eval(&script);
    }
}

#[cfg(target_arch = "wasm32")]
pub type PlatformThemeEnvironment = BrowserThemeEnvironment;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformThemeEnvironment = SessionThemeEnvironment;
