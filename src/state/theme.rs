//! Colour theme choice and its persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` resolves the initial theme once in the browser; the navbar toggle
//! switches it. Both go through `ThemeStore`, which writes to the same
//! `TokenStorage` backend as the session so tests can swap in memory storage.
//!
//! DESIGN
//! ======
//! An explicit saved choice beats the system `prefers-color-scheme` setting.
//! Server render always uses `Theme::Light`; the document attribute is only
//! touched after hydration.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::THEME_STORAGE_KEY;
use crate::state::session::{BrowserStorage, TokenStorage};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stored value and `data-theme` attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Navbar toggle glyph: the theme you would switch to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

/// Saved choice wins; otherwise follow the system preference.
pub fn resolve(saved: Option<Theme>, system_dark: bool) -> Theme {
    saved.unwrap_or(if system_dark { Theme::Dark } else { Theme::Light })
}

/// Persisted theme choice.
#[derive(Clone, Debug)]
pub struct ThemeStore<S = BrowserStorage> {
    storage: S,
}

impl Default for ThemeStore<BrowserStorage> {
    fn default() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: TokenStorage> ThemeStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Saved choice; unrecognised values count as no choice.
    pub fn load(&self) -> Option<Theme> {
        self.storage.load(THEME_STORAGE_KEY).as_deref().and_then(Theme::parse)
    }

    pub fn save(&self, theme: Theme) {
        self.storage.store(THEME_STORAGE_KEY, Some(theme.as_str()));
    }

    /// Theme to start with, given the system preference.
    pub fn initial(&self, system_dark: bool) -> Theme {
        resolve(self.load(), system_dark)
    }

    /// Flip `current`, persist, and apply it to the document.
    pub fn switch(&self, current: Theme) -> Theme {
        let next = current.toggled();
        self.save(next);
        apply_to_document(next);
        next
    }
}

/// `prefers-color-scheme: dark` in the browser; `false` elsewhere.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Set `data-theme` on `<html>`.
pub fn apply_to_document(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element());
        match root {
            Some(el) => {
                if el.set_attribute("data-theme", theme.as_str()).is_err() {
                    leptos::logging::warn!("failed to set data-theme");
                }
            }
            None => leptos::logging::warn!("theme: no document element"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
