//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle cannot read process environment at runtime, so the backend
//! base URL is baked in at compile time from `NILOTIC_API_BASE_URL` and falls
//! back to the local development API.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend used when `NILOTIC_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5500";

/// `localStorage` key holding the session token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// `localStorage` key holding the chosen colour theme.
pub const THEME_STORAGE_KEY: &str = "nilotic_theme";

/// Client settings shared through Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin without a trailing slash.
    pub api_base_url: String,
}

impl ClientConfig {
    /// Read the compile-time environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::with_base_url(option_env!("NILOTIC_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    #[must_use]
    pub fn with_base_url(raw: &str) -> Self {
        Self { api_base_url: normalize_base_url(raw) }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Trim whitespace and trailing slashes; blank input selects the default.
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Join a normalized base URL and an API path.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{base}/{}", path.trim_start_matches('/'))
}
