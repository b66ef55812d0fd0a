//! Durable session-token store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only credential the client holds. `SessionStore` keeps an
//! in-memory copy and mirrors every change into a `TokenStorage` backend
//! (`localStorage` in the browser) so a reload resumes the session.
//!
//! TRADE-OFFS
//! ==========
//! Browser storage access is best-effort: when `localStorage` is unavailable
//! (private mode, SSR) the in-memory value still drives the session and the
//! write is dropped.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use crate::config::TOKEN_STORAGE_KEY;

/// Synchronous key/value backend for the session token.
pub trait TokenStorage {
    /// Read the stored value for `key`.
    fn load(&self, key: &str) -> Option<String>;
    /// Write `value` under `key`; `None` removes the entry.
    fn store(&self, key: &str, value: Option<&str>);
}

/// Browser `localStorage`. Reads return `None` and writes no-op outside
/// the hydrated client.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl TokenStorage for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn store(&self, key: &str, value: Option<&str>) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                leptos::logging::warn!("localStorage unavailable; session token not persisted");
                return;
            };
            let result = match value {
                Some(raw) => storage.set_item(key, raw),
                None => storage.remove_item(key),
            };
            if result.is_err() {
                leptos::logging::warn!("failed to write {key} to localStorage");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// Process-local storage shared between clones.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl TokenStorage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().ok()?;
        entries.get(key).cloned()
    }

    fn store(&self, key: &str, value: Option<&str>) {
        let Ok(mut entries) = self.entries.lock() else {
            return;
        };
        match value {
            Some(raw) => {
                entries.insert(key.to_owned(), raw.to_owned());
            }
            None => {
                entries.remove(key);
            }
        }
    }
}

/// Owner of the session token and its durable copy.
#[derive(Clone)]
pub struct SessionStore<S = BrowserStorage> {
    storage: S,
    token: Option<String>,
    loaded: bool,
}

impl<S: TokenStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage, token: None, loaded: false }
    }

    /// Current token, loading it from storage on first access.
    pub fn get(&mut self) -> Option<String> {
        if !self.loaded {
            self.token = self
                .storage
                .load(TOKEN_STORAGE_KEY)
                .filter(|token| !token.is_empty());
            self.loaded = true;
        }
        self.token.clone()
    }

    /// In-memory token without touching storage.
    pub fn current(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Replace the token in storage and memory. Empty strings count as `None`.
    pub fn set(&mut self, token: Option<String>) {
        let token = token.filter(|t| !t.is_empty());
        self.storage.store(TOKEN_STORAGE_KEY, token.as_deref());
        self.token = token;
        self.loaded = true;
    }

    pub fn clear(&mut self) {
        self.set(None);
    }
}

impl<S> fmt::Debug for SessionStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("loaded", &self.loaded)
            .finish_non_exhaustive()
    }
}
