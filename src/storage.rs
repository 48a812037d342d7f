//! Durable key-value slot holding the theme preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build persists to `localStorage`; host tests substitute
//! [`MemoryStore`]. Storage is best-effort: when it is disabled or a call is
//! rejected, reads return nothing and writes are dropped after a warning, so
//! the theme still flips for the current page view.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

use crate::theme::ThemePreference;

/// Origin-scoped string slot store.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn remove(&mut self, key: &str) {
        (**self).remove(key);
    }
}

/// Read the preference under `key`, defaulting to light when absent.
pub fn load_preference<S: PreferenceStore + ?Sized>(store: &S, key: &str) -> ThemePreference {
    ThemePreference::from_stored(store.get(key).as_deref())
}

/// Persist `preference` under `key`. Light clears the slot.
pub fn save_preference<S: PreferenceStore + ?Sized>(
    store: &mut S,
    key: &str,
    preference: ThemePreference,
) {
    match preference.stored_value() {
        Some(value) => store.set(key, value),
        None => store.remove(key),
    }
}

/// In-memory store for tests and non-browser hosts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style seed, e.g. a value left by an earlier page load.
    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// `window.localStorage`, or nothing when the browser denies access.
#[cfg(feature = "browser")]
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

#[cfg(feature = "browser")]
impl LocalStorage {
    pub fn from_window(window: &web_sys::Window) -> Self {
        let storage = match window.local_storage() {
            Ok(Some(storage)) => Some(storage),
            Ok(None) => {
                log::warn!("localStorage unavailable; theme preference will not persist");
                None
            }
            Err(err) => {
                log::warn!("localStorage access denied: {err:?}; theme preference will not persist");
                None
            }
        };
        Self { storage }
    }

    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }
}

#[cfg(feature = "browser")]
impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("localStorage read of {key} failed: {err:?}");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("localStorage write of {key} failed: {err:?}");
        }
    }

    fn remove(&mut self, key: &str) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        if let Err(err) = storage.remove_item(key) {
            log::warn!("localStorage remove of {key} failed: {err:?}");
        }
    }
}
