//! Best-effort durable client storage.
//!
//! Every failure mode (no window, storage disabled, quota, corrupt payload)
//! degrades silently to the in-memory default of whichever consumer asked.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;

/// Keys owned by exactly one component each.
pub mod keys {
    pub const THEME: &str = "theme";
    pub const SIDEBAR_HIDDEN: &str = "sidebar-hidden";
    pub const SIDEBAR_DROPDOWN_STATES: &str = "sidebar-dropdown-states";
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// `window.localStorage` backed store.
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        web_sys::window()?
            .local_storage()
            .ok()
            .flatten()?
            .get_item(key)
            .ok()
            .flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            leptos::logging::warn!("local storage write failed for key `{key}`");
        }
    }
}

/// In-memory store for environments without durable storage, and for tests.
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// Read and deserialize a JSON value; absent or corrupt entries are `None`.
pub fn get_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    serde_json::from_str(&raw).ok()
}

pub fn set_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) {
    if let Ok(raw) = serde_json::to_string(value) {
        store.set(key, &raw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trips_through_the_store() {
        let store = MemoryStore::default();
        set_json(&store, keys::SIDEBAR_HIDDEN, &true);
        assert_eq!(get_json::<bool>(&store, keys::SIDEBAR_HIDDEN), Some(true));
    }

    #[test]
    fn corrupt_payload_reads_as_absent() {
        let store = MemoryStore::default();
        store.set(keys::SIDEBAR_DROPDOWN_STATES, "not json {{");
        assert_eq!(
            get_json::<Vec<String>>(&store, keys::SIDEBAR_DROPDOWN_STATES),
            None
        );
    }

    #[test]
    fn missing_key_reads_as_absent() {
        let store = MemoryStore::default();
        assert_eq!(get_json::<bool>(&store, keys::SIDEBAR_HIDDEN), None);
    }
}
