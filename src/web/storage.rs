//! LocalStorage wrapper.
//!
//! Thin layer over `web_sys::Storage` behind a `StorageBackend` trait so the
//! session store can run against an in-memory map in tests.

/// Durable string key-value storage.
///
/// `Send + Sync` so a store handle can live in reactive context; the browser
/// backend is a stateless marker and WASM is single-threaded anyway.
pub trait StorageBackend: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// Returns `true` when the write succeeded.
    fn set(&self, key: &str, value: &str) -> bool;

    /// Returns `true` when the delete succeeded. Deleting a missing key is
    /// still a success.
    fn remove(&self, key: &str) -> bool;
}

/// Browser `window.localStorage` backend.
///
/// A missing `window` or a storage access error degrades to `None`/`false`
/// rather than panicking.
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    fn remove(&self, key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}

/// In-memory backend for deterministic tests.
#[cfg(test)]
pub struct MemoryStorage {
    entries: std::sync::Mutex<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            entries: std::sync::Mutex::new(std::collections::HashMap::new()),
        }
    }
}

#[cfg(test)]
impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn remove(&self, key: &str) -> bool {
        self.entries.lock().unwrap().remove(key);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_backend_round_trip() {
        let store = MemoryStorage::new();
        assert_eq!(store.get("k"), None);

        assert!(store.set("k", "v"));
        assert_eq!(store.get("k"), Some("v".to_string()));

        assert!(store.set("k", "v2"));
        assert_eq!(store.get("k"), Some("v2".to_string()));

        assert!(store.remove("k"));
        assert_eq!(store.get("k"), None);
        // removing again is still fine
        assert!(store.remove("k"));
    }
}
