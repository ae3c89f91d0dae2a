//! Key-Value Storage Capability
//!
//! Thin abstraction over the browser's `localStorage` so the persistence
//! layer can be exercised against an in-memory store in tests.

/// A write was rejected by the underlying store (quota, disabled storage).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError(pub String);

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "storage write failed: {}", self.0)
    }
}

impl std::error::Error for StoreError {}

/// String key-value store capability
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str);
}

/// `localStorage`-backed store. Absent storage (disabled in the browser)
/// degrades to a store where every read misses and every write fails.
#[derive(Clone)]
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage }
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        match &self.storage {
            Some(storage) => storage
                .set_item(key, value)
                .map_err(|e| StoreError(format!("{:?}", e))),
            None => Err(StoreError("localStorage unavailable".to_string())),
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.remove_item(key);
        }
    }
}
