//! Browser localStorage backend

use crate::BlobStore;

/// Blob store backed by the browser's `window.localStorage`.
///
/// Quota errors and detached storage degrade to dropped writes; the store
/// boundary has no error surface for them.
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStorage {
    /// Bind to the current window's localStorage, if available
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage }
    }
}

impl BlobStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage
            .as_ref()
            .and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.remove_item(key);
        }
    }
}
