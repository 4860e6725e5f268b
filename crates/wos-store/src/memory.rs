//! In-memory store implementation for testing

use core::cell::RefCell;
use std::collections::BTreeMap;

use crate::BlobStore;

/// In-memory blob store; does not persist data.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.blobs.borrow().len()
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.blobs.borrow().is_empty()
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.blobs.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.blobs.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_basics() {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        store.set("a", "1");
        store.set("b", "2");
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("a").as_deref(), Some("1"));
        assert!(store.get("c").is_none());
    }
}
