//! Local key-value blob store boundary for WebOS
//!
//! Persistent state is a flat set of string blobs with last-write-wins
//! semantics per key; there are no transactions and no durability
//! guarantees beyond what the backing store provides. Every consumer reads
//! its whole blob, mutates in memory, and writes the whole blob back.

mod memory;

pub mod keys;

#[cfg(feature = "wasm")]
mod local_storage;

pub use memory::MemoryStore;

#[cfg(feature = "wasm")]
pub use local_storage::LocalStorage;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A flat string-blob store, last-write-wins per key.
pub trait BlobStore {
    /// Read the blob at a key
    fn get(&self, key: &str) -> Option<String>;

    /// Write the blob at a key, replacing any previous value
    fn set(&self, key: &str, value: &str);

    /// Remove a key
    fn remove(&self, key: &str);
}

/// JSON helpers over any blob store.
pub trait BlobStoreExt: BlobStore {
    /// Read and deserialize the blob at a key. Missing keys and malformed
    /// blobs both yield `None`; a corrupt blob is indistinguishable from
    /// an absent one, as with the original localStorage scheme.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get(key)
            .and_then(|blob| serde_json::from_str(&blob).ok())
    }

    /// Serialize and write a value at a key. Values that fail to serialize
    /// leave the previous blob in place.
    fn set_json<T: Serialize>(&self, key: &str, value: &T) {
        if let Ok(blob) = serde_json::to_string(value) {
            self.set(key, &blob);
        }
    }
}

impl<S: BlobStore + ?Sized> BlobStoreExt for S {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let store = MemoryStore::new();
        store.set_json("k", &vec![1u32, 2, 3]);

        let back: Vec<u32> = store.get_json("k").unwrap();
        assert_eq!(back, vec![1, 2, 3]);
    }

    #[test]
    fn test_malformed_blob_reads_as_absent() {
        let store = MemoryStore::new();
        store.set("k", "{not json");

        let back: Option<Vec<u32>> = store.get_json("k");
        assert!(back.is_none());
    }

    #[test]
    fn test_last_write_wins() {
        let store = MemoryStore::new();
        store.set("k", "first");
        store.set("k", "second");
        assert_eq!(store.get("k").as_deref(), Some("second"));

        store.remove("k");
        assert!(store.get("k").is_none());
    }
}
