//! Persistence module for state serialization
//!
//! Provides snapshot export/import for desktop state. Hosts may serialize a
//! snapshot into the local store keyed by user id and rehydrate at startup;
//! the desktop itself works purely in memory.

mod snapshot;

pub use snapshot::{PersistedWindow, Snapshot};
