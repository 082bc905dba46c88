//! Storage - Synchronous string key-value persistence for the roster.
//!
//! This is the shape of browser local storage: string keys, string values,
//! blocking reads and writes. The roster only ever touches one key.
//!
//! ## Example
//!
//! ```ignore
//! use roster_store::{InMemoryKeyValueStore, KeyValueStore};
//!
//! let storage = InMemoryKeyValueStore::new();
//! storage.set_item("employees", "[]")?;
//! assert_eq!(storage.get_item("employees")?.as_deref(), Some("[]"));
//! ```

mod file;
mod in_memory;

use std::sync::Arc;

use thiserror::Error;

/// Error type for key-value store operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage lock poisoned during {0}")]
    LockPoisoned(&'static str),
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage serialization error: {0}")]
    Serde(String),
}

/// Abstract synchronous key-value storage.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`. Returns None if nothing is stored.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Returns true if it existed.
    fn remove_item(&self, key: &str) -> Result<bool, StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<bool, StorageError> {
        (**self).remove_item(key)
    }
}

pub use file::FileKeyValueStore;
pub use in_memory::InMemoryKeyValueStore;
