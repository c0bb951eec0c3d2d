//! Key-value persistence seam.
//!
//! # Design
//! - Keep the widget independent of `window.localStorage` so tests inject
//!   an in-memory store.
//! - Values are opaque strings; encoding lives with the data that owns it.

use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

/// Failure raised while persisting a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The backend is missing (private browsing, disabled storage).
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    /// The value could not be serialized for storage.
    #[error("could not encode value for `{key}`: {detail}")]
    Encode {
        /// Key being written.
        key: String,
        /// Serializer detail.
        detail: String,
    },
    /// The backend rejected the write (quota, security policy).
    #[error("storage write for `{key}` rejected: {detail}")]
    WriteRejected {
        /// Key being written.
        key: String,
        /// Backend-provided detail.
        detail: String,
    },
}

/// Minimal string key-value store.
pub trait KeyValueStore {
    /// Read the raw value for `key`.
    ///
    /// # Errors
    /// Returns [`StorageError`] when the backend cannot be queried.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value for `key`.
    ///
    /// # Errors
    /// Returns [`StorageError`] when the backend rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Process-local store used in tests and when browser storage is unavailable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyValueStore, MemoryStore, StorageError};

    #[test]
    fn memory_store_overwrites_values() -> Result<(), StorageError> {
        let store = MemoryStore::new();
        assert_eq!(store.read("k")?, None);
        store.write("k", "v")?;
        assert_eq!(store.read("k")?.as_deref(), Some("v"));
        store.write("k", "[]")?;
        assert_eq!(store.read("k")?.as_deref(), Some("[]"));
        assert_eq!(store.read("other")?, None);
        Ok(())
    }

    #[test]
    fn boxed_stores_delegate() -> Result<(), StorageError> {
        let store: Box<dyn KeyValueStore> = Box::new(MemoryStore::with_entry("k", "v"));
        assert_eq!(store.read("k")?.as_deref(), Some("v"));
        store.write("k", "w")?;
        assert_eq!(store.read("k")?.as_deref(), Some("w"));
        Ok(())
    }

    #[test]
    fn error_messages_name_the_key() {
        let err = StorageError::WriteRejected {
            key: "recentUsers".into(),
            detail: "QuotaExceededError".into(),
        };
        assert!(err.to_string().contains("recentUsers"));
    }
}
