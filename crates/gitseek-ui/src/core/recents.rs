//! Most-recent-first list of confirmed usernames.
//!
//! # Design
//! - Entries are unique by exact (case-sensitive) match and capped.
//! - Persistence always writes the full list as a JSON array of strings.
//! - Corrupt stored data loads as an empty list plus a warning for the host
//!   to log; it never fails the widget.

use crate::core::storage::{KeyValueStore, StorageError};
use thiserror::Error;

/// Default number of remembered searches.
pub const DEFAULT_RECENTS_CAPACITY: usize = 5;

/// Capped, deduplicated recency list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecentSearches {
    entries: Vec<String>,
    capacity: usize,
}

impl Default for RecentSearches {
    fn default() -> Self {
        Self::new(DEFAULT_RECENTS_CAPACITY)
    }
}

impl RecentSearches {
    /// Empty list holding at most `capacity` entries.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Build a list from previously stored entries.
    ///
    /// Blank entries are dropped, later duplicates lose to earlier ones and
    /// the result is truncated to `capacity`.
    #[must_use]
    pub fn from_entries<I>(entries: I, capacity: usize) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut list = Self::new(capacity);
        for entry in entries {
            if list.entries.len() >= capacity {
                break;
            }
            let entry = entry.trim();
            if entry.is_empty() || list.contains(entry) {
                continue;
            }
            list.entries.push(entry.to_string());
        }
        list
    }

    /// Move `login` to the front, removing any earlier occurrence.
    pub fn promote(&mut self, login: &str) {
        self.entries.retain(|entry| entry != login);
        self.entries.insert(0, login.to_string());
        self.entries.truncate(self.capacity);
    }

    /// Forget every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries, most recent first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Whether `login` is remembered.
    #[must_use]
    pub fn contains(&self, login: &str) -> bool {
        self.entries.iter().any(|entry| entry == login)
    }

    /// Whether nothing is remembered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Stored recents that could not be read back.
#[derive(Debug, Error)]
pub enum RecentsDecodeError {
    /// The stored value is not a JSON array of strings.
    #[error("stored recents are not a JSON string array: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Decode a stored value; a missing value is an empty list.
///
/// # Errors
/// Returns [`RecentsDecodeError::Malformed`] when the value is not a JSON
/// array of strings.
pub fn decode_recents(raw: Option<&str>) -> Result<Vec<String>, RecentsDecodeError> {
    match raw {
        None => Ok(Vec::new()),
        Some(raw) => Ok(serde_json::from_str::<Vec<String>>(raw)?),
    }
}

/// Encode entries for storage as a JSON string array.
///
/// # Errors
/// Propagates the serializer error.
pub fn encode_recents(entries: &[String]) -> Result<String, serde_json::Error> {
    serde_json::to_string(entries)
}

/// Result of loading recents at widget start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedRecents {
    /// Normalized entries (possibly empty).
    pub entries: RecentSearches,
    /// Why stored data was discarded, for the host to log.
    pub warning: Option<String>,
}

/// Reads and writes the recents list under one storage key.
#[derive(Debug)]
pub struct RecentsRepository<S> {
    store: S,
    key: String,
    capacity: usize,
}

impl<S: KeyValueStore> RecentsRepository<S> {
    /// Bind a repository to `key` in `store`.
    pub fn new(store: S, key: impl Into<String>, capacity: usize) -> Self {
        Self {
            store,
            key: key.into(),
            capacity,
        }
    }

    /// Storage key in use.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load recents, degrading to an empty list on any failure.
    #[must_use]
    pub fn load(&self) -> LoadedRecents {
        let raw = match self.store.read(&self.key) {
            Ok(raw) => raw,
            Err(err) => {
                return LoadedRecents {
                    entries: RecentSearches::new(self.capacity),
                    warning: Some(err.to_string()),
                };
            }
        };
        match decode_recents(raw.as_deref()) {
            Ok(entries) => LoadedRecents {
                entries: RecentSearches::from_entries(entries, self.capacity),
                warning: None,
            },
            Err(err) => LoadedRecents {
                entries: RecentSearches::new(self.capacity),
                warning: Some(err.to_string()),
            },
        }
    }

    /// Write the full list.
    ///
    /// # Errors
    /// Returns [`StorageError::Encode`] when the list cannot be serialized
    /// and otherwise propagates the backend's [`StorageError`].
    pub fn save(&self, entries: &[String]) -> Result<(), StorageError> {
        let raw = encode_recents(entries).map_err(|err| StorageError::Encode {
            key: self.key.clone(),
            detail: err.to_string(),
        })?;
        self.store.write(&self.key, &raw)
    }
}
