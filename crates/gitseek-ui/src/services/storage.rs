//! `window.localStorage` adapter.

use crate::core::storage::{KeyValueStore, StorageError};
use gloo::storage::{LocalStorage, Storage};

/// Store backed by the page's local storage.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserStore;

impl BrowserStore {
    /// Probe whether local storage can be used on this page.
    pub(crate) fn probe() -> Result<Self, StorageError> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".into()))?;
        match window.local_storage() {
            Ok(Some(_)) => Ok(Self),
            Ok(None) => Err(StorageError::Unavailable("localStorage missing".into())),
            Err(err) => Err(StorageError::Unavailable(format!("{err:?}"))),
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| StorageError::WriteRejected {
                key: key.to_string(),
                detail: format!("{err:?}"),
            })
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}
