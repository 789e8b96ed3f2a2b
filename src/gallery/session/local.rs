use dioxus_logger::tracing;

use crate::gallery::{error::StorageError, session::SessionStorage};

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl SessionStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn remove(&self, key: &str) {
        match Self::storage() {
            Ok(storage) => {
                if let Err(e) = storage.remove_item(key) {
                    tracing::warn!(key = %key, "Failed to remove local storage key: {:?}", e);
                }
            }
            Err(e) => tracing::warn!(key = %key, "{}", e),
        }
    }
}
