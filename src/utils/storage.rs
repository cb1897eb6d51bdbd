//! JSON persistence in localStorage.
//!
//! Values survive reloads and browser restarts. Reads are lenient: a
//! missing key or a value that no longer deserializes reads as `None`.

use serde::{Serialize, de::DeserializeOwned};

use super::dom;
use crate::core::error::StorageError;

/// Read and deserialize `key`.
pub fn get<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = get_raw(key)?;
    serde_json::from_str(&raw).ok()
}

/// Serialize and store `data` under `key`.
pub fn set<T: Serialize>(key: &str, data: &T) -> Result<(), StorageError> {
    let json =
        serde_json::to_string(data).map_err(|e| StorageError::SerializationFailed(e.to_string()))?;
    set_raw(key, &json)
}

/// Read a plain string value.
pub fn get_raw(key: &str) -> Option<String> {
    dom::local_storage()?.get_item(key).ok()?
}

/// Store a plain string value.
pub fn set_raw(key: &str, value: &str) -> Result<(), StorageError> {
    let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
    storage
        .set_item(key, value)
        .map_err(|_| StorageError::WriteFailed)
}

pub fn remove(key: &str) -> Result<(), StorageError> {
    let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
    storage
        .remove_item(key)
        .map_err(|_| StorageError::RemoveFailed)
}
