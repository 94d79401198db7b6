//! JSON snapshots of page UI state in localStorage.
//!
//! Keys carry a version suffix (`..._v1`); a snapshot that no longer
//! deserializes is ignored and the page starts from its defaults.

use serde::de::DeserializeOwned;
use serde::Serialize;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = storage()?.get_item(key).ok().flatten()?;
    serde_json::from_str::<T>(&raw).ok()
}

pub fn save<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = storage() else { return };
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    if storage.set_item(key, &raw).is_err() {
        log::warn!("localStorage write failed for '{}'", key);
    }
}
