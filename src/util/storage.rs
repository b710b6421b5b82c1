//! Plain key/value persistence in `localStorage`. No schema versioning;
//! last selected locale, theme, and the optional client-side API key all go
//! through here or through their dedicated modules.

#[cfg(feature = "hydrate")]
pub fn get(key: &str) -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()
        .flatten()?
        .get_item(key)
        .ok()
        .flatten()
}

#[cfg(not(feature = "hydrate"))]
pub fn get(key: &str) -> Option<String> {
    let _ = key;
    None
}

#[cfg(feature = "hydrate")]
pub fn set(key: &str, value: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(key, value);
    }
}

#[cfg(not(feature = "hydrate"))]
pub fn set(key: &str, value: &str) {
    let _ = (key, value);
}

/// Storage key for the optional client-side API key.
pub const API_KEY: &str = "apiKey";
