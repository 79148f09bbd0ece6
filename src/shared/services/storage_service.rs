// localStorage access for the theme and session providers.
// Native builds have no browser storage: reads find nothing, writes are no-ops.

use crate::shared::errors::Result;

#[cfg(target_arch = "wasm32")]
use crate::shared::errors::AppError;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| AppError::Storage("no window".to_string()))?
        .local_storage()
        .map_err(|e| AppError::Storage(format!("{:?}", e)))?
        .ok_or_else(|| AppError::Storage("localStorage unavailable".to_string()))
}

#[cfg(target_arch = "wasm32")]
pub fn read_item(key: &str) -> Option<String> {
    local_storage().ok()?.get_item(key).ok().flatten()
}

#[cfg(target_arch = "wasm32")]
pub fn write_item(key: &str, value: &str) -> Result<()> {
    local_storage()?
        .set_item(key, value)
        .map_err(|e| AppError::Storage(format!("{:?}", e)))
}

#[cfg(target_arch = "wasm32")]
pub fn remove_item(key: &str) -> Result<()> {
    local_storage()?
        .remove_item(key)
        .map_err(|e| AppError::Storage(format!("{:?}", e)))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn read_item(_key: &str) -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn write_item(_key: &str, _value: &str) -> Result<()> {
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn remove_item(_key: &str) -> Result<()> {
    Ok(())
}

/// Whether the user agent prefers a dark colour scheme
#[cfg(target_arch = "wasm32")]
pub fn prefers_dark_scheme() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn prefers_dark_scheme() -> bool {
    false
}
