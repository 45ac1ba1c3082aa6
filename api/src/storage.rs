//! Session token persistence.
//!
//! On the web the token lives in browser local storage under a fixed key and
//! survives reloads; the bootstrap reads it back on every top-level mount.
//! Native builds (unit tests, tooling) use a process-local cell with the same
//! API so the session code paths can be exercised off-browser.

/// Local-storage key the session token is persisted under.
pub const TOKEN_KEY: &str = "vs-token";

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(target_arch = "wasm32")]
pub fn load_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok().flatten()
}

#[cfg(target_arch = "wasm32")]
pub fn store_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

#[cfg(target_arch = "wasm32")]
pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

#[cfg(not(target_arch = "wasm32"))]
static TOKEN: std::sync::Mutex<Option<String>> = std::sync::Mutex::new(None);

#[cfg(not(target_arch = "wasm32"))]
pub fn load_token() -> Option<String> {
    TOKEN.lock().ok()?.clone()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn store_token(token: &str) {
    if let Ok(mut slot) = TOKEN.lock() {
        *slot = Some(token.to_string());
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clear_token() {
    if let Ok(mut slot) = TOKEN.lock() {
        *slot = None;
    }
}
