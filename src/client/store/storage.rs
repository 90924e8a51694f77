//! Thin wrapper over `window.localStorage`.
//!
//! Outside the browser every read returns `None` and writes are dropped.

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const GUILD_KEY: &str = "guildId";

#[cfg(feature = "web")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

#[cfg(feature = "web")]
pub fn get(key: &str) -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
}

#[cfg(feature = "web")]
pub fn set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

#[cfg(feature = "web")]
pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

#[cfg(not(feature = "web"))]
pub fn get(_key: &str) -> Option<String> {
    None
}

#[cfg(not(feature = "web"))]
pub fn set(_key: &str, _value: &str) {}

#[cfg(not(feature = "web"))]
pub fn remove(_key: &str) {}
