//! Local storage helpers

/// Credential token of the signed-in user
pub const TOKEN_KEY: &str = "dcc.token";
/// Name shown in the top bar
pub const USER_KEY: &str = "dcc.user";

pub fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn get_string(key: &str) -> Option<String> {
    get_storage()
        .and_then(|s| s.get_item(key).ok().flatten())
        .filter(|v| !v.is_empty())
}

pub fn set_string(key: &str, value: &str) {
    if let Some(storage) = get_storage() {
        let _ = storage.set_item(key, value);
    }
}

pub fn remove(key: &str) {
    if let Some(storage) = get_storage() {
        let _ = storage.remove_item(key);
    }
}
