//! Token persistence in localStorage.

const ACCESS_TOKEN_KEY: &str = "auth_access_token";
const LAST_EMAIL_KEY: &str = "auth_last_email";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn write(key: &str, value: &str) {
    let Some(storage) = local_storage() else { return };
    if storage.set_item(key, value).is_err() {
        log::warn!("localStorage write failed for '{}'", key);
    }
}

fn read(key: &str) -> Option<String> {
    local_storage()?
        .get_item(key)
        .ok()?
        .filter(|v| !v.trim().is_empty())
}

pub fn save_access_token(token: &str) {
    write(ACCESS_TOKEN_KEY, token);
}

/// Blank values count as no token.
pub fn get_access_token() -> Option<String> {
    read(ACCESS_TOKEN_KEY)
}

pub fn clear_tokens() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
    }
}

/// Email of the last successful sign-in, prefilled on the login form.
pub fn save_last_email(email: &str) {
    write(LAST_EMAIL_KEY, email);
}

pub fn get_last_email() -> Option<String> {
    read(LAST_EMAIL_KEY)
}
