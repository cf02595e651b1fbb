use contracts::system::auth::UserProfile;
use web_sys::window;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist the session: bearer token plus serialized profile.
pub fn save_session(token: &str, user: &UserProfile) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        if let Ok(serialized) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &serialized);
        }
    }
}

/// Get the bearer token from localStorage.
pub fn get_token() -> Option<String> {
    get_local_storage()?.get_item(TOKEN_KEY).ok()?
}

/// Get the persisted user profile from localStorage.
pub fn get_user() -> Option<UserProfile> {
    let raw = get_local_storage()?.get_item(USER_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

/// Clear the persisted session (logout or 401 teardown).
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}
