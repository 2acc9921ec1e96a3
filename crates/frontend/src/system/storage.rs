use contracts::system::auth::UserInfo;
use web_sys::window;

/// Written by the sign-in page, read here.
const USER_KEY: &str = "[NSRS]-user-storage";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Load the persisted user, if any and still parseable
pub fn load_user() -> Option<UserInfo> {
    let raw = get_local_storage()?.get_item(USER_KEY).ok()??;
    match serde_json::from_str::<UserInfo>(&raw) {
        Ok(user) if !user.token.is_empty() => Some(user),
        Ok(_) => None,
        Err(e) => {
            log::warn!("discarding unreadable stored user: {}", e);
            None
        }
    }
}

pub fn clear_user() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(USER_KEY);
    }
}
