//! Session persistence over `localStorage`.
//!
//! Pure key-value accessors: the token is stored verbatim, the identity as
//! JSON. No validation, expiry tracking, or encryption happens here — the
//! server's 401 is the only authority on token validity. Requires a browser
//! environment; server-side these are no-ops.

use crate::net::types::SessionUser;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "picturex_token";
#[cfg(feature = "hydrate")]
const USER_KEY: &str = "picturex_user";

/// Read the persisted session, if any.
pub fn load_session() -> Option<(String, Option<SessionUser>)> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let token = storage.get_item(TOKEN_KEY).ok()??;
        if token.is_empty() {
            return None;
        }
        let user = storage
            .get_item(USER_KEY)
            .ok()
            .flatten()
            .and_then(|json| serde_json::from_str::<SessionUser>(&json).ok());
        Some((token, user))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the session after a successful login.
pub fn store_session(token: &str, user: &SessionUser) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(TOKEN_KEY, token);
            if let Ok(json) = serde_json::to_string(user) {
                let _ = storage.set_item(USER_KEY, &json);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user);
    }
}

/// Remove the persisted session. Used on logout and on server-signaled
/// expiry.
pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}
