//! Thin wrappers over blocking browser dialogs.
//!
//! Kept in one place so pages do not reach for `web_sys` directly and the
//! non-browser build degrades to logging instead of panicking.

/// Show a blocking alert with the given message.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
            return;
        }
    }
    leptos::logging::warn!("alert: {message}");
}

/// Ask for confirmation; `false` when dismissed or outside a browser.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            return window.confirm_with_message(message).unwrap_or(false);
        }
    }
    let _ = message;
    false
}
