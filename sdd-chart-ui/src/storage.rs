//! The one persisted preference: the high-contrast accessibility flag.

/// localStorage key for the high-contrast preference.
pub const CONTRAST_KEY: &str = "sdd-high-contrast";

/// Read the flag. Missing key, denied storage access, or a foreign value
/// all read as `false`.
pub fn load_contrast() -> bool {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(CONTRAST_KEY).ok().flatten())
        .map(|v| v == "true")
        .unwrap_or(false)
}

/// Persist the flag. Storage failures (private browsing, quota) are logged
/// and otherwise ignored; the in-memory toggle still works for the session.
pub fn store_contrast(enabled: bool) {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .map(|s| s.set_item(CONTRAST_KEY, if enabled { "true" } else { "false" }));
    if !matches!(stored, Some(Ok(()))) {
        log::warn!("could not persist contrast preference");
    }
}
