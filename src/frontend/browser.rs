//! Thin wrappers over the few browser APIs the views need. Outside the
//! `csr` build they fall back to inert behaviour so the views still
//! compile natively.

use std::sync::Arc;

use crate::services::SessionStore;

/// Origin of the content backend.
///
/// The shell page carries it in `<meta name="backend-url">`; without that
/// tag the page's own origin is used.
#[cfg(feature = "csr")]
pub fn backend_origin() -> Option<String> {
    let window = web_sys::window()?;
    let from_meta = window
        .document()
        .and_then(|doc| doc.query_selector("meta[name=\"backend-url\"]").ok().flatten())
        .and_then(|meta| meta.get_attribute("content"))
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty());

    from_meta.or_else(|| window.location().origin().ok())
}

#[cfg(not(feature = "csr"))]
pub fn backend_origin() -> Option<String> {
    None
}

#[cfg(feature = "csr")]
pub fn session_store() -> Arc<dyn SessionStore> {
    Arc::new(crate::services::BrowserStore)
}

#[cfg(not(feature = "csr"))]
pub fn session_store() -> Arc<dyn SessionStore> {
    Arc::new(crate::services::MemoryStore::new())
}

/// Blocking yes/no prompt. A prompt that cannot be shown counts as "no".
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("confirm skipped outside the browser: {message}");
        false
    }
}

pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
        return;
    }
    log::warn!("{message}");
}
