//! Clipboard writes for invite links.

/// Copy `text` to the system clipboard. Returns whether a window was
/// available; the write itself is fire-and-forget.
pub fn copy(text: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            leptos::logging::warn!("clipboard unavailable: no window");
            return false;
        };
        let _ = window.navigator().clipboard().write_text(text);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        false
    }
}
