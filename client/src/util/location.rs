//! Browser `location.hash` access.
//!
//! SYSTEM CONTEXT
//! ==============
//! The fragment is the app's only navigation surface. Reading and writing it
//! is browser-only; on the server the current fragment is unknown and reads
//! as empty, which resolves to the landing view.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

use crate::route::{LANDING_FRAGMENT, RouteTable, View};

/// The shared route table, or `None` if it failed validation. The host
/// refuses to start in that case, so the fallback only matters in tests.
fn table() -> Option<&'static RouteTable> {
    match RouteTable::standard() {
        Ok(table) => Some(table),
        Err(e) => {
            leptos::logging::warn!("route table rejected: {e}");
            None
        }
    }
}

/// Raw `location.hash`, including the leading `#` (empty if none).
pub fn current_fragment() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// View for the current fragment.
pub fn current_view() -> View {
    view_for(&current_fragment())
}

/// View registered for `fragment`; unregistered fragments are the landing.
pub fn view_for(fragment: &str) -> View {
    table().map_or(View::Landing, |t| t.resolve(fragment))
}

/// Fragment that addresses `view`, suitable for an `href`.
pub fn href(view: View) -> &'static str {
    table().map_or(LANDING_FRAGMENT, |t| t.fragment(view))
}

/// Navigate to `view` by rewriting the fragment. The browser then fires
/// `hashchange`, which the app shell listens for.
pub fn go(view: View) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_hash(href(view)) {
                leptos::logging::warn!("navigation to {view:?} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = view;
    }
}
