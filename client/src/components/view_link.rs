//! Anchor that navigates between top-level views.

use leptos::prelude::*;

use crate::route::View;
use crate::util::location;

/// `<a>` pointing at a view's fragment. The click is handled here so the
/// router never sees a same-page navigation.
#[component]
pub fn ViewLink(to: View, #[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <a
            href=location::href(to)
            class=class
            on:click=move |ev| {
                ev.prevent_default();
                location::go(to);
            }
        >
            {children()}
        </a>
    }
}
