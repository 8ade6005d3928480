//! Top bar with the ViewerQ wordmark.

use leptos::prelude::*;

use crate::components::view_link::ViewLink;
use crate::route::View;

/// Header used by the auth, setup and dashboard screens. The wordmark links
/// back to the landing page.
#[component]
pub fn BrandHeader(#[prop(optional)] subtitle: Option<&'static str>, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <header class="brand-header">
            <div class="brand-header__inner">
                <ViewLink to=View::Landing class="brand">
                    <span class="brand__mark">"🎮"</span>
                    <span class="brand__name">"ViewerQ"</span>
                </ViewLink>
                {subtitle.map(|s| view! { <span class="brand-header__subtitle">{s}</span> })}
                <span class="brand-header__spacer"></span>
                {children.map(|c| c())}
            </div>
        </header>
    }
}
