//! Root application component and fragment-driven view switch.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    auth::AuthPage, dashboard::DashboardPage, landing::LandingPage, streamer_setup::StreamerSetupPage,
    viewer_setup::ViewerSetupPage,
};
use crate::route::View;
use crate::util::location;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/viewerq.css"/>
        <Title text="ViewerQ"/>

        <Router>
            <Routes fallback=|| view! { <ViewSwitch/> }>
                <Route path=StaticSegment("") view=ViewSwitch/>
            </Routes>
        </Router>
    }
}

/// Renders the page for the current `location.hash`.
///
/// The server has no fragment, so the first render is always the landing
/// page. Once hydrated, the real fragment is read and every `hashchange`
/// re-resolves it.
#[component]
fn ViewSwitch() -> impl IntoView {
    let current = RwSignal::new(View::Landing);
    let show = move |next: View| {
        if current.get_untracked() != next {
            leptos::logging::log!("view -> {next:?}");
            current.set(next);
        }
    };

    Effect::new(move |_| show(location::current_view()));

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::hashchange, move |_| show(location::current_view()));
        on_cleanup(move || handle.remove());
    }

    move || match current.get() {
        View::Landing => view! { <LandingPage/> }.into_any(),
        View::Auth => view! { <AuthPage/> }.into_any(),
        View::Dashboard => view! { <DashboardPage/> }.into_any(),
        View::StreamerSetup => view! { <StreamerSetupPage/> }.into_any(),
        View::ViewerSetup => view! { <ViewerSetupPage/> }.into_any(),
    }
}
