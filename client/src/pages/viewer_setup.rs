//! Viewer onboarding: link Twitch and Discord, in either order.

use leptos::prelude::*;

use crate::components::brand_header::BrandHeader;
use crate::components::connection_card::ConnectionCard;
use crate::components::view_link::ViewLink;
use crate::route::View;
use crate::state::viewer_setup::{Platform, SetupBanner, ViewerSetup};
use crate::util::delay;

#[component]
pub fn ViewerSetupPage() -> impl IntoView {
    let setup = RwSignal::new(ViewerSetup::default());

    let on_connect = Callback::new(move |platform: Platform| {
        if setup.try_update(|s| s.begin_connect(platform)).unwrap_or(false) {
            leptos::logging::log!("connecting {}", platform.name());
            delay::after(delay::OAUTH, move || setup.update(|s| s.finish_connect(platform)));
        }
    });
    let on_disconnect = Callback::new(move |platform: Platform| {
        setup.update(|s| s.disconnect(platform));
        leptos::logging::log!("disconnected {}", platform.name());
    });

    view! {
        <div class="page page--setup">
            <BrandHeader subtitle="Viewer Setup"/>
            <main class="setup">
                {move || {
                    if setup.with(ViewerSetup::is_ready) {
                        return view! { <ReadyState/> }.into_any();
                    }
                    view! {
                        <section class="setup__intro">
                            <h1>"Link Your Accounts"</h1>
                            <p class="card__muted">"Connect Twitch and Discord to join viewer games."</p>
                        </section>
                        <Banner banner=setup.with(ViewerSetup::banner)/>
                        <div class="connection-grid">
                            <ConnectionCard
                                platform=Platform::Twitch
                                setup=setup
                                on_connect=on_connect
                                on_disconnect=on_disconnect
                            />
                            <ConnectionCard
                                platform=Platform::Discord
                                setup=setup
                                on_connect=on_connect
                                on_disconnect=on_disconnect
                            />
                        </div>
                        <div class="notice">
                            <h4>"Why do I need both?"</h4>
                            <p>
                                "Twitch identifies you in the queue. Discord lets you receive voice channel invites when you're selected to play."
                            </p>
                        </div>
                        <ViewLink to=View::Landing class="setup__back">
                            "← Back to Home"
                        </ViewLink>
                    }
                        .into_any()
                }}
            </main>
        </div>
    }
}

#[component]
fn Banner(banner: SetupBanner) -> impl IntoView {
    match banner {
        SetupBanner::LinkAccounts => view! {
            <div class="notice notice--info">
                <h4>"Link your accounts"</h4>
                <p>"Connect both Twitch and Discord to join games."</p>
            </div>
        }
        .into_any(),
        SetupBanner::AlmostThere { missing } => view! {
            <div class="notice notice--warn">
                <h4>"Almost there!"</h4>
                <p>{format!("Connect {} to complete your setup.", missing.name())}</p>
            </div>
        }
        .into_any(),
        SetupBanner::Ready => view! {
            <div class="notice notice--ok">
                <h4>"You're ready to play!"</h4>
                <p>"Type " <code>"!join"</code> " in any ViewerQ-enabled stream."</p>
            </div>
        }
        .into_any(),
    }
}

const JOIN_STEPS: [(&str, &str); 4] = [
    ("Find a stream using ViewerQ", "Look for streams with viewer games"),
    ("Type !join in chat", "You'll be added to the queue"),
    ("Get a Discord invite when selected", "The bot sends it straight to you"),
    ("Join the voice channel and play!", "Have fun with the streamer"),
];

#[component]
fn ReadyState() -> impl IntoView {
    view! {
        <section class="card ready-state">
            <div class="ready-state__badge" aria-hidden="true">"🎉"</div>
            <h1>"You're All Set!"</h1>
            <p class="card__muted">"Your accounts are linked. You can now join any ViewerQ-enabled stream's queue."</p>
            <div class="notice">
                <h4>"How to join a game:"</h4>
                <ol class="ready-state__steps">
                    {JOIN_STEPS
                        .iter()
                        .map(|(title, detail)| {
                            view! {
                                <li>
                                    <p>{*title}</p>
                                    <p class="card__muted">{*detail}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
            <ViewLink to=View::Landing class="btn btn--ghost btn--block">
                "Back to Home"
            </ViewLink>
        </section>
    }
}
