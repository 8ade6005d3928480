//! Marketing landing page. Also the fallback for unknown fragments.

use leptos::prelude::*;

use crate::components::view_link::ViewLink;
use crate::route::View;

#[derive(Clone, Copy)]
struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "👥",
        title: "Smart Queue Management",
        description: "Fairly select viewers with lottery or first-come-first-served modes. Prioritize Subs and VIPs automatically.",
    },
    Feature {
        icon: "💬",
        title: "Discord Integration",
        description: "Automatically creates temporary voice channels and invites selected viewers. No more manual link pasting.",
    },
    Feature {
        icon: "🛡",
        title: "Safe & Secure",
        description: "You control who joins. Kick disruptive players with one click and they're removed from voice instantly.",
    },
];

const HOW_IT_WORKS: &[(&str, &str, &str)] = &[
    ("01", "Viewers Join Queue", "Viewers type !join in your Twitch chat to enter the queue. They link their Discord once."),
    ("02", "You Pull Players", "Select 'Pull 4 Players' on your dashboard. ViewerQ randomly selects winners."),
    ("03", "Voice Channel Created", "A private voice channel opens in your Discord. Winners get an instant invite."),
];

/// Pixels of scroll before the nav bar gets its solid background.
#[cfg(feature = "hydrate")]
const NAV_SOLID_AFTER_PX: f64 = 20.0;

#[component]
pub fn LandingPage() -> impl IntoView {
    let scrolled = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            scrolled.set(y > NAV_SOLID_AFTER_PX);
        });
        on_cleanup(move || handle.remove());
    }

    let nav_class = move || if scrolled.get() { "landing-nav landing-nav--solid" } else { "landing-nav" };

    view! {
        <div class="landing">
            <nav class=nav_class>
                <div class="landing-nav__inner">
                    <span class="brand">
                        <span class="brand__mark">"🎮"</span>
                        <span class="brand__name">"ViewerQ"</span>
                    </span>
                    <div class="landing-nav__links">
                        <a href="#features">"Features"</a>
                        <a href="#how-it-works">"How it Works"</a>
                    </div>
                    <div class="landing-nav__actions">
                        <ViewLink to=View::Auth class="landing-nav__login">
                            "Log in"
                        </ViewLink>
                        <ViewLink to=View::Auth class="btn btn--light btn--pill">
                            "Start Free →"
                        </ViewLink>
                    </div>
                </div>
            </nav>

            <section class="hero">
                <span class="hero__tag">"Now in Beta 2.0"</span>
                <h1 class="hero__title">"Tame the chaos of " <br/> <span>"viewer games."</span></h1>
                <p class="hero__lede">
                    "ViewerQ automates the queue, the lottery, and the Discord invites so you can focus on the content, not the logistics."
                </p>
                <div class="hero__ctas">
                    <ViewLink to=View::StreamerSetup class="btn btn--twitch btn--lg">
                        "I'm a Streamer"
                    </ViewLink>
                    <ViewLink to=View::ViewerSetup class="btn btn--discord btn--lg">
                        "I'm a Viewer"
                    </ViewLink>
                    <ViewLink to=View::Dashboard class="btn btn--ghost btn--lg">
                        "View Demo"
                    </ViewLink>
                </div>
                <p class="hero__proof">"Trusted by streamers on Twitch and Discord"</p>
            </section>

            <section id="features" class="features">
                <h2>"Built for the modern streamer"</h2>
                <p class="section-lede">"Everything you need to manage viewer games without alt-tabbing."</p>
                <div class="features__grid">
                    {FEATURES
                        .iter()
                        .map(|f| {
                            view! {
                                <div class="feature-card">
                                    <div class="feature-card__icon">{f.icon}</div>
                                    <h3>{f.title}</h3>
                                    <p>{f.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="how-it-works" class="how">
                <h2>"How it works"</h2>
                <div class="how__steps">
                    {HOW_IT_WORKS
                        .iter()
                        .map(|(number, title, description)| {
                            view! {
                                <div class="how__step">
                                    <div class="how__number">{*number}</div>
                                    <div>
                                        <h3>{*title}</h3>
                                        <p>{*description}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <footer class="landing-footer">
                <span class="brand__name">"ViewerQ"</span>
                <span>"© 2025 ViewerQ. Not affiliated with Twitch or Discord."</span>
            </footer>
        </div>
    }
}
