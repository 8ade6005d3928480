//! Streamer onboarding wizard page.

use leptos::prelude::*;

use crate::components::brand_header::BrandHeader;
use crate::components::step_indicator::StepIndicator;
use crate::components::text_field::TextField;
use crate::components::view_link::ViewLink;
use crate::route::View;
use crate::state::streamer_setup::{BOT_INVITE_URL, SetupStep, StreamerSetup};
use crate::util::{clipboard, delay};

#[component]
pub fn StreamerSetupPage() -> impl IntoView {
    let setup = RwSignal::new(StreamerSetup::default());
    let steps = Signal::derive(move || setup.with(|s| s.wizard.indicator()));

    view! {
        <div class="page page--setup">
            <BrandHeader subtitle="Streamer Setup"/>
            <main class="setup">
                <StepIndicator steps=steps/>
                {move || match setup.with(StreamerSetup::step) {
                    SetupStep::Twitch => view! { <TwitchStep setup=setup/> }.into_any(),
                    SetupStep::Discord => view! { <DiscordStep setup=setup/> }.into_any(),
                    SetupStep::Bot => view! { <BotStep setup=setup/> }.into_any(),
                    SetupStep::Ready => view! { <ReadyStep/> }.into_any(),
                }}
            </main>
        </div>
    }
}

#[component]
fn StepCard(title: &'static str, description: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="card step-card">
            <h2 class="step-card__title">{title}</h2>
            <p class="card__muted">{description}</p>
            {children()}
        </section>
    }
}

fn go_forward(setup: RwSignal<StreamerSetup>) {
    match setup.try_update(StreamerSetup::advance) {
        Some(Ok(step)) => leptos::logging::log!("streamer setup at {step:?}"),
        Some(Err(e)) => leptos::logging::warn!("streamer setup: {e}"),
        None => {}
    }
}

#[component]
fn BackButton(setup: RwSignal<StreamerSetup>) -> impl IntoView {
    let on_back = move |_| {
        if let Some(Err(e)) = setup.try_update(StreamerSetup::retreat) {
            leptos::logging::warn!("streamer setup: {e}");
        }
    };
    view! {
        <button class="btn btn--ghost" on:click=on_back>
            "← Back"
        </button>
    }
}

#[component]
fn DoneBanner(message: &'static str) -> impl IntoView {
    view! { <div class="notice notice--ok">"✓ " {message}</div> }
}

#[component]
fn TwitchStep(setup: RwSignal<StreamerSetup>) -> impl IntoView {
    let twitch = move || setup.with(|s| s.twitch);

    let on_connect = move |_| {
        if setup.try_update(StreamerSetup::start_twitch).unwrap_or(false) {
            delay::after(delay::OAUTH, move || setup.update(StreamerSetup::finish_twitch));
        }
    };

    view! {
        <StepCard
            title="Connect Your Twitch"
            description="Link your Twitch account so ViewerQ can manage your channel's queue."
        >
            {move || {
                if twitch().is_done() {
                    view! {
                        <div class="notice notice--ok">
                            <p>"Twitch Connected!"</p>
                            <p class="card__muted">"Logged in as StreamerPro"</p>
                        </div>
                        <button class="btn btn--twitch btn--block" on:click=move |_| go_forward(setup)>
                            "Continue →"
                        </button>
                    }
                        .into_any()
                } else {
                    let working = twitch().is_working();
                    view! {
                        <button class="btn btn--twitch btn--block" disabled=working on:click=on_connect>
                            {if working { "Connecting..." } else { "Connect with Twitch" }}
                        </button>
                    }
                        .into_any()
                }
            }}
        </StepCard>
    }
}

#[component]
fn DiscordStep(setup: RwSignal<StreamerSetup>) -> impl IntoView {
    let save = move || setup.with(|s| s.discord.save);
    let server_id = Signal::derive(move || setup.with(|s| s.discord.server_id.clone()));
    let server_name = Signal::derive(move || setup.with(|s| s.discord.server_name.clone()));
    let error = Signal::derive(move || setup.with(|s| s.discord.error.map(|e| e.to_string())));

    let on_save = move |_| match setup.try_update(StreamerSetup::save_discord) {
        Some(Ok(Some(attempt))) => {
            leptos::logging::log!("saving discord server (attempt {attempt})");
            delay::after(delay::SAVE, move || setup.update(|s| s.finish_discord(attempt)));
        }
        Some(Err(e)) => leptos::logging::log!("discord server id rejected: {e}"),
        _ => {}
    };

    view! {
        <StepCard
            title="Configure Discord Server"
            description="Enter your Discord server details so ViewerQ can create voice channels for your games."
        >
            <label class="field__label">"Discord Server ID " <span class="text-danger">"*"</span></label>
            <TextField
                value=server_id
                on_input=Callback::new(move |v: String| setup.update(|s| s.discord.server_id = v))
                placeholder="e.g., 123456789012345678"
                error=error
            />
            <label class="field__label">"Server Name " <span class="card__muted">"(optional)"</span></label>
            <TextField
                value=server_name
                on_input=Callback::new(move |v: String| setup.update(|s| s.discord.server_name = v))
                placeholder="e.g., My Gaming Community"
            />
            <div class="notice">
                <h4>"How to find your Server ID:"</h4>
                <ol>
                    <li>"Open Discord and go to User Settings"</li>
                    <li>"Navigate to Advanced and enable Developer Mode"</li>
                    <li>"Right-click your server icon and select \"Copy Server ID\""</li>
                </ol>
            </div>
            <Show when=move || save().is_done()>
                <DoneBanner message="Discord server configured!"/>
            </Show>
            <div class="step-card__actions">
                <BackButton setup=setup/>
                {move || {
                    if save().is_done() {
                        view! {
                            <button class="btn btn--discord btn--grow" on:click=move |_| go_forward(setup)>
                                "Continue →"
                            </button>
                        }
                            .into_any()
                    } else {
                        let working = save().is_working();
                        view! {
                            <button class="btn btn--discord btn--grow" disabled=working on:click=on_save>
                                {if working { "Saving..." } else { "Save Discord Server" }}
                            </button>
                        }
                            .into_any()
                    }
                }}
            </div>
        </StepCard>
    }
}

#[component]
fn BotStep(setup: RwSignal<StreamerSetup>) -> impl IntoView {
    let bot = move || setup.with(|s| s.bot);
    let copied = move || setup.with(|s| s.link_copied);

    let on_copy = move |_| {
        clipboard::copy(BOT_INVITE_URL);
        setup.update(|s| s.link_copied = true);
        delay::after(delay::COPIED_FLASH, move || setup.update(|s| s.link_copied = false));
    };
    let on_check = move |_| {
        if bot().is_done() {
            go_forward(setup);
        } else if let Some(attempt) = setup.try_update(StreamerSetup::check_bot).flatten() {
            leptos::logging::log!("checking for bot in server (attempt {attempt})");
            delay::after(delay::BOT_CHECK, move || setup.update(|s| s.finish_bot(attempt)));
        }
    };

    view! {
        <StepCard
            title="Add ViewerQ Bot"
            description="Add our Discord bot to your server so it can create voice channels and send invites."
        >
            <div class="bot-card">
                <span class="bot-card__icon" aria-hidden="true">"🤖"</span>
                <div>
                    <p class="bot-card__name">"ViewerQ Bot"</p>
                    <p class="card__muted">"Manages voice channels & invites"</p>
                </div>
            </div>
            <a class="btn btn--discord btn--block" href=BOT_INVITE_URL target="_blank" rel="noopener noreferrer">
                "Add Bot to Discord ↗"
            </a>
            <button class="btn btn--ghost btn--block" on:click=on_copy>
                {move || if copied() { "Copied!" } else { "Copy Invite Link" }}
            </button>
            <div class="notice notice--warn">
                <h4>"Required Permissions"</h4>
                <p>
                    "The bot needs permission to create channels, manage voice, and send messages. Make sure to accept all requested permissions."
                </p>
            </div>
            <Show when=move || bot().is_done()>
                <DoneBanner message="Bot detected in your server!"/>
            </Show>
            <div class="step-card__actions">
                <BackButton setup=setup/>
                <button class="btn btn--twitch btn--grow" disabled=move || bot().is_working() on:click=on_check>
                    {move || {
                        if bot().is_working() {
                            "Checking..."
                        } else if bot().is_done() {
                            "Continue →"
                        } else {
                            "I've Added the Bot ✓"
                        }
                    }}
                </button>
            </div>
        </StepCard>
    }
}

const READY_CHECKLIST: [&str; 3] = ["Twitch account connected", "Discord server configured", "ViewerQ bot added"];

#[component]
fn ReadyStep() -> impl IntoView {
    view! {
        <StepCard
            title="You're All Set!"
            description="Your ViewerQ setup is complete. You're ready to start playing with your viewers."
        >
            <ul class="checklist">
                {READY_CHECKLIST
                    .iter()
                    .map(|item| view! { <li class="checklist__item">{*item} <span class="text-ok">"✓"</span></li> })
                    .collect_view()}
            </ul>
            <div class="notice">
                <h4>"What's next?"</h4>
                <ul>
                    <li>"Start your queue from the dashboard"</li>
                    <li>"Tell viewers to type " <code>"!join"</code> " in chat"</li>
                    <li>"Pull viewers and they'll get Discord invites automatically"</li>
                </ul>
            </div>
            <ViewLink to=View::Dashboard class="btn btn--twitch btn--block btn--lg">
                "🎮 Go to Dashboard"
            </ViewLink>
        </StepCard>
    }
}
