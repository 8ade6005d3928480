//! Sign-up / log-in page, then role selection.

use leptos::prelude::*;

use crate::components::brand_header::BrandHeader;
use crate::components::role_card::RoleCard;
use crate::components::step_indicator::StepIndicator;
use crate::components::text_field::TextField;
use crate::state::auth::{AuthFlow, AuthStep, AuthTab, Pending, Role};
use crate::util::{delay, location};

#[component]
pub fn AuthPage() -> impl IntoView {
    let flow = RwSignal::new(AuthFlow::default());

    let step = move || flow.with(AuthFlow::step);
    let steps = Signal::derive(move || flow.with(|f| f.wizard.indicator()));

    view! {
        <div class="page page--auth">
            <BrandHeader subtitle="Account"/>
            <main class="auth">
                <StepIndicator steps=steps/>
                {move || match step() {
                    AuthStep::Credentials => view! { <CredentialsStep flow=flow/> }.into_any(),
                    AuthStep::Role => view! { <RoleStep flow=flow/> }.into_any(),
                }}
            </main>
        </div>
    }
}

fn finish_after_delay(flow: RwSignal<AuthFlow>) {
    delay::after(delay::OAUTH, move || {
        flow.update(AuthFlow::complete_pending);
    });
}

#[component]
fn CredentialsStep(flow: RwSignal<AuthFlow>) -> impl IntoView {
    let tab = move || flow.with(|f| f.tab);
    let pending = move || flow.with(|f| f.pending);

    let on_twitch = move |_| {
        let started = flow.try_update(AuthFlow::start_twitch).unwrap_or(false);
        if started {
            leptos::logging::log!("twitch sign-in started");
            finish_after_delay(flow);
        }
    };
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let started = flow.try_update(AuthFlow::submit_form).unwrap_or(false);
        if started {
            let tab = flow.with_untracked(|f| f.tab);
            leptos::logging::log!("{} submitted", tab.label());
            finish_after_delay(flow);
        }
    };

    let tab_button = move |t: AuthTab| {
        view! {
            <button
                type="button"
                class=move || if tab() == t { "auth__tab auth__tab--active" } else { "auth__tab" }
                on:click=move |_| flow.update(|f| f.select_tab(t))
            >
                {t.label()}
            </button>
        }
    };

    let username = Signal::derive(move || flow.with(|f| f.username.clone()));
    let email = Signal::derive(move || flow.with(|f| f.email.clone()));
    let password = Signal::derive(move || flow.with(|f| f.password.clone()));
    let set_username = Callback::new(move |v: String| flow.update(|f| f.username = v));
    let set_email = Callback::new(move |v: String| flow.update(|f| f.email = v));
    let set_password = Callback::new(move |v: String| flow.update(|f| f.password = v));

    let username_error = Signal::derive(move || flow.with(|f| f.sign_up_errors.username.map(str::to_owned)));
    let email_error = Signal::derive(move || flow.with(|f| f.sign_up_errors.email.map(str::to_owned)));
    let password_error = Signal::derive(move || flow.with(|f| f.sign_up_errors.password.map(str::to_owned)));

    view! {
        <section class="card auth__card">
            <div class="auth__tabs">{tab_button(AuthTab::SignUp)} {tab_button(AuthTab::LogIn)}</div>
            <h1 class="auth__heading">{move || tab().heading()}</h1>
            <p class="card__muted">{move || tab().subheading()}</p>

            <button class="btn btn--twitch btn--block" disabled=move || pending().is_some() on:click=on_twitch>
                {move || {
                    if pending() == Some(Pending::Twitch) {
                        "Connecting...".to_owned()
                    } else {
                        tab().twitch_label().to_owned()
                    }
                }}
            </button>

            <div class="divider"><span>"or"</span></div>

            <form class="auth__form" on:submit=on_submit>
                <Show when=move || tab() == AuthTab::SignUp>
                    <TextField
                        value=username
                        on_input=set_username
                        placeholder="Username"
                        icon="👤"
                        error=username_error
                    />
                </Show>
                <TextField
                    value=email
                    on_input=set_email
                    placeholder="Email"
                    kind="email"
                    icon="✉"
                    error=Signal::derive(move || if tab() == AuthTab::SignUp { email_error.get() } else { None })
                />
                <TextField
                    value=password
                    on_input=set_password
                    placeholder="Password"
                    kind="password"
                    icon="🔒"
                    error=Signal::derive(move || if tab() == AuthTab::SignUp { password_error.get() } else { None })
                />
                {move || {
                    flow.with(|f| f.log_in_error)
                        .filter(|_| tab() == AuthTab::LogIn)
                        .map(|msg| view! { <p class="field__error">{msg}</p> })
                }}
                <button type="submit" class="btn btn--primary btn--block" disabled=move || pending().is_some()>
                    {move || {
                        match (pending(), tab()) {
                            (Some(Pending::Form), AuthTab::SignUp) => "Creating account...",
                            (Some(Pending::Form), AuthTab::LogIn) => "Logging in...",
                            (_, AuthTab::SignUp) => "Create Account",
                            (_, AuthTab::LogIn) => "Log In",
                        }
                    }}
                </button>
            </form>
        </section>
    }
}

#[component]
fn RoleStep(flow: RwSignal<AuthFlow>) -> impl IntoView {
    let role = move || flow.with(|f| f.role);
    let choose = move |r: Role| Callback::new(move |()| flow.update(|f| f.choose_role(r)));

    let on_continue = move |_| {
        if let Some(view) = flow.with_untracked(AuthFlow::confirm_role) {
            leptos::logging::log!("continuing to {view:?}");
            location::go(view);
        }
    };

    view! {
        <section class="card auth__card">
            <h1 class="auth__heading">"How will you use ViewerQ?"</h1>
            <p class="card__muted">"You can change this later."</p>
            <div class="auth__roles">
                <RoleCard
                    icon="🎥"
                    title="I'm a Streamer"
                    description="Run viewer games, manage the queue, and invite players to voice."
                    selected=Signal::derive(move || role() == Some(Role::Streamer))
                    on_select=choose(Role::Streamer)
                />
                <RoleCard
                    icon="🎮"
                    title="I'm a Viewer"
                    description="Join your favorite streamers' games straight from chat."
                    selected=Signal::derive(move || role() == Some(Role::Viewer))
                    on_select=choose(Role::Viewer)
                />
            </div>
            <button class="btn btn--primary btn--block" disabled=move || role().is_none() on:click=on_continue>
                "Continue"
            </button>
        </section>
    }
}
