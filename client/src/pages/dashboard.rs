//! Streamer dashboard page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here runs against [`DashboardState`] seeded from the bundled
//! demo data. Pulling viewers is only logged; queue and session edits change
//! local state and nothing else.

#[cfg(feature = "hydrate")]
use std::time::Duration;

use leptos::prelude::*;

use crate::components::brand_header::BrandHeader;
use crate::components::confirm_modal::ConfirmModal;
use crate::components::queue_list::QueueList;
use crate::components::session_panel::SessionPanel;
use crate::components::status_pill::StatusPill;
use crate::state::dashboard::{Confirm, DashboardState, PARTY_SIZES, SelectionMode, viewer_count_label};
use crate::util::time;

/// How often the "joined Ns ago" labels are recomputed.
#[cfg(feature = "hydrate")]
const WAIT_LABEL_REFRESH: Duration = Duration::from_secs(1);

#[component]
pub fn DashboardPage() -> impl IntoView {
    let now_ms = RwSignal::new(time::now_ms());
    let dashboard = RwSignal::new(DashboardState::demo(now_ms.get_untracked()).unwrap_or_else(|e| {
        leptos::logging::warn!("demo dashboard data unreadable: {e}");
        DashboardState::default()
    }));

    #[cfg(feature = "hydrate")]
    {
        match set_interval_with_handle(move || now_ms.set(time::now_ms()), WAIT_LABEL_REFRESH) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => leptos::logging::warn!("wait label refresh unavailable: {e:?}"),
        }
    }

    let streamer = move || dashboard.with(|d| d.streamer_name.clone());
    let queue_active = Signal::derive(move || dashboard.with(|d| d.queue_active));

    view! {
        <div class="page page--dashboard">
            <BrandHeader>
                <div class="dashboard__title">
                    <h1>"Dashboard"</h1>
                    <p class="card__muted">"Welcome back, " <span class="text-twitch">{streamer}</span></p>
                </div>
                <StatusPill active=queue_active/>
                <a class="icon-btn" href="#settings" title="Settings">
                    "⚙"
                </a>
            </BrandHeader>
            <main class="dashboard">
                <div class="dashboard__controls">
                    <QueueControl dashboard=dashboard/>
                    <PullSettings dashboard=dashboard/>
                </div>
                <div class="dashboard__lists">
                    <QueueCard dashboard=dashboard now_ms=now_ms/>
                    <SessionPanel dashboard=dashboard/>
                </div>
            </main>
            <ConfirmDialogs dashboard=dashboard/>
        </div>
    }
}

#[component]
fn QueueControl(dashboard: RwSignal<DashboardState>) -> impl IntoView {
    let active = move || dashboard.with(|d| d.queue_active);
    let on_toggle = move |_| {
        dashboard.update(DashboardState::toggle_queue);
        let now_active = dashboard.with_untracked(|d| d.queue_active);
        leptos::logging::log!("queue {}", if now_active { "started" } else { "stopped" });
    };

    view! {
        <section class="card">
            <h2>"Queue Control"</h2>
            <button
                class=move || if active() { "btn btn--block btn--lg btn--stop" } else { "btn btn--block btn--lg btn--start" }
                on:click=on_toggle
            >
                {move || if active() { "■ Stop Queue" } else { "▶ Start Queue" }}
            </button>
        </section>
    }
}

#[component]
fn PullSettings(dashboard: RwSignal<DashboardState>) -> impl IntoView {
    let party_size = move || dashboard.with(|d| d.party_size);
    let mode = move || dashboard.with(|d| d.selection_mode);
    let can_pull = move || dashboard.with(|d| d.pull_request().is_some());

    let on_pull = move |_| {
        if let Some(pull) = dashboard.with_untracked(DashboardState::pull_request) {
            leptos::logging::log!("pulling {} viewers using {} mode", pull.count, pull.mode.label());
        }
    };

    let mode_button = move |m: SelectionMode, icon: &'static str| {
        view! {
            <button
                class=move || if mode() == m { "choice choice--selected" } else { "choice" }
                on:click=move |_| dashboard.update(|d| d.set_selection_mode(m))
            >
                {icon}
                " "
                {m.label()}
            </button>
        }
    };

    view! {
        <section class="card">
            <h2>"Pull Settings"</h2>
            <label class="field__label">"Party Size"</label>
            <div class="choice-row">
                {PARTY_SIZES
                    .iter()
                    .map(|&size| {
                        view! {
                            <button
                                class=move || if party_size() == size { "choice choice--selected" } else { "choice" }
                                on:click=move |_| dashboard.update(|d| d.set_party_size(size))
                            >
                                {size}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <label class="field__label">"Selection Mode"</label>
            <div class="choice-grid">
                {mode_button(SelectionMode::FirstInQueue, "☰")} {mode_button(SelectionMode::Random, "⤮")}
            </div>
            <button class="btn btn--twitch btn--block btn--lg" disabled=move || !can_pull() on:click=on_pull>
                {move || format!("Pull {} Viewers", party_size())}
            </button>
        </section>
    }
}

#[component]
fn QueueCard(dashboard: RwSignal<DashboardState>, now_ms: RwSignal<u64>) -> impl IntoView {
    let count = move || dashboard.with(|d| d.queue().len());

    view! {
        <section class="card">
            <div class="card__header">
                <div class="card__title-row">
                    <h2>"Queue"</h2>
                    <span class="chip">{move || viewer_count_label(count())}</span>
                </div>
                <Show when=move || { count() > 0 }>
                    <button class="btn btn--danger-ghost" on:click=move |_| dashboard.update(|d| d.ask(Confirm::ClearQueue))>
                        "🗑 Clear"
                    </button>
                </Show>
            </div>
            <QueueList dashboard=dashboard now_ms=now_ms/>
        </section>
    }
}

#[component]
fn ConfirmDialogs(dashboard: RwSignal<DashboardState>) -> impl IntoView {
    let on_close = Callback::new(move |()| dashboard.update(DashboardState::dismiss));
    let on_confirm = Callback::new(move |()| {
        let pending = dashboard.with_untracked(|d| d.confirm);
        dashboard.update(DashboardState::accept);
        if let Some(action) = pending {
            leptos::logging::log!("confirmed {action:?}");
        }
    });

    move || match dashboard.with(|d| d.confirm) {
        Some(Confirm::ClearQueue) => view! {
            <ConfirmModal
                title="Clear Queue?"
                description="This will remove all viewers from the queue. They will need to type !join again to re-enter."
                confirm_text="Clear Queue"
                on_confirm=on_confirm
                on_close=on_close
            />
        }
        .into_any(),
        Some(Confirm::EndSession) => view! {
            <ConfirmModal
                title="End Session?"
                description="This will close the voice channel and remove all participants. You can start a new session by pulling more viewers."
                confirm_text="End Session"
                on_confirm=on_confirm
                on_close=on_close
            />
        }
        .into_any(),
        None => ().into_any(),
    }
}
