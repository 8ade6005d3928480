//! Current voice session card on the dashboard.

use leptos::prelude::*;

use crate::state::dashboard::{Confirm, DashboardState, ParticipantStatus, SessionParticipant, ViewerId};
use crate::util::{clipboard, delay};

#[component]
fn ParticipantRow(participant: SessionParticipant, on_resend: Callback<ViewerId>, on_kick: Callback<ViewerId>) -> impl IntoView {
    let id = participant.id;
    let status = participant.status();
    let modifier = match status {
        ParticipantStatus::InVoice => "in-voice",
        ParticipantStatus::Waiting => "waiting",
        ParticipantStatus::NoDiscord => "no-discord",
    };

    view! {
        <div class=format!("participant participant--{modifier}")>
            <div class="participant__avatar" aria-hidden="true"></div>
            <div class="participant__body">
                <div class="participant__name">{participant.username}</div>
                {participant
                    .discord_username
                    .map(|name| view! { <div class="participant__discord">{name}</div> })}
                <div class="participant__status">{status.label()}</div>
            </div>
            <div class="participant__actions">
                <Show when=move || status == ParticipantStatus::Waiting>
                    <button class="icon-btn icon-btn--discord" title="Resend Invite" on:click=move |_| on_resend.run(id)>
                        "⟳"
                    </button>
                </Show>
                <button class="icon-btn icon-btn--danger" title="Kick from Session" on:click=move |_| on_kick.run(id)>
                    "Kick"
                </button>
            </div>
        </div>
    }
}

/// Shown only while the session is active and has participants.
#[component]
pub fn SessionPanel(dashboard: RwSignal<DashboardState>) -> impl IntoView {
    let on_resend = Callback::new(move |id: ViewerId| {
        dashboard.update(|d| {
            if d.resend_invite(id) {
                leptos::logging::log!("resent voice invite to viewer {id}");
            }
        });
    });
    let on_kick = Callback::new(move |id: ViewerId| {
        dashboard.update(|d| {
            if let Some(p) = d.kick_participant(id) {
                leptos::logging::log!("kicked {} from session", p.username);
            }
        });
    });
    let on_copy = move |_| {
        let url = dashboard.with_untracked(|d| d.invite_url.clone());
        clipboard::copy(&url);
        dashboard.update(|d| d.set_invite_copied(true));
        delay::after(delay::COPIED_FLASH, move || dashboard.update(|d| d.set_invite_copied(false)));
    };

    let copied = move || dashboard.with(|d| d.invite_copied);
    let in_voice = move || dashboard.with(DashboardState::in_voice_count);
    let total = move || dashboard.with(|d| d.participants().len());

    view! {
        <Show when=move || dashboard.with(DashboardState::session_visible)>
            <section class="card session-panel">
                <div class="card__header">
                    <div>
                        <h2>"Current Session"</h2>
                        <p class="card__muted">
                            <span class="text-ok">{in_voice}</span>
                            " of "
                            {total}
                            " in voice"
                        </p>
                    </div>
                    <div class="session-panel__actions">
                        <button class=move || if copied() { "btn btn--ok" } else { "btn btn--ghost" } on:click=on_copy>
                            {move || if copied() { "Copied!" } else { "Copy Invite" }}
                        </button>
                        <a class="btn btn--discord" href="https://discord.com/channels/@me" target="_blank" rel="noopener noreferrer">
                            "Open Discord"
                        </a>
                        <button class="btn btn--danger-ghost" on:click=move |_| dashboard.update(|d| d.ask(Confirm::EndSession))>
                            "End Session"
                        </button>
                    </div>
                </div>
                <div class="session-panel__list">
                    {move || {
                        dashboard
                            .with(|d| d.participants().to_vec())
                            .into_iter()
                            .map(|p| view! { <ParticipantRow participant=p on_resend=on_resend on_kick=on_kick/> })
                            .collect_view()
                    }}
                </div>
            </section>
        </Show>
    }
}
