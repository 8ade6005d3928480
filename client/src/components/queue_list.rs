//! Queue card body: ordered viewer rows or the empty-state hint.

use leptos::prelude::*;

use crate::state::dashboard::{Badge, DashboardState, QueueEntry, ViewerId, format_wait};

#[component]
fn BadgeChip(badge: Badge) -> impl IntoView {
    let class = match badge {
        Badge::Sub => "badge badge--sub",
        Badge::Vip => "badge badge--vip",
    };
    view! { <span class=class>{badge.label()}</span> }
}

#[component]
fn QueueRow(entry: QueueEntry, position: usize, now_ms: u64, on_remove: Callback<ViewerId>) -> impl IntoView {
    let id = entry.id;
    view! {
        <div class="queue-row">
            <div class="queue-row__position">{position}</div>
            <div class="queue-row__body">
                <div class="queue-row__name">
                    {entry.username}
                    {entry.badges.into_iter().map(|badge| view! { <BadgeChip badge=badge/> }).collect_view()}
                </div>
                <div class="queue-row__wait">{format_wait(now_ms, entry.joined_at_ms)}</div>
            </div>
            <button class="queue-row__remove" title="Remove from queue" on:click=move |_| on_remove.run(id)>
                "✕"
            </button>
        </div>
    }
}

#[component]
fn EmptyQueue() -> impl IntoView {
    view! {
        <div class="empty-queue">
            <h3>"No viewers in queue"</h3>
            <p>"Viewers can join by typing " <code>"!join"</code> " in your Twitch chat."</p>
        </div>
    }
}

/// Queue rows in join order, numbered from 1.
#[component]
pub fn QueueList(dashboard: RwSignal<DashboardState>, #[prop(into)] now_ms: Signal<u64>) -> impl IntoView {
    let on_remove = Callback::new(move |id: ViewerId| {
        dashboard.update(|d| {
            if let Some(removed) = d.remove_viewer(id) {
                leptos::logging::log!("removed {} from queue", removed.username);
            }
        });
    });

    move || {
        let entries = dashboard.with(|d| d.queue().to_vec());
        if entries.is_empty() {
            return view! { <EmptyQueue/> }.into_any();
        }
        let now = now_ms.get();
        view! {
            <div class="queue-list">
                {entries
                    .into_iter()
                    .enumerate()
                    .map(|(i, entry)| view! { <QueueRow entry=entry position=i + 1 now_ms=now on_remove=on_remove/> })
                    .collect_view()}
            </div>
        }
            .into_any()
    }
}
