//! Link/unlink card for one external account on the viewer setup screen.

use leptos::prelude::*;

use crate::state::viewer_setup::{LinkState, Platform, ViewerSetup};

#[component]
pub fn ConnectionCard(
    platform: Platform,
    setup: RwSignal<ViewerSetup>,
    on_connect: Callback<Platform>,
    on_disconnect: Callback<Platform>,
) -> impl IntoView {
    let link = move || setup.with(|s| s.link(platform).clone());
    let modifier = match platform {
        Platform::Twitch => "twitch",
        Platform::Discord => "discord",
    };
    let card_class = move || {
        if link().is_connected() {
            "connection-card connection-card--connected".to_owned()
        } else {
            format!("connection-card connection-card--{modifier}")
        }
    };

    view! {
        <div class=card_class>
            <div class="connection-card__header">
                <div>
                    <h3 class="connection-card__name">{platform.name()}</h3>
                    {move || match link() {
                        LinkState::Connected { username } => {
                            view! { <p class="connection-card__user">{username}</p> }.into_any()
                        }
                        _ => view! { <p class="connection-card__muted">"Not connected"</p> }.into_any(),
                    }}
                </div>
                <Show when=move || link().is_connected()>
                    <span class="connection-card__check">"✓"</span>
                </Show>
            </div>
            {move || match link() {
                LinkState::Connected { .. } => {
                    view! {
                        <button class="btn btn--ghost btn--block" on:click=move |_| on_disconnect.run(platform)>
                            "Disconnect"
                        </button>
                    }
                        .into_any()
                }
                state => {
                    let connecting = state == LinkState::Connecting;
                    view! {
                        <button
                            class=format!("btn btn--block btn--{modifier}")
                            disabled=connecting
                            on:click=move |_| on_connect.run(platform)
                        >
                            {if connecting { "Connecting...".to_owned() } else { format!("Connect {}", platform.name()) }}
                        </button>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
