//! Confirmation dialog for destructive dashboard actions.

use leptos::prelude::*;

/// Backdrop click, the Cancel button, and Escape all close without
/// confirming.
#[component]
pub fn ConfirmModal(
    title: &'static str,
    description: &'static str,
    confirm_text: &'static str,
    on_confirm: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" role="dialog" tabindex="0" on:click=move |ev| ev.stop_propagation() on:keydown=on_keydown>
                <h3 class="dialog__title">{title}</h3>
                <p class="dialog__description">{description}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        {confirm_text}
                    </button>
                </div>
            </div>
        </div>
    }
}
