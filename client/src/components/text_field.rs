//! Labelled text input with inline error and optional password reveal.

use leptos::prelude::*;

#[component]
pub fn TextField(
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    placeholder: &'static str,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] icon: &'static str,
    #[prop(optional, into)] error: MaybeProp<String>,
) -> impl IntoView {
    let revealed = RwSignal::new(false);
    let is_password = kind == "password";
    let input_type = move || if is_password && revealed.get() { "text" } else { kind };
    let input_class = move || {
        if error.get().is_some() { "field__input field__input--error" } else { "field__input" }
    };

    view! {
        <div class="field">
            <div class="field__row">
                <span class="field__icon" aria-hidden="true">{icon}</span>
                <input
                    class=input_class
                    type=input_type
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
                <Show when=move || is_password>
                    <button
                        type="button"
                        class="field__reveal"
                        title="Show password"
                        on:click=move |_| revealed.update(|r| *r = !*r)
                    >
                        {move || if revealed.get() { "Hide" } else { "Show" }}
                    </button>
                </Show>
            </div>
            {move || error.get().map(|msg| view! { <p class="field__error">{msg}</p> })}
        </div>
    }
}
