use leptos::prelude::*;

/// Selectable card on the role step of sign-up.
#[component]
pub fn RoleCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    #[prop(into)] selected: Signal<bool>,
    on_select: Callback<()>,
) -> impl IntoView {
    let class = move || if selected.get() { "role-card role-card--selected" } else { "role-card" };

    view! {
        <button type="button" class=class aria-pressed=move || selected.get().to_string() on:click=move |_| on_select.run(())>
            <span class="role-card__icon" aria-hidden="true">{icon}</span>
            <span class="role-card__body">
                <span class="role-card__title">{title}</span>
                <span class="role-card__description">{description}</span>
            </span>
            <span class="role-card__radio">{move || if selected.get() { "✓" } else { "" }}</span>
        </button>
    }
}
