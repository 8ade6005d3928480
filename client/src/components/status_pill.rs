use leptos::prelude::*;

/// "Queue Active" / "Queue Inactive" indicator in the dashboard header.
#[component]
pub fn StatusPill(#[prop(into)] active: Signal<bool>) -> impl IntoView {
    let class = move || if active.get() { "status-pill status-pill--active" } else { "status-pill" };
    let label = move || if active.get() { "Queue Active" } else { "Queue Inactive" };

    view! {
        <div class=class>
            <span class="status-pill__dot"></span>
            {label}
        </div>
    }
}
