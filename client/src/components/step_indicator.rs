//! Horizontal progress dots for a wizard.

use leptos::prelude::*;

use crate::wizard::StepStatus;

#[component]
pub fn StepIndicator(#[prop(into)] steps: Signal<Vec<(&'static str, StepStatus)>>) -> impl IntoView {
    view! {
        <ol class="step-indicator">
            {move || {
                let steps = steps.get();
                let last = steps.len().saturating_sub(1);
                steps
                    .into_iter()
                    .enumerate()
                    .map(|(i, (title, status))| {
                        let modifier = match status {
                            StepStatus::Complete => "complete",
                            StepStatus::Current => "current",
                            StepStatus::Upcoming => "upcoming",
                        };
                        let marker = if status == StepStatus::Complete { "✓".to_owned() } else { (i + 1).to_string() };
                        view! {
                            <li class=format!("step-indicator__step step-indicator__step--{modifier}")>
                                <span class="step-indicator__dot">{marker}</span>
                                <span class="step-indicator__title">{title}</span>
                            </li>
                            {(i < last)
                                .then(|| {
                                    let class = if status == StepStatus::Complete {
                                        "step-indicator__bar step-indicator__bar--done"
                                    } else {
                                        "step-indicator__bar"
                                    };
                                    view! { <li class=class aria-hidden="true"></li> }
                                })}
                        }
                    })
                    .collect_view()
            }}
        </ol>
    }
}
