//! Reusable message components for errors and success notices.

use leptos::prelude::*;

/// Error message, shown while the signal holds a value.
#[component]
pub fn ErrorMessage(
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="message message-error">
                <span>{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// Success message, shown while the signal holds a value.
#[component]
pub fn SuccessMessage(
    #[prop(into)]
    message: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="message message-success">
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}
