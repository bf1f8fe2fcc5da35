use leptos::prelude::*;

/// Loading spinner.
#[component]
pub fn Spinner(
    /// Additional CSS classes
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    view! { <div class=format!("spinner {class}")></div> }
}
