use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page-centered">
            <h1>"404"</h1>
            <p>"This page does not exist."</p>
            <A href="/dashboard" attr:class="btn btn-primary">"Back to home"</A>
        </div>
    }
}
