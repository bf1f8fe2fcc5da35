//! Bottom tab bar for the main sections of the mobile layout.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::ui::session::use_session_context;

const TABS: &[(&str, &str)] = &[
    ("/dashboard", "Home"),
    ("/records", "Records"),
    ("/add", "Add"),
    ("/statistics", "Stats"),
    ("/profile", "Me"),
];

#[component]
pub fn TabBar() -> impl IntoView {
    let session = use_session_context();
    let pathname = use_location().pathname;

    view! {
        <Show when=move || session.is_authenticated()>
            <nav class="tab-bar">
                {TABS
                    .iter()
                    .map(|(path, label)| {
                        let path = *path;
                        view! {
                            <A href=path attr:class="tab-item">
                                <span class:tab-active=move || pathname.get() == path>
                                    {*label}
                                </span>
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
        </Show>
    }
}
