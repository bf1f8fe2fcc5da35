//! Profile page: account info and sign-out.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::ui::session::use_session_context;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session_context();

    // the cached profile may be stale after a reload
    Effect::new(move |_| {
        spawn_local(async move {
            session.refresh_profile().await;
        });
    });

    let on_logout = move |_| {
        session.logout();
        let navigate = use_navigate();
        navigate("/login", Default::default());
    };

    view! {
        <div class="page">
            <header class="page-header">
                <h1>"Me"</h1>
            </header>

            <section class="card">
                {move || match session.profile.get() {
                    Some(profile) => {
                        view! {
                            <div class="profile-info">
                                <span class="profile-name">
                                    {profile.username.clone()}
                                    {profile.is_admin.then(|| view! { <span class="badge">"admin"</span> })}
                                </span>
                                <span class="record-remark">
                                    {format!("Member since {}", &profile.created_at[..profile.created_at.len().min(10)])}
                                </span>
                            </div>
                        }
                            .into_any()
                    }
                    None => view! { <p class="empty-hint">"Profile not loaded."</p> }.into_any(),
                }}
            </section>

            <Show when=move || session.profile.get().is_some_and(|profile| profile.is_admin)>
                <A href="/admin" attr:class="btn btn-block">"Admin console"</A>
            </Show>

            <button class="btn btn-danger btn-block" on:click=on_logout>
                "Sign out"
            </button>
        </div>
    }
}
