//! Admin console: user management and invitation codes.
//!
//! The route itself is admin-gated by the navigation guard; the endpoints
//! enforce the same on the server side.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::admin;
use crate::api::invitations::{self, InvitationCode, InvitationCreate};
use crate::core::UserProfile;
use crate::ui::common::{ErrorMessage, Spinner};
use crate::ui::session::use_session_context;

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = use_session_context();

    let users = RwSignal::new(Vec::<UserProfile>::new());
    let codes = RwSignal::new(Vec::<InvitationCode>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0u32);

    Effect::new(move |_| {
        reload.track();
        spawn_local(async move {
            loading.set(true);
            error.set(None);

            let (users_result, codes_result) =
                futures::join!(admin::list_users(), invitations::list());

            match users_result {
                Ok(list) => users.set(list.users),
                Err(err) => error.set(Some(err.to_string())),
            }
            if let Ok(list) = codes_result {
                codes.set(list);
            }
            loading.set(false);
        });
    });

    let toggle_user = move |user_id: i64, enable: bool| {
        spawn_local(async move {
            let result = if enable {
                admin::enable_user(user_id).await
            } else {
                admin::disable_user(user_id).await
            };
            match result {
                Ok(()) => reload.update(|n| *n += 1),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let delete_user = move |user_id: i64| {
        spawn_local(async move {
            match admin::remove_user(user_id).await {
                Ok(()) => reload.update(|n| *n += 1),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let mint_code = move |_| {
        spawn_local(async move {
            match invitations::create(&InvitationCreate { count: 1 }).await {
                Ok(_) => reload.update(|n| *n += 1),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let delete_code = move |id: i64| {
        spawn_local(async move {
            match invitations::remove(id).await {
                Ok(()) => reload.update(|n| *n += 1),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="page">
            <header class="page-header">
                <h1>"Admin Console"</h1>
            </header>

            <ErrorMessage error=error/>

            <Show when=move || !loading.get() fallback=|| view! { <Spinner class="page-spinner"/> }>
                <section class="card">
                    <h2>"Users"</h2>
                    {move || {
                        let own_id = session.profile.get().map(|profile| profile.id);
                        users
                            .get()
                            .into_iter()
                            .map(|user| {
                                let user_id = user.id;
                                let is_active = user.is_active;
                                let is_self = own_id == Some(user_id);
                                view! {
                                    <div class="record-row">
                                        <div class="record-main">
                                            <span class="record-category">
                                                {user.username.clone()}
                                                {user.is_admin.then(|| view! { <span class="badge">"admin"</span> })}
                                            </span>
                                            <span class="record-remark">
                                                {if is_active { "active" } else { "disabled" }}
                                            </span>
                                        </div>
                                        <Show when=move || !is_self>
                                            <div class="record-side">
                                                <button
                                                    class="btn btn-ghost"
                                                    on:click=move |_| toggle_user(user_id, !is_active)
                                                >
                                                    {if is_active { "Disable" } else { "Enable" }}
                                                </button>
                                                <button
                                                    class="btn btn-ghost btn-danger"
                                                    on:click=move |_| delete_user(user_id)
                                                >
                                                    "Delete"
                                                </button>
                                            </div>
                                        </Show>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </section>

                <section class="card">
                    <div class="card-title-row">
                        <h2>"Invitation codes"</h2>
                        <button class="btn btn-primary" on:click=mint_code>"Generate"</button>
                    </div>
                    <Show
                        when=move || !codes.get().is_empty()
                        fallback=|| view! { <p class="empty-hint">"No invitation codes."</p> }
                    >
                        {move || {
                            codes
                                .get()
                                .into_iter()
                                .map(|code| {
                                    let id = code.id;
                                    let used = code.is_used;
                                    view! {
                                        <div class="record-row">
                                            <div class="record-main">
                                                <span class="record-category code">{code.code.clone()}</span>
                                                <span class="record-remark">
                                                    {if used { "used" } else { "available" }}
                                                </span>
                                            </div>
                                            <Show when=move || !used>
                                                <button
                                                    class="btn btn-ghost btn-danger"
                                                    on:click=move |_| delete_code(id)
                                                >
                                                    "Delete"
                                                </button>
                                            </Show>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </Show>
                </section>
            </Show>
        </div>
    }
}
