//! Login page; honors the `redirect` query parameter set by the guard.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::ui::auth::LoginForm;

#[component]
pub fn LoginPage() -> impl IntoView {
    let query = use_query_map();

    let on_success = move |_| {
        let target = query
            .get_untracked()
            .get("redirect")
            .filter(|path| path.starts_with('/'))
            .unwrap_or_else(|| "/dashboard".to_owned());
        let navigate = use_navigate();
        navigate(&target, Default::default());
    };

    view! {
        <div class="page page-auth">
            <header class="auth-header">
                <h1>"Mobile Ledger"</h1>
                <p>"Sign in to keep your books"</p>
            </header>

            <LoginForm on_success=Callback::new(on_success)/>

            <p class="auth-switch">
                "No account yet? "
                <A href="/register">"Sign up"</A>
            </p>
        </div>
    }
}
