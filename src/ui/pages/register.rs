//! Registration page.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::RegisterForm;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let on_success = move |_| {
        let navigate = use_navigate();
        navigate("/dashboard", Default::default());
    };

    view! {
        <div class="page page-auth">
            <header class="auth-header">
                <h1>"Create Account"</h1>
                <p>"An invitation code is required to join"</p>
            </header>

            <RegisterForm on_success=Callback::new(on_success)/>

            <p class="auth-switch">
                "Already registered? "
                <A href="/login">"Sign in"</A>
            </p>
        </div>
    }
}
