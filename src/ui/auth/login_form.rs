//! Login form component.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::ui::common::{ErrorMessage, FormField};
use crate::ui::session::use_session_context;

/// Login form; reports success through the callback so the page decides
/// where to go next.
#[component]
pub fn LoginForm(
    /// Callback when login is successful
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
) -> impl IntoView {
    let session = use_session_context();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let username_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);

    let username_error_sig: Signal<Option<String>> = username_error.into();
    let password_error_sig: Signal<Option<String>> = password_error.into();

    let validate = move || {
        username_error.set(
            username
                .get()
                .trim()
                .is_empty()
                .then(|| "Username is required".to_owned()),
        );
        password_error.set(
            password
                .get()
                .is_empty()
                .then(|| "Password is required".to_owned()),
        );
        username_error.get().is_none() && password_error.get().is_none()
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        session.clear_error();

        if !validate() {
            return;
        }

        let username_val = username.get();
        let password_val = password.get();
        spawn_local(async move {
            if session.login(&username_val, &password_val).await.is_success() {
                if let Some(callback) = on_success {
                    callback.run(());
                }
            }
            // failure message is already in the session context
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <ErrorMessage error=session.error/>

            <FormField
                label="Username"
                placeholder="Username"
                value=username
                on_input=Callback::new(move |value| username.set(value))
                error=username_error_sig
            />
            <FormField
                label="Password"
                input_type="password"
                placeholder="Password"
                value=password
                on_input=Callback::new(move |value| password.set(value))
                error=password_error_sig
            />

            <button class="btn btn-primary btn-block" type="submit" disabled=move || session.busy.get()>
                {move || if session.busy.get() { "Signing in..." } else { "Sign In" }}
            </button>
        </form>
    }
}
