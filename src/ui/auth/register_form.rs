//! Registration form component.
//!
//! Registration is invitation-only; the code is validated server-side.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::ui::common::{ErrorMessage, FormField};
use crate::ui::session::use_session_context;

#[component]
pub fn RegisterForm(
    /// Callback when registration (and the sign-in that may follow it)
    /// is successful
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
) -> impl IntoView {
    let session = use_session_context();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let invitation_code = RwSignal::new(String::new());

    let username_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let confirm_error = RwSignal::new(None::<String>);
    let code_error = RwSignal::new(None::<String>);

    let username_error_sig: Signal<Option<String>> = username_error.into();
    let password_error_sig: Signal<Option<String>> = password_error.into();
    let confirm_error_sig: Signal<Option<String>> = confirm_error.into();
    let code_error_sig: Signal<Option<String>> = code_error.into();

    // mirrors the server-side constraints so most rejections never leave
    // the device
    let validate = move || {
        let username_val = username.get();
        username_error.set(if username_val.trim().is_empty() {
            Some("Username is required".to_owned())
        } else if username_val.trim().len() < 4 {
            Some("Username must be at least 4 characters".to_owned())
        } else {
            None
        });

        let password_val = password.get();
        password_error.set(if password_val.is_empty() {
            Some("Password is required".to_owned())
        } else if password_val.len() < 6 {
            Some("Password must be at least 6 characters".to_owned())
        } else {
            None
        });

        confirm_error.set((confirm.get() != password.get())
            .then(|| "Passwords do not match".to_owned()));

        code_error.set(
            invitation_code
                .get()
                .trim()
                .is_empty()
                .then(|| "Invitation code is required".to_owned()),
        );

        username_error.get().is_none()
            && password_error.get().is_none()
            && confirm_error.get().is_none()
            && code_error.get().is_none()
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        session.clear_error();

        if !validate() {
            return;
        }

        let username_val = username.get();
        let password_val = password.get();
        let code_val = invitation_code.get();
        spawn_local(async move {
            let outcome = session
                .register(&username_val, &password_val, code_val.trim())
                .await;
            if outcome.is_success() {
                if let Some(callback) = on_success {
                    callback.run(());
                }
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <ErrorMessage error=session.error/>

            <FormField
                label="Username"
                placeholder="At least 4 characters"
                value=username
                on_input=Callback::new(move |value| username.set(value))
                error=username_error_sig
            />
            <FormField
                label="Password"
                input_type="password"
                placeholder="At least 6 characters"
                value=password
                on_input=Callback::new(move |value| password.set(value))
                error=password_error_sig
            />
            <FormField
                label="Confirm Password"
                input_type="password"
                placeholder="Repeat the password"
                value=confirm
                on_input=Callback::new(move |value| confirm.set(value))
                error=confirm_error_sig
            />
            <FormField
                label="Invitation Code"
                placeholder="Ask an admin for a code"
                value=invitation_code
                on_input=Callback::new(move |value| invitation_code.set(value))
                error=code_error_sig
            />

            <button class="btn btn-primary btn-block" type="submit" disabled=move || session.busy.get()>
                {move || if session.busy.get() { "Creating account..." } else { "Sign Up" }}
            </button>
        </form>
    }
}
