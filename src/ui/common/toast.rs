//! Transient success notice.

use leptos::prelude::*;

use super::SuccessMessage;

/// Shows the message and clears it again after a short delay.
#[component]
pub fn Flash(message: RwSignal<Option<String>>) -> impl IntoView {
    Effect::new(move |_| {
        if message.get().is_some() {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(2_500).await;
                message.set(None);
            });
        }
    });

    view! { <SuccessMessage message=message/> }
}
