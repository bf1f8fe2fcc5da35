use leptos::prelude::*;

/// Form field with label, input and inline error.
#[component]
pub fn FormField(
    /// Field label text
    #[prop(into)]
    label: String,
    /// Input type (text, password, number, date, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether the field is disabled
    #[prop(default = false)]
    disabled: bool,
    /// Optional error message to display
    #[prop(optional, into)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-label">{label}</label>
            <input
                type=input_type
                class="form-input"
                class:form-input-invalid=move || error.as_ref().and_then(|e| e.get()).is_some()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=disabled
            />
            {move || {
                error.as_ref().and_then(|e| e.get()).map(|message| {
                    view! { <div class="form-error">{message}</div> }
                })
            }}
        </div>
    }
}
