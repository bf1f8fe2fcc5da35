//! Add-record form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::categories::{self, Category};
use crate::api::projects::{self, Project};
use crate::api::records::{self, RecordCreate, RecordKind};
use crate::ui::common::{ErrorMessage, FormField};
use crate::utils::date;

#[component]
pub fn AddRecordPage() -> impl IntoView {
    let kind = RwSignal::new(RecordKind::Expense);
    let amount = RwSignal::new(String::new());
    let category_id = RwSignal::new(None::<i64>);
    let project_id = RwSignal::new(None::<i64>);
    let record_date = RwSignal::new(date::format_date(date::today()));
    let remark = RwSignal::new(String::new());

    let category_options = RwSignal::new(Vec::<Category>::new());
    let project_options = RwSignal::new(Vec::<Project>::new());
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // categories follow the selected direction; the stale pick is dropped
    Effect::new(move |_| {
        let kind_val = kind.get();
        spawn_local(async move {
            match categories::list(Some(kind_val)).await {
                Ok(list) => {
                    if !list.iter().any(|c| Some(c.id) == category_id.get_untracked()) {
                        category_id.set(list.first().map(|c| c.id));
                    }
                    category_options.set(list);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    });

    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(list) = projects::list().await {
                project_options.set(list.into_iter().filter(|p| p.status == "active").collect());
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let Ok(amount_val) = amount.get().trim().parse::<f64>() else {
            error.set(Some("Enter a valid amount".to_owned()));
            return;
        };
        if amount_val <= 0.0 {
            error.set(Some("Amount must be greater than zero".to_owned()));
            return;
        }
        let Some(category_val) = category_id.get() else {
            error.set(Some("Pick a category".to_owned()));
            return;
        };
        let Ok(date_val) = record_date.get().parse() else {
            error.set(Some("Pick a valid date".to_owned()));
            return;
        };

        let remark_val = remark.get();
        let data = RecordCreate {
            amount: amount_val,
            kind: kind.get(),
            category_id: category_val,
            remark: (!remark_val.trim().is_empty()).then(|| remark_val.trim().to_owned()),
            project_id: project_id.get(),
            record_date: date_val,
        };

        spawn_local(async move {
            saving.set(true);
            match records::create(&data).await {
                Ok(_) => {
                    let navigate = use_navigate();
                    navigate("/records", Default::default());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            saving.set(false);
        });
    };

    view! {
        <div class="page">
            <header class="page-header">
                <h1>"Add Record"</h1>
            </header>

            <div class="kind-toggle">
                <button
                    class="btn"
                    class:btn-primary=move || kind.get() == RecordKind::Expense
                    on:click=move |_| kind.set(RecordKind::Expense)
                >
                    "Expense"
                </button>
                <button
                    class="btn"
                    class:btn-primary=move || kind.get() == RecordKind::Income
                    on:click=move |_| kind.set(RecordKind::Income)
                >
                    "Income"
                </button>
            </div>

            <ErrorMessage error=error/>

            <form class="record-form" on:submit=on_submit>
                <FormField
                    label="Amount"
                    input_type="number"
                    placeholder="0.00"
                    value=amount
                    on_input=Callback::new(move |value| amount.set(value))
                />

                <div class="form-field">
                    <label class="form-label">"Category"</label>
                    <select
                        class="form-input"
                        on:change=move |ev| {
                            category_id.set(event_target_value(&ev).parse().ok());
                        }
                    >
                        {move || {
                            let selected = category_id.get();
                            category_options
                                .get()
                                .into_iter()
                                .map(|category| {
                                    view! {
                                        <option
                                            value=category.id.to_string()
                                            selected={selected == Some(category.id)}
                                        >
                                            {category.name.clone()}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>

                <FormField
                    label="Date"
                    input_type="date"
                    value=record_date
                    on_input=Callback::new(move |value| record_date.set(value))
                />

                <Show when=move || !project_options.get().is_empty()>
                    <div class="form-field">
                        <label class="form-label">"Project (optional)"</label>
                        <select
                            class="form-input"
                            on:change=move |ev| {
                                project_id.set(event_target_value(&ev).parse().ok());
                            }
                        >
                            <option value="">"None"</option>
                            {move || {
                                project_options
                                    .get()
                                    .into_iter()
                                    .map(|project| {
                                        view! {
                                            <option value=project.id.to_string()>
                                                {project.name.clone()}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </div>
                </Show>

                <FormField
                    label="Remark"
                    placeholder="What was this for?"
                    value=remark
                    on_input=Callback::new(move |value| remark.set(value))
                />

                <button class="btn btn-primary btn-block" type="submit" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </button>
            </form>
        </div>
    }
}
