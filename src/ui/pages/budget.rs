//! Budget page: current period usage plus a minimal create form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::budgets::{self, Budget, BudgetCreate, BudgetSummary};
use crate::ui::common::{ErrorMessage, Flash, FormField, Spinner};
use crate::utils::amount::format_amount;

#[component]
pub fn BudgetPage() -> impl IntoView {
    let budget_list = RwSignal::new(Vec::<Budget>::new());
    let summary = RwSignal::new(None::<BudgetSummary>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let flash = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0u32);

    let new_name = RwSignal::new(String::new());
    let new_amount = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    Effect::new(move |_| {
        reload.track();
        spawn_local(async move {
            loading.set(true);
            error.set(None);

            let (list_result, summary_result) =
                futures::join!(budgets::list(), budgets::current_summary());

            match list_result {
                Ok(list) => budget_list.set(list.budgets),
                Err(err) => error.set(Some(err.to_string())),
            }
            if let Ok(current) = summary_result {
                summary.set(Some(current));
            }
            loading.set(false);
        });
    });

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let name_val = new_name.get().trim().to_owned();
        if name_val.is_empty() {
            error.set(Some("Name the budget".to_owned()));
            return;
        }
        let Ok(amount_val) = new_amount.get().trim().parse::<f64>() else {
            error.set(Some("Enter a valid amount".to_owned()));
            return;
        };
        if amount_val <= 0.0 {
            error.set(Some("Amount must be greater than zero".to_owned()));
            return;
        }

        let data = BudgetCreate {
            category_id: None,
            name: name_val,
            amount: amount_val,
            period: "monthly".to_owned(),
            start_date: None,
            end_date: None,
            alert_threshold: 80.0,
        };
        spawn_local(async move {
            saving.set(true);
            match budgets::create(&data).await {
                Ok(_) => {
                    flash.set(Some("Budget created".to_owned()));
                    new_name.set(String::new());
                    new_amount.set(String::new());
                    reload.update(|n| *n += 1);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            saving.set(false);
        });
    };

    let delete_budget = move |id: i64| {
        spawn_local(async move {
            match budgets::remove(id).await {
                Ok(()) => reload.update(|n| *n += 1),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="page">
            <header class="page-header">
                <h1>"Budget"</h1>
            </header>

            <ErrorMessage error=error/>
            <Flash message=flash/>

            <Show when=move || !loading.get() fallback=|| view! { <Spinner class="page-spinner"/> }>
                {move || {
                    summary.get().map(|current| {
                        let used = current.overall_usage_rate.clamp(0.0, 100.0);
                        view! {
                            <section class="summary-card">
                                <span class="summary-label">
                                    {format!("{} to {}", current.period_start, current.period_end)}
                                </span>
                                <span class="summary-value">
                                    {format_amount(current.total_spent)}
                                    " of "
                                    {format_amount(current.total_budget)}
                                </span>
                                <div class="stat-bar">
                                    <div class="stat-bar-fill" style=format!("width: {used:.1}%")></div>
                                </div>
                            </section>
                        }
                    })
                }}

                <section class="card">
                    <h2>"Budgets"</h2>
                    <Show
                        when=move || !budget_list.get().is_empty()
                        fallback=|| view! { <p class="empty-hint">"No budgets set up yet."</p> }
                    >
                        {move || {
                            budget_list
                                .get()
                                .into_iter()
                                .map(|budget| {
                                    let id = budget.id;
                                    let spent = budget
                                        .status
                                        .as_ref()
                                        .map(|status| status.spent)
                                        .unwrap_or_default();
                                    view! {
                                        <div class="record-row">
                                            <div class="record-main">
                                                <span class="record-category">{budget.name.clone()}</span>
                                                <span class="record-remark">
                                                    {format_amount(spent)}
                                                    " / "
                                                    {format_amount(budget.amount)}
                                                </span>
                                            </div>
                                            <button
                                                class="btn btn-ghost btn-danger"
                                                on:click=move |_| delete_budget(id)
                                            >
                                                "Delete"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </Show>
                </section>

                <section class="card">
                    <h2>"New monthly budget"</h2>
                    <form on:submit=on_create>
                        <FormField
                            label="Name"
                            placeholder="e.g. Groceries"
                            value=new_name
                            on_input=Callback::new(move |value| new_name.set(value))
                        />
                        <FormField
                            label="Amount"
                            input_type="number"
                            placeholder="0.00"
                            value=new_amount
                            on_input=Callback::new(move |value| new_amount.set(value))
                        />
                        <button class="btn btn-primary btn-block" type="submit" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Create budget" }}
                        </button>
                    </form>
                </section>
            </Show>
        </div>
    }
}
