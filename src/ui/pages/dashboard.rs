//! Dashboard: month overview, budget alerts and the latest records.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api::budgets::BudgetAlert;
use crate::api::records::{LedgerRecord, RecordKind, RecordQuery};
use crate::api::statistics::OverviewStats;
use crate::api::{budgets, records, statistics};
use crate::ui::common::{ErrorMessage, Spinner};
use crate::ui::session::use_session_context;
use crate::utils::amount::format_amount;
use crate::utils::date;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session_context();

    let overview = RwSignal::new(OverviewStats::default());
    let alerts = RwSignal::new(Vec::<BudgetAlert>::new());
    let recent = RwSignal::new(Vec::<LedgerRecord>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            loading.set(true);
            error.set(None);

            let recent_query = RecordQuery {
                page: Some(1),
                page_size: Some(5),
                ..RecordQuery::default()
            };
            let (overview_result, alerts_result, recent_result) = futures::join!(
                statistics::overview(),
                budgets::alerts(),
                records::list(&recent_query),
            );

            match overview_result {
                Ok(stats) => overview.set(stats),
                Err(err) => error.set(Some(err.to_string())),
            }
            // alerts and the record preview are decorative on this page
            if let Ok(list) = alerts_result {
                alerts.set(list);
            }
            if let Ok(page) = recent_result {
                recent.set(page.records);
            }
            loading.set(false);
        });
    });

    view! {
        <div class="page">
            <header class="page-header">
                <h1>
                    {move || match session.username() {
                        Some(name) => format!("Hi, {name}"),
                        None => "Hi".to_owned(),
                    }}
                </h1>
                <span class="page-subtitle">{date::current_month()}</span>
            </header>

            <ErrorMessage error=error/>

            <Show when=move || !loading.get() fallback=|| view! { <Spinner class="page-spinner"/> }>
                <section class="summary-card">
                    <div class="summary-main">
                        <span class="summary-label">"Month balance"</span>
                        <span class="summary-value">
                            {move || format_amount(overview.get().month_balance)}
                        </span>
                    </div>
                    <div class="summary-split">
                        <div>
                            <span class="summary-label">"Income"</span>
                            <span class="amount-income">
                                {move || format_amount(overview.get().month_income)}
                            </span>
                        </div>
                        <div>
                            <span class="summary-label">"Expense"</span>
                            <span class="amount-expense">
                                {move || format_amount(overview.get().month_expense)}
                            </span>
                        </div>
                    </div>
                </section>

                <Show when=move || !alerts.get().is_empty()>
                    <section class="card">
                        <h2>"Budget alerts"</h2>
                        {move || {
                            alerts
                                .get()
                                .into_iter()
                                .map(|alert| {
                                    view! {
                                        <div class="alert-row">
                                            <span>{alert.budget_name.clone()}</span>
                                            <span class="amount-expense">
                                                {format!("{:.0}% used", alert.usage_rate)}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </section>
                </Show>

                <section class="card">
                    <div class="card-title-row">
                        <h2>"Recent records"</h2>
                        <A href="/records">"All records"</A>
                    </div>
                    <Show
                        when=move || !recent.get().is_empty()
                        fallback=|| view! { <p class="empty-hint">"No records yet. Add your first one!"</p> }
                    >
                        {move || {
                            recent
                                .get()
                                .into_iter()
                                .map(|record| view! { <RecordRow record=record/> })
                                .collect_view()
                        }}
                    </Show>
                </section>

                <A href="/add" attr:class="btn btn-primary btn-block">"Add a record"</A>
            </Show>
        </div>
    }
}

/// One record line, shared look with the records page.
#[component]
pub fn RecordRow(record: LedgerRecord) -> impl IntoView {
    let signed = match record.kind {
        RecordKind::Income => format!("+{}", format_amount(record.amount)),
        RecordKind::Expense => format!("-{}", format_amount(record.amount)),
    };
    let amount_class = match record.kind {
        RecordKind::Income => "amount-income",
        RecordKind::Expense => "amount-expense",
    };
    let category = record
        .category
        .as_ref()
        .map(|category| category.name.clone())
        .unwrap_or_else(|| record.kind.label().to_owned());

    view! {
        <div class="record-row">
            <div class="record-main">
                <span class="record-category">{category}</span>
                {record
                    .remark
                    .clone()
                    .map(|remark| view! { <span class="record-remark">{remark}</span> })}
            </div>
            <div class="record-side">
                <span class=amount_class>{signed}</span>
                <span class="record-date">{date::day_label(record.record_date)}</span>
            </div>
        </div>
    }
}
