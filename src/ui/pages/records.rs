//! Records page: monthly bill with summary header and per-record delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::records::{self, LedgerRecord, RecordQuery, RecordSummary};
use crate::ui::common::{ErrorMessage, Flash, Spinner};
use crate::ui::pages::dashboard::RecordRow;
use crate::utils::amount::format_amount;
use crate::utils::date;

fn month_query(month: &str) -> Option<RecordQuery> {
    let (start, end) = date::month_start_end(month)?;
    Some(RecordQuery {
        page: Some(1),
        page_size: Some(200),
        start_date: start.parse().ok(),
        end_date: end.parse().ok(),
        ..RecordQuery::default()
    })
}

#[component]
pub fn RecordsPage() -> impl IntoView {
    let month = RwSignal::new(date::current_month());
    let list = RwSignal::new(Vec::<LedgerRecord>::new());
    let summary = RwSignal::new(RecordSummary::default());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let flash = RwSignal::new(None::<String>);
    // bumped after a delete to reload the month
    let reload = RwSignal::new(0u32);

    Effect::new(move |_| {
        let month_val = month.get();
        reload.track();
        spawn_local(async move {
            loading.set(true);
            error.set(None);

            let Some(query) = month_query(&month_val) else {
                loading.set(false);
                return;
            };
            let (list_result, summary_result) =
                futures::join!(records::list(&query), records::summary(&query));

            match list_result {
                Ok(page) => list.set(page.records),
                Err(err) => error.set(Some(err.to_string())),
            }
            if let Ok(totals) = summary_result {
                summary.set(totals);
            }
            loading.set(false);
        });
    });

    let delete_record = move |id: i64| {
        spawn_local(async move {
            match records::remove(id).await {
                Ok(()) => {
                    flash.set(Some("Record deleted".to_owned()));
                    reload.update(|n| *n += 1);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let shift_month = move |forward: bool| {
        let current = month.get();
        let next = if forward {
            date::next_month(&current)
        } else {
            date::previous_month(&current)
        };
        if let Some(next) = next {
            month.set(next);
        }
    };

    view! {
        <div class="page">
            <header class="page-header month-switcher">
                <button class="btn btn-ghost" on:click=move |_| shift_month(false)>"<"</button>
                <h1>{move || month.get()}</h1>
                <button class="btn btn-ghost" on:click=move |_| shift_month(true)>">"</button>
            </header>

            <section class="summary-strip">
                <span>
                    "In " <span class="amount-income">{move || format_amount(summary.get().total_income)}</span>
                </span>
                <span>
                    "Out " <span class="amount-expense">{move || format_amount(summary.get().total_expense)}</span>
                </span>
                <span>
                    "Balance " {move || format_amount(summary.get().balance)}
                </span>
            </section>

            <ErrorMessage error=error/>
            <Flash message=flash/>

            <Show when=move || !loading.get() fallback=|| view! { <Spinner class="page-spinner"/> }>
                <Show
                    when=move || !list.get().is_empty()
                    fallback=|| view! { <p class="empty-hint">"Nothing recorded this month."</p> }
                >
                    {move || {
                        list.get()
                            .into_iter()
                            .map(|record| {
                                let id = record.id;
                                view! {
                                    <div class="record-line">
                                        <RecordRow record=record/>
                                        <button
                                            class="btn btn-ghost btn-danger"
                                            on:click=move |_| delete_record(id)
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </Show>
            </Show>
        </div>
    }
}
