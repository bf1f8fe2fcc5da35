//! Statistics page: month totals and the per-category breakdown.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::records::RecordKind;
use crate::api::statistics::{self, CategoryStat};
use crate::ui::common::{ErrorMessage, Spinner};
use crate::utils::amount::{format_amount, format_percent};
use crate::utils::date;

#[component]
pub fn StatisticsPage() -> impl IntoView {
    let month = RwSignal::new(date::current_month());
    let kind = RwSignal::new(RecordKind::Expense);
    let total = RwSignal::new(0.0f64);
    let breakdown = RwSignal::new(Vec::<CategoryStat>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let month_val = month.get();
        let kind_val = kind.get();
        spawn_local(async move {
            loading.set(true);
            error.set(None);

            let Some((start, end)) = date::month_start_end(&month_val) else {
                loading.set(false);
                return;
            };
            match statistics::by_category(kind_val, &start, &end).await {
                Ok(stats) => {
                    total.set(stats.total_amount);
                    breakdown.set(stats.categories);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    });

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

            <Show when=move || !loading.get() fallback=|| view! { <Spinner class="page-spinner"/> }>
                <section class="summary-card">
                    <span class="summary-label">{move || format!("Total {}", kind.get().label().to_lowercase())}</span>
                    <span class="summary-value">{move || format_amount(total.get())}</span>
                </section>

                <section class="card">
                    <h2>"By category"</h2>
                    <Show
                        when=move || !breakdown.get().is_empty()
                        fallback=|| view! { <p class="empty-hint">"No data for this month."</p> }
                    >
                        {move || {
                            let total_val = total.get();
                            breakdown
                                .get()
                                .into_iter()
                                .map(|stat| {
                                    let width = if total_val > 0.0 {
                                        (stat.total_amount / total_val * 100.0).clamp(0.0, 100.0)
                                    } else {
                                        0.0
                                    };
                                    view! {
                                        <div class="stat-row">
                                            <div class="stat-head">
                                                <span>{stat.category_name.clone()}</span>
                                                <span>
                                                    {format_amount(stat.total_amount)}
                                                    " · "
                                                    {format_percent(stat.total_amount, total_val)}
                                                </span>
                                            </div>
                                            <div class="stat-bar">
                                                <div
                                                    class="stat-bar-fill"
                                                    style=format!("width: {width:.1}%")
                                                ></div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </Show>
                </section>
            </Show>
        </div>
    }
}
