//! Projects page: shared-expense projects with budget usage.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::projects::{self, Project, ProjectCreate};
use crate::ui::common::{ErrorMessage, FormField, Spinner};
use crate::utils::amount::{format_amount, format_percent};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let project_list = RwSignal::new(Vec::<Project>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0u32);

    let new_name = RwSignal::new(String::new());
    let new_budget = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    Effect::new(move |_| {
        reload.track();
        spawn_local(async move {
            loading.set(true);
            error.set(None);
            match projects::list().await {
                Ok(list) => project_list.set(list),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    });

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let name_val = new_name.get().trim().to_owned();
        if name_val.is_empty() {
            error.set(Some("Name the project".to_owned()));
            return;
        }
        let budget_val = new_budget.get().trim().parse::<f64>().unwrap_or(0.0);

        let data = ProjectCreate {
            name: name_val,
            description: None,
            budget: budget_val.max(0.0),
            member_count: 1,
            start_date: None,
            end_date: None,
        };
        spawn_local(async move {
            saving.set(true);
            match projects::create(&data).await {
                Ok(_) => {
                    new_name.set(String::new());
                    new_budget.set(String::new());
                    reload.update(|n| *n += 1);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            saving.set(false);
        });
    };

    let delete_project = move |id: i64| {
        spawn_local(async move {
            match projects::remove(id).await {
                Ok(()) => reload.update(|n| *n += 1),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="page">
            <header class="page-header">
                <h1>"Projects"</h1>
            </header>

            <ErrorMessage error=error/>

            <Show when=move || !loading.get() fallback=|| view! { <Spinner class="page-spinner"/> }>
                <section class="card">
                    <Show
                        when=move || !project_list.get().is_empty()
                        fallback=|| view! { <p class="empty-hint">"No projects yet."</p> }
                    >
                        {move || {
                            project_list
                                .get()
                                .into_iter()
                                .map(|project| {
                                    let id = project.id;
                                    let spent = project
                                        .stats
                                        .as_ref()
                                        .map(|stats| stats.total_spent)
                                        .unwrap_or_default();
                                    view! {
                                        <div class="record-row">
                                            <div class="record-main">
                                                <span class="record-category">{project.name.clone()}</span>
                                                <span class="record-remark">
                                                    {format_amount(spent)}
                                                    " spent · "
                                                    {format_percent(spent, project.budget)}
                                                    " of budget · "
                                                    {project.status.clone()}
                                                </span>
                                            </div>
                                            <button
                                                class="btn btn-ghost btn-danger"
                                                on:click=move |_| delete_project(id)
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
                    <h2>"New project"</h2>
                    <form on:submit=on_create>
                        <FormField
                            label="Name"
                            placeholder="e.g. Road trip"
                            value=new_name
                            on_input=Callback::new(move |value| new_name.set(value))
                        />
                        <FormField
                            label="Budget"
                            input_type="number"
                            placeholder="0.00"
                            value=new_budget
                            on_input=Callback::new(move |value| new_budget.set(value))
                        />
                        <button class="btn btn-primary btn-block" type="submit" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Create project" }}
                        </button>
                    </form>
                </section>
            </Show>
        </div>
    }
}
