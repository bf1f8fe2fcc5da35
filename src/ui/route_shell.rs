//! Router-side enforcement of the navigation guard.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::{use_location, use_navigate};

use crate::core::{NavigationDecision, RouteName, decide, route_by_name};
use crate::ui::common::Spinner;
use crate::ui::session::use_session_context;

/// Wraps every routed page. Sets the tab title from the route table, runs
/// the guard against the live session and either renders the page or
/// navigates to the decided target. Reactive: a token cleared mid-session
/// (forced logout) re-runs the guard without any page action.
#[component]
pub fn RouteShell(name: RouteName, children: ChildrenFn) -> impl IntoView {
    let session = use_session_context();
    let location = use_location();
    let (pathname, search) = (location.pathname, location.search);
    let meta = route_by_name(name);

    let decision = Memo::new(move |_| {
        // Path is read untracked: a fresh shell mounts per navigation, and
        // only session changes should re-run the guard for a mounted page.
        let pathname = pathname.get_untracked();
        let search = search.get_untracked();
        let full_path = if search.is_empty() {
            pathname
        } else {
            format!("{pathname}?{search}")
        };
        decide(meta, &full_path, session.guard_view())
    });

    Effect::new(move |_| {
        if let Some(href) = decision.get().href() {
            let navigate = use_navigate();
            navigate(&href, Default::default());
        }
    });

    view! {
        // title applies on every attempt, regardless of the decision
        <Title text=meta.document_title()/>
        <Show
            when=move || decision.get() == NavigationDecision::Allow
            fallback=|| {
                view! {
                    <div class="route-shell-wait">
                        <Spinner/>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
