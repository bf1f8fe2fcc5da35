use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::core::{APP_NAME, RouteName};
use crate::ui::pages::{
    AddRecordPage, AdminPage, BudgetPage, DashboardPage, LoginPage, NotFoundPage, ProfilePage,
    ProjectsPage, RecordsPage, RegisterPage, StatisticsPage,
};
use crate::ui::{RouteShell, TabBar, provide_session_context};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Session context is the single dependency the route guard reads.
    provide_session_context();

    view! {
        <Title text=APP_NAME/>

        <Router>
            <main class="app-viewport">
                <Routes fallback=|| {
                    view! {
                        <RouteShell name=RouteName::NotFound>
                            <NotFoundPage/>
                        </RouteShell>
                    }
                }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/dashboard"/> }/>
                    <Route
                        path=path!("/login")
                        view=|| {
                            view! {
                                <RouteShell name=RouteName::Login>
                                    <LoginPage/>
                                </RouteShell>
                            }
                        }
                    />
                    <Route
                        path=path!("/register")
                        view=|| {
                            view! {
                                <RouteShell name=RouteName::Register>
                                    <RegisterPage/>
                                </RouteShell>
                            }
                        }
                    />
                    <Route
                        path=path!("/dashboard")
                        view=|| {
                            view! {
                                <RouteShell name=RouteName::Dashboard>
                                    <DashboardPage/>
                                </RouteShell>
                            }
                        }
                    />
                    <Route
                        path=path!("/add")
                        view=|| {
                            view! {
                                <RouteShell name=RouteName::AddRecord>
                                    <AddRecordPage/>
                                </RouteShell>
                            }
                        }
                    />
                    <Route
                        path=path!("/records")
                        view=|| {
                            view! {
                                <RouteShell name=RouteName::Records>
                                    <RecordsPage/>
                                </RouteShell>
                            }
                        }
                    />
                    <Route
                        path=path!("/statistics")
                        view=|| {
                            view! {
                                <RouteShell name=RouteName::Statistics>
                                    <StatisticsPage/>
                                </RouteShell>
                            }
                        }
                    />
                    <Route
                        path=path!("/budget")
                        view=|| {
                            view! {
                                <RouteShell name=RouteName::Budget>
                                    <BudgetPage/>
                                </RouteShell>
                            }
                        }
                    />
                    <Route
                        path=path!("/projects")
                        view=|| {
                            view! {
                                <RouteShell name=RouteName::Projects>
                                    <ProjectsPage/>
                                </RouteShell>
                            }
                        }
                    />
                    <Route
                        path=path!("/admin")
                        view=|| {
                            view! {
                                <RouteShell name=RouteName::Admin>
                                    <AdminPage/>
                                </RouteShell>
                            }
                        }
                    />
                    <Route
                        path=path!("/profile")
                        view=|| {
                            view! {
                                <RouteShell name=RouteName::Profile>
                                    <ProfilePage/>
                                </RouteShell>
                            }
                        }
                    />
                </Routes>
            </main>
            <TabBar/>
        </Router>
    }
}
