//! Static route table. Immutable after definition; the guard reads it,
//! nothing writes it.

/// Default document title when a route carries none.
pub const APP_NAME: &str = "Mobile Ledger";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteName {
    Home,
    Login,
    Register,
    Dashboard,
    AddRecord,
    Records,
    Statistics,
    Budget,
    Projects,
    Admin,
    Profile,
    NotFound,
}

/// Per-route metadata consumed by the navigation guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMeta {
    pub name: RouteName,
    pub path: &'static str,
    pub title: Option<&'static str>,
    pub requires_auth: bool,
    pub requires_admin: bool,
}

impl RouteMeta {
    const fn public(name: RouteName, path: &'static str, title: Option<&'static str>) -> Self {
        RouteMeta {
            name,
            path,
            title,
            requires_auth: false,
            requires_admin: false,
        }
    }

    const fn protected(name: RouteName, path: &'static str, title: &'static str) -> Self {
        RouteMeta {
            name,
            path,
            title: Some(title),
            requires_auth: true,
            requires_admin: false,
        }
    }

    /// Title for the browser tab, falling back to the application name.
    pub fn document_title(&self) -> &'static str {
        self.title.unwrap_or(APP_NAME)
    }
}

/// The application's route table. `/` only redirects to the dashboard; the
/// admin console is the single route gated by the admin capability flag.
pub const ROUTES: &[RouteMeta] = &[
    RouteMeta::public(RouteName::Home, "/", None),
    RouteMeta::public(RouteName::Login, "/login", Some("Sign In")),
    RouteMeta::public(RouteName::Register, "/register", Some("Sign Up")),
    RouteMeta::protected(RouteName::Dashboard, "/dashboard", "Home"),
    RouteMeta::protected(RouteName::AddRecord, "/add", "Add Record"),
    RouteMeta::protected(RouteName::Records, "/records", "Records"),
    RouteMeta::protected(RouteName::Statistics, "/statistics", "Statistics"),
    RouteMeta::protected(RouteName::Budget, "/budget", "Budget"),
    RouteMeta::protected(RouteName::Projects, "/projects", "Projects"),
    RouteMeta {
        name: RouteName::Admin,
        path: "/admin",
        title: Some("Admin Console"),
        requires_auth: true,
        requires_admin: true,
    },
    RouteMeta::protected(RouteName::Profile, "/profile", "Me"),
];

/// Fallback metadata for unmatched paths.
pub const NOT_FOUND: RouteMeta = RouteMeta::public(RouteName::NotFound, "/404", None);

pub fn route_by_name(name: RouteName) -> &'static RouteMeta {
    ROUTES
        .iter()
        .find(|route| route.name == name)
        .unwrap_or(&NOT_FOUND)
}

pub fn route_by_path(path: &str) -> Option<&'static RouteMeta> {
    let bare = path.split(['?', '#']).next().unwrap_or(path);
    ROUTES.iter().find(|route| route.path == bare)
}
