//! Navigation guard: decides, for every attempted transition, whether to
//! let it through or where to send the user instead.
//!
//! The decision is a pure function of the target route's metadata and a
//! read-only view of the session, so it is evaluated fresh per attempt and
//! never left undecided.

use super::routes::{RouteMeta, RouteName, route_by_name};

/// The session fields the guard is allowed to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionView {
    pub token_present: bool,
    /// `None` while no profile is cached (not fetched yet, or the lookup
    /// failed); treated as not-admin.
    pub is_admin: Option<bool>,
}

/// Terminal decision for one navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    Allow,
    Redirect {
        to: RouteName,
        /// Path to come back to after signing in; only set on the
        /// login redirect.
        redirect: Option<String>,
    },
}

impl NavigationDecision {
    fn redirect_to(to: RouteName) -> Self {
        NavigationDecision::Redirect { to, redirect: None }
    }

    /// Target href for a redirect decision, `None` when allowed through.
    pub fn href(&self) -> Option<String> {
        match self {
            NavigationDecision::Allow => None,
            NavigationDecision::Redirect { to, redirect } => {
                let base = route_by_name(*to).path;
                Some(match redirect {
                    Some(back) => format!("{base}?redirect={}", encode_component(back)),
                    None => base.to_owned(),
                })
            }
        }
    }
}

/// Evaluate one navigation attempt to `route` (full path `path`) against
/// session view `session`. Rules run in fixed order; the first match wins.
pub fn decide(route: &RouteMeta, path: &str, session: SessionView) -> NavigationDecision {
    // 1. Auth-gated route without a token: off to login, remembering where
    //    the user was headed.
    if route.requires_auth && !session.token_present {
        return NavigationDecision::Redirect {
            to: RouteName::Login,
            redirect: Some(path.to_owned()),
        };
    }

    // 2. Admin-gated route: the cached profile must say admin. A missing
    //    profile or a failed lookup fails closed.
    if route.requires_admin && session.token_present && session.is_admin != Some(true) {
        return NavigationDecision::redirect_to(RouteName::Dashboard);
    }

    // 3. Signed-in users have no business on the login/register screens.
    if matches!(route.name, RouteName::Login | RouteName::Register) && session.token_present {
        return NavigationDecision::redirect_to(RouteName::Dashboard);
    }

    NavigationDecision::Allow
}

/// Minimal percent-encoding for a path carried in a query parameter.
/// `/` is left readable.
fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
