//! Core session and navigation logic, independent of the DOM.

pub mod credential;
pub mod guard;
pub mod routes;
pub mod session;

#[cfg(test)]
mod tests;

pub use credential::{Credential, CredentialError, RawAuthPayload, normalize_auth_response};
pub use guard::{NavigationDecision, SessionView, decide};
pub use routes::{APP_NAME, NOT_FOUND, ROUTES, RouteMeta, RouteName, route_by_name, route_by_path};
pub use session::{
    AuthBackend, AuthError, AuthOutcome, Session, SessionSnapshot, TokenVault, UserProfile,
};
