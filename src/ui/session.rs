//! Reactive session context.
//!
//! Wraps one [`Session`] instance in signals so views and the route guard
//! can react to auth changes. The session itself is an explicit dependency
//! held in the context, not ambient global state; every mutation goes
//! through it and the signals are re-synced from a snapshot afterwards.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::api::auth::HttpAuthBackend;
use crate::api::vault::BrowserVault;
use crate::core::{AuthOutcome, Session, SessionView, UserProfile};

pub type AppSession = Session<HttpAuthBackend, BrowserVault>;

/// Session context provided at the application root.
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: StoredValue<Rc<AppSession>, LocalStorage>,
    authenticated: RwSignal<bool>,
    /// Cached user profile, `None` until fetched or after logout.
    pub profile: RwSignal<Option<UserProfile>>,
    /// True while a login/register call is in flight; UI suppression only.
    pub busy: RwSignal<bool>,
    /// Message from the last failed operation.
    pub error: RwSignal<Option<String>>,
}

impl SessionContext {
    fn new() -> Self {
        let session = Rc::new(Session::new(HttpAuthBackend, BrowserVault));
        let snapshot = session.snapshot();
        SessionContext {
            session: StoredValue::new_local(session),
            authenticated: RwSignal::new(snapshot.is_authenticated()),
            profile: RwSignal::new(snapshot.profile),
            busy: RwSignal::new(snapshot.busy),
            error: RwSignal::new(None),
        }
    }

    fn sync(&self) {
        let snapshot = self.session.with_value(|session| session.snapshot());
        self.authenticated.set(snapshot.is_authenticated());
        self.profile.set(snapshot.profile);
        self.busy.set(snapshot.busy);
    }

    /// Reactive token-presence flag.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated.get()
    }

    /// Read-only view of the session for the navigation guard.
    pub fn guard_view(&self) -> SessionView {
        SessionView {
            token_present: self.authenticated.get(),
            is_admin: self.profile.get().map(|profile| profile.is_admin),
        }
    }

    pub fn username(&self) -> Option<String> {
        self.profile.get().map(|profile| profile.username)
    }

    pub fn clear_error(&self) {
        self.error.set(None);
    }

    pub async fn login(&self, username: &str, password: &str) -> AuthOutcome {
        self.error.set(None);
        self.busy.set(true);
        let session = self.session.get_value();
        let outcome = session.login(username, password).await;
        if let Some(message) = outcome.message() {
            self.error.set(Some(message.to_owned()));
        }
        self.sync();
        outcome
    }

    pub async fn register(
        &self,
        username: &str,
        password: &str,
        invitation_code: &str,
    ) -> AuthOutcome {
        self.error.set(None);
        self.busy.set(true);
        let session = self.session.get_value();
        let outcome = session.register(username, password, invitation_code).await;
        if let Some(message) = outcome.message() {
            self.error.set(Some(message.to_owned()));
        }
        self.sync();
        outcome
    }

    pub async fn refresh_profile(&self) {
        let session = self.session.get_value();
        session.refresh_profile().await;
        self.sync();
    }

    /// Client-side logout is unconditional; the REST call is fired as a
    /// side channel and its result ignored.
    pub fn logout(&self) {
        spawn_local(api::auth::logout_best_effort());
        self.session.with_value(|session| session.logout());
        self.sync();
    }

    fn invalidate(&self) {
        self.session.with_value(|session| session.invalidate());
        self.sync();
    }
}

/// Provide the session context to the component tree.
pub fn provide_session_context() -> SessionContext {
    let ctx = SessionContext::new();

    // A token rejection on any later API call forces Anonymous; the
    // reactive guard then redirects to login on its own.
    api::set_unauthorized_hook(Rc::new(move || ctx.invalidate()));

    // Hydrated from storage: refresh the cached profile in the background.
    if ctx.session.with_value(|session| session.is_authenticated()) {
        spawn_local(async move {
            ctx.refresh_profile().await;
        });
    }

    provide_context(ctx);
    ctx
}

/// Get the session context from the component tree.
pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}
