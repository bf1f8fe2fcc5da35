//! Session state machine: owns the bearer token and the cached user profile.
//!
//! The session talks to two collaborators through trait seams so the state
//! transitions can be exercised without a browser:
//! - [`AuthBackend`] performs the network calls (login, register, profile);
//! - [`TokenVault`] persists the raw token across page reloads.
//!
//! Invariant: `is_authenticated()` is always derived from token presence,
//! never stored on its own. Every operation returns an [`AuthOutcome`] and
//! never propagates an error to the caller.

use std::cell::RefCell;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::credential::{Credential, CredentialError, RawAuthPayload, normalize_auth_response};

/// User record from `GET /auth/profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub is_admin: bool,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
}

/// Errors produced by an [`AuthBackend`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Non-2xx response from the auth service, carrying its detail message.
    #[error("{0}")]
    Rejected(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Network collaborator for the auth endpoints.
#[allow(async_fn_in_trait)]
pub trait AuthBackend {
    async fn login(&self, username: &str, password: &str) -> Result<RawAuthPayload, AuthError>;

    async fn register(
        &self,
        username: &str,
        password: &str,
        invitation_code: &str,
    ) -> Result<RawAuthPayload, AuthError>;

    async fn fetch_profile(&self, token: &str) -> Result<UserProfile, AuthError>;
}

/// Durable storage for the raw token. Writes are fire-and-forget;
/// implementations log failures instead of surfacing them.
pub trait TokenVault {
    fn load(&self) -> Option<String>;
    fn store(&self, token: &str);
    fn clear(&self);
}

/// Result of a session-mutating operation, surfaced to view code as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Success,
    Failure(String),
}

impl AuthOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AuthOutcome::Success)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            AuthOutcome::Success => None,
            AuthOutcome::Failure(message) => Some(message),
        }
    }
}

/// Point-in-time copy of the session fields, for reactive mirrors.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionSnapshot {
    pub token: String,
    pub profile: Option<UserProfile>,
    pub busy: bool,
}

impl SessionSnapshot {
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}

const LOGIN_FALLBACK: &str = "Sign-in failed";
const REGISTER_FALLBACK: &str = "Registration failed";
const REGISTER_THEN_LOGIN: &str = "Account created, please sign in";
const BUSY: &str = "Another sign-in is already in progress";

#[derive(Debug, Default)]
struct SessionState {
    token: String,
    profile: Option<UserProfile>,
    busy: bool,
}

/// The session singleton. Single-threaded; interior mutability keeps the
/// borrow windows short so no `RefCell` borrow is ever held across an await.
pub struct Session<B, V> {
    backend: B,
    vault: V,
    state: RefCell<SessionState>,
}

impl<B: AuthBackend, V: TokenVault> Session<B, V> {
    /// Create the session, hydrating the token from the vault if present.
    pub fn new(backend: B, vault: V) -> Self {
        let token = vault.load().unwrap_or_default();
        Session {
            backend,
            vault,
            state: RefCell::new(SessionState {
                token,
                ..SessionState::default()
            }),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.borrow();
        SessionSnapshot {
            token: state.token.clone(),
            profile: state.profile.clone(),
            busy: state.busy,
        }
    }

    pub fn token(&self) -> String {
        self.state.borrow().token.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        !self.state.borrow().token.is_empty()
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.state.borrow().profile.clone()
    }

    /// Sign in with username and password.
    ///
    /// A second login or register while one is in flight is rejected; the
    /// first operation's token wins.
    pub async fn login(&self, username: &str, password: &str) -> AuthOutcome {
        if !self.begin() {
            return AuthOutcome::Failure(BUSY.to_owned());
        }
        let outcome = self.login_inner(username, password).await;
        self.finish();
        outcome
    }

    async fn login_inner(&self, username: &str, password: &str) -> AuthOutcome {
        match self.backend.login(username, password).await {
            Ok(payload) => match normalize_auth_response(&payload) {
                Ok(credential) => {
                    self.adopt(credential).await;
                    AuthOutcome::Success
                }
                Err(err) => AuthOutcome::Failure(err.to_string()),
            },
            Err(err) => AuthOutcome::Failure(failure_message(&err, LOGIN_FALLBACK)),
        }
    }

    /// Register a new account.
    ///
    /// The server contract forked across versions: some deployments return a
    /// token straight from `/auth/register`, others return none and expect a
    /// follow-up login. Both are supported as an explicit branch; exactly one
    /// login round trip is issued in the fallback case.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        invitation_code: &str,
    ) -> AuthOutcome {
        if !self.begin() {
            return AuthOutcome::Failure(BUSY.to_owned());
        }
        let outcome = match self.backend.register(username, password, invitation_code).await {
            Ok(payload) => match normalize_auth_response(&payload) {
                // Compatibility mode: the registration response already
                // carries a token, treat it exactly like a successful login.
                Ok(credential) => {
                    self.adopt(credential).await;
                    AuthOutcome::Success
                }
                // Fallback mode: no usable token, sign in with the same
                // credentials.
                Err(CredentialError::MissingToken | CredentialError::BlankToken) => {
                    match self.login_inner(username, password).await {
                        AuthOutcome::Success => AuthOutcome::Success,
                        AuthOutcome::Failure(_) => {
                            AuthOutcome::Failure(REGISTER_THEN_LOGIN.to_owned())
                        }
                    }
                }
            },
            Err(err) => AuthOutcome::Failure(failure_message(&err, REGISTER_FALLBACK)),
        };
        self.finish();
        outcome
    }

    /// Replace the cached profile. No-op without a token; failures are
    /// logged and swallowed so a profile hiccup never disturbs the session.
    pub async fn refresh_profile(&self) {
        self.load_profile().await;
    }

    /// Clear token, profile and the vault entry. Local-only, idempotent.
    pub fn logout(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.token.clear();
            state.profile = None;
        }
        self.vault.clear();
    }

    /// Forced `Authenticated -> Anonymous` transition, used when the server
    /// rejects the token on a later API call.
    pub fn invalidate(&self) {
        self.logout();
    }

    async fn adopt(&self, credential: Credential) {
        {
            let mut state = self.state.borrow_mut();
            state.token = credential.into_inner();
            // drop any profile cached for a previous account
            state.profile = None;
        }
        self.vault.store(&self.token());
        // Best effort: a profile fetch failure does not roll back the login.
        self.load_profile().await;
    }

    async fn load_profile(&self) {
        let token = self.token();
        if token.is_empty() {
            return;
        }
        match self.backend.fetch_profile(&token).await {
            Ok(profile) => self.state.borrow_mut().profile = Some(profile),
            Err(err) => leptos::logging::warn!("profile fetch failed: {err}"),
        }
    }

    fn begin(&self) -> bool {
        let mut state = self.state.borrow_mut();
        if state.busy {
            false
        } else {
            state.busy = true;
            true
        }
    }

    fn finish(&self) {
        self.state.borrow_mut().busy = false;
    }
}

fn failure_message(err: &AuthError, fallback: &str) -> String {
    match err {
        AuthError::Rejected(message) if !message.is_empty() => message.clone(),
        _ => fallback.to_owned(),
    }
}
