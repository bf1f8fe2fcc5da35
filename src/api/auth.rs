//! Auth endpoints and the production [`AuthBackend`].
//!
//! These calls handle their own failures inside the session state machine,
//! so they bypass the global 401 interceptor: a bad password must surface
//! as a failed login, not as a forced logout.

use gloo_net::http::Request;
use serde::Serialize;

use super::{ApiError, endpoint, parse};
use crate::core::{AuthBackend, AuthError, RawAuthPayload, UserProfile};

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    password: &'a str,
    invitation_code: &'a str,
}

/// [`AuthBackend`] over the REST auth endpoints.
#[derive(Clone, Copy, Default)]
pub struct HttpAuthBackend;

impl AuthBackend for HttpAuthBackend {
    async fn login(&self, username: &str, password: &str) -> Result<RawAuthPayload, AuthError> {
        post_auth("/auth/login", &LoginRequest { username, password }).await
    }

    async fn register(
        &self,
        username: &str,
        password: &str,
        invitation_code: &str,
    ) -> Result<RawAuthPayload, AuthError> {
        post_auth(
            "/auth/register",
            &RegisterRequest {
                username,
                password,
                invitation_code,
            },
        )
        .await
    }

    async fn fetch_profile(&self, token: &str) -> Result<UserProfile, AuthError> {
        let response = Request::get(&endpoint("/auth/profile"))
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|err| AuthError::Network(err.to_string()))?;
        parse(response, false).await.map_err(auth_error)
    }
}

async fn post_auth<B: Serialize>(path: &str, body: &B) -> Result<RawAuthPayload, AuthError> {
    let request = Request::post(&endpoint(path))
        .json(body)
        .map_err(|err| AuthError::Network(err.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|err| AuthError::Network(err.to_string()))?;
    parse(response, false).await.map_err(auth_error)
}

fn auth_error(err: ApiError) -> AuthError {
    match err {
        ApiError::Unauthorized => AuthError::Rejected(String::new()),
        ApiError::Server { message, .. } => AuthError::Rejected(message),
        ApiError::Network(message) => AuthError::Network(message),
        ApiError::Decode(message) => AuthError::Decode(message),
    }
}

/// Server-side logout is best effort; the client-side logout never waits
/// on it and ignores the result.
pub async fn logout_best_effort() {
    if let Err(err) = super::post_empty::<serde_json::Value>("/auth/logout").await {
        leptos::logging::warn!("logout endpoint failed: {err}");
    }
}
