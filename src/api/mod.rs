//! REST client plumbing shared by the per-resource wrappers.
//!
//! Every endpoint lives under one `/api` prefix. The bearer token is
//! attached implicitly from the vault; a 401/403 on an intercepted call
//! fires the authentication-rejection hook so the session layer can force
//! a logout. No call is ever retried.

pub mod admin;
pub mod auth;
pub mod budgets;
pub mod categories;
pub mod invitations;
pub mod projects;
pub mod records;
pub mod statistics;
pub mod vault;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const API_BASE: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server rejected the token.
    #[error("authentication required")]
    Unauthorized,
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

thread_local! {
    static UNAUTHORIZED_HOOK: RefCell<Option<Rc<dyn Fn()>>> = const { RefCell::new(None) };
}

/// Install the callback fired when the server rejects the token on an
/// authenticated call. The session layer registers a forced logout here.
pub fn set_unauthorized_hook(hook: Rc<dyn Fn()>) {
    UNAUTHORIZED_HOOK.with(|slot| *slot.borrow_mut() = Some(hook));
}

fn notify_unauthorized() {
    let hook = UNAUTHORIZED_HOOK.with(|slot| slot.borrow().clone());
    if let Some(hook) = hook {
        (*hook)();
    }
}

pub(crate) fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// FastAPI-style error body.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match vault::get_token() {
        Some(token) if !token.is_empty() => {
            builder.header("Authorization", &format!("Bearer {token}"))
        }
        _ => builder,
    }
}

fn net_err(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

pub(crate) async fn parse<T: DeserializeOwned>(
    response: Response,
    intercept: bool,
) -> Result<T, ApiError> {
    let status = response.status();
    if intercept && (status == 401 || status == 403) {
        notify_unauthorized();
        return Err(ApiError::Unauthorized);
    }
    if !response.ok() {
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail)
            .unwrap_or_else(|| response.status_text());
        return Err(ApiError::Server { status, message });
    }
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

pub(crate) async fn get_json<T: DeserializeOwned>(
    path: &str,
    query: &[(&str, String)],
) -> Result<T, ApiError> {
    let response = authorize(Request::get(&endpoint(path)))
        .query(query.iter().map(|(key, value)| (*key, value.as_str())))
        .send()
        .await
        .map_err(net_err)?;
    parse(response, true).await
}

pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let request = authorize(Request::post(&endpoint(path)))
        .json(body)
        .map_err(net_err)?;
    let response = request.send().await.map_err(net_err)?;
    parse(response, true).await
}

pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let request = authorize(Request::put(&endpoint(path)))
        .json(body)
        .map_err(net_err)?;
    let response = request.send().await.map_err(net_err)?;
    parse(response, true).await
}

pub(crate) async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = authorize(Request::post(&endpoint(path)))
        .send()
        .await
        .map_err(net_err)?;
    parse(response, true).await
}

pub(crate) async fn delete_json(path: &str) -> Result<(), ApiError> {
    let response = authorize(Request::delete(&endpoint(path)))
        .send()
        .await
        .map_err(net_err)?;
    parse::<serde_json::Value>(response, true).await.map(|_| ())
}
