//! Canonical credential type and the adapter over the server's auth payloads.
//!
//! The auth service changed its response shape across versions: older
//! deployments return the bearer token under `token`, newer ones under
//! `access_token`. Both shapes are tried in that order and reduced to one
//! canonical [`Credential`]; a payload carrying neither (or only blank
//! values) is a typed error, never a silently-empty token.

use serde::Deserialize;
use thiserror::Error;

/// Raw body of a successful auth endpoint response.
///
/// Unknown fields (`token_type`, `expires_in`, the embedded user record,
/// registration metadata) are ignored; only the token candidates matter here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawAuthPayload {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
}

impl RawAuthPayload {
    /// Payload carrying a token under the legacy `token` field.
    pub fn with_token(token: impl Into<String>) -> Self {
        RawAuthPayload {
            token: Some(token.into()),
            access_token: None,
        }
    }

    /// Payload carrying a token under the newer `access_token` field.
    pub fn with_access_token(token: impl Into<String>) -> Self {
        RawAuthPayload {
            token: None,
            access_token: Some(token.into()),
        }
    }
}

/// Opaque bearer credential issued by the auth service. Always non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("auth response carried no token field")]
    MissingToken,
    #[error("auth response carried a blank token")]
    BlankToken,
}

/// Reduce a raw auth payload to the canonical credential.
///
/// Known shapes are tried in order: `token` first, then `access_token`.
/// A field that is present but blank is skipped in favor of the next shape.
pub fn normalize_auth_response(raw: &RawAuthPayload) -> Result<Credential, CredentialError> {
    let candidates = [raw.token.as_deref(), raw.access_token.as_deref()];

    let mut saw_any = false;
    for candidate in candidates.into_iter().flatten() {
        saw_any = true;
        if !candidate.trim().is_empty() {
            return Ok(Credential(candidate.to_owned()));
        }
    }

    if saw_any {
        Err(CredentialError::BlankToken)
    } else {
        Err(CredentialError::MissingToken)
    }
}
