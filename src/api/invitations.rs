//! Invitation code endpoints (admin only).

use serde::{Deserialize, Serialize};

use super::{ApiError, delete_json, get_json, post_json};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InvitationCode {
    pub id: i64,
    pub code: String,
    pub is_used: bool,
    #[serde(default)]
    pub used_by: Option<i64>,
    #[serde(default)]
    pub used_at: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct InvitationCreate {
    /// How many codes to mint in one batch.
    pub count: i64,
}

pub async fn list() -> Result<Vec<InvitationCode>, ApiError> {
    get_json("/invitations", &[]).await
}

pub async fn create(data: &InvitationCreate) -> Result<Vec<InvitationCode>, ApiError> {
    post_json("/invitations", data).await
}

pub async fn remove(id: i64) -> Result<(), ApiError> {
    delete_json(&format!("/invitations/{id}")).await
}
