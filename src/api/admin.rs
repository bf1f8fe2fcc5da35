//! Admin console endpoints for user management.

use serde::Deserialize;

use super::{ApiError, delete_json, get_json, post_empty};
use crate::core::UserProfile;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserList {
    pub total: i64,
    pub users: Vec<UserProfile>,
}

pub async fn list_users() -> Result<UserList, ApiError> {
    get_json("/admin/users", &[]).await
}

pub async fn disable_user(user_id: i64) -> Result<(), ApiError> {
    post_empty::<serde_json::Value>(&format!("/admin/users/{user_id}/disable"))
        .await
        .map(|_| ())
}

pub async fn enable_user(user_id: i64) -> Result<(), ApiError> {
    post_empty::<serde_json::Value>(&format!("/admin/users/{user_id}/enable"))
        .await
        .map(|_| ())
}

pub async fn remove_user(user_id: i64) -> Result<(), ApiError> {
    delete_json(&format!("/admin/users/{user_id}")).await
}
