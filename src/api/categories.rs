//! Category endpoints.

use serde::{Deserialize, Serialize};

use super::records::RecordKind;
use super::{ApiError, delete_json, get_json, post_json, put_json};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    #[serde(default)]
    pub is_system: bool,
    #[serde(default)]
    pub sort_order: i64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Top-level category with its children, from `/categories/tree`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryTreeNode {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    #[serde(default)]
    pub is_system: bool,
    #[serde(default)]
    pub children: Vec<Category>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub sort_order: i64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
}

pub async fn list(kind: Option<RecordKind>) -> Result<Vec<Category>, ApiError> {
    let mut query = Vec::new();
    if let Some(kind) = kind {
        query.push(("type", kind.as_str().to_owned()));
    }
    get_json("/categories", &query).await
}

pub async fn tree(kind: Option<RecordKind>) -> Result<Vec<CategoryTreeNode>, ApiError> {
    let mut query = Vec::new();
    if let Some(kind) = kind {
        query.push(("type", kind.as_str().to_owned()));
    }
    get_json("/categories/tree", &query).await
}

pub async fn create(data: &CategoryCreate) -> Result<Category, ApiError> {
    post_json("/categories", data).await
}

pub async fn update(id: i64, data: &CategoryUpdate) -> Result<Category, ApiError> {
    put_json(&format!("/categories/{id}"), data).await
}

pub async fn remove(id: i64) -> Result<(), ApiError> {
    delete_json(&format!("/categories/{id}")).await
}
