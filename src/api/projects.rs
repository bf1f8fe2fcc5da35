//! Project endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ApiError, delete_json, get_json, post_json, put_json};

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ProjectStats {
    #[serde(default)]
    pub total_spent: f64,
    #[serde(default)]
    pub budget_usage_rate: f64,
    #[serde(default)]
    pub per_person_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub id: i64,
    #[serde(default)]
    pub user_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub budget: f64,
    pub member_count: i64,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// active / completed / cancelled
    pub status: String,
    #[serde(default)]
    pub stats: Option<ProjectStats>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub budget: f64,
    pub member_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

pub async fn list() -> Result<Vec<Project>, ApiError> {
    get_json("/projects", &[]).await
}

pub async fn get(id: i64) -> Result<Project, ApiError> {
    get_json(&format!("/projects/{id}"), &[]).await
}

pub async fn create(data: &ProjectCreate) -> Result<Project, ApiError> {
    post_json("/projects", data).await
}

pub async fn update(id: i64, data: &ProjectUpdate) -> Result<Project, ApiError> {
    put_json(&format!("/projects/{id}"), data).await
}

pub async fn remove(id: i64) -> Result<(), ApiError> {
    delete_json(&format!("/projects/{id}")).await
}
