//! Budget endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ApiError, delete_json, get_json, post_json, put_json};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BudgetStatus {
    pub budget_id: i64,
    pub budget_name: String,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub category_icon: Option<String>,
    pub planned: f64,
    pub spent: f64,
    pub remaining: f64,
    /// Percentage of the planned amount already spent.
    pub usage_rate: f64,
    /// normal / warning / critical
    pub alert_level: String,
    pub days_remaining: i64,
    #[serde(default)]
    pub projected_spending: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Budget {
    pub id: i64,
    #[serde(default)]
    pub user_id: i64,
    /// `None` marks the overall budget rather than a per-category one.
    #[serde(default)]
    pub category_id: Option<i64>,
    pub name: String,
    pub amount: f64,
    pub period: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub alert_threshold: f64,
    pub is_active: bool,
    #[serde(default)]
    pub status: Option<BudgetStatus>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BudgetList {
    pub total: i64,
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub total_planned: f64,
    #[serde(default)]
    pub total_spent: f64,
    #[serde(default)]
    pub total_remaining: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BudgetAlert {
    pub budget_id: i64,
    pub budget_name: String,
    #[serde(default)]
    pub category_name: Option<String>,
    pub current_spent: f64,
    pub budget_amount: f64,
    pub usage_rate: f64,
    /// threshold / exceeded / depleted
    pub alert_type: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BudgetSummary {
    pub period_start: String,
    pub period_end: String,
    pub total_budget: f64,
    pub total_spent: f64,
    pub overall_usage_rate: f64,
    #[serde(default)]
    pub alerts: Vec<BudgetAlert>,
    #[serde(default)]
    pub category_budgets: Vec<BudgetStatus>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    pub name: String,
    pub amount: f64,
    pub period: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub alert_threshold: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BudgetUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

pub async fn list() -> Result<BudgetList, ApiError> {
    get_json("/budgets", &[]).await
}

/// Summary for the running period, alerts and per-category status included.
pub async fn current_summary() -> Result<BudgetSummary, ApiError> {
    get_json("/budgets/summary/current", &[]).await
}

pub async fn alerts() -> Result<Vec<BudgetAlert>, ApiError> {
    get_json("/budgets/alerts", &[]).await
}

pub async fn create(data: &BudgetCreate) -> Result<Budget, ApiError> {
    post_json("/budgets", data).await
}

pub async fn update(id: i64, data: &BudgetUpdate) -> Result<Budget, ApiError> {
    put_json(&format!("/budgets/{id}"), data).await
}

pub async fn remove(id: i64) -> Result<(), ApiError> {
    delete_json(&format!("/budgets/{id}")).await
}
