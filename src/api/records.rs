//! Ledger record endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::categories::Category;
use super::{ApiError, delete_json, get_json, post_json, put_json};

/// Direction of a ledger record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    #[display("income")]
    Income,
    #[default]
    #[display("expense")]
    Expense,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Income => "income",
            RecordKind::Expense => "expense",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Income => "Income",
            RecordKind::Expense => "Expense",
        }
    }

    /// Display color, green for income and red for expense.
    pub fn color(&self) -> &'static str {
        match self {
            RecordKind::Income => "#07c160",
            RecordKind::Expense => "#ee0a24",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LedgerRecord {
    pub id: i64,
    #[serde(default)]
    pub user_id: i64,
    pub category_id: i64,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub project_id: Option<i64>,
    pub record_date: NaiveDate,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    /// Embedded category, present on list responses.
    #[serde(default)]
    pub category: Option<Category>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecordList {
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub records: Vec<LedgerRecord>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RecordSummary {
    #[serde(default)]
    pub total_income: f64,
    #[serde(default)]
    pub total_expense: f64,
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub record_count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordCreate {
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub category_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    pub record_date: NaiveDate,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RecordUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_date: Option<NaiveDate>,
}

/// Filters for the record list and summary endpoints.
#[derive(Debug, Clone, Default)]
pub struct RecordQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub kind: Option<RecordKind>,
    pub category_id: Option<i64>,
    pub project_id: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl RecordQuery {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            query.push(("page_size", page_size.to_string()));
        }
        if let Some(kind) = self.kind {
            query.push(("type", kind.as_str().to_owned()));
        }
        if let Some(category_id) = self.category_id {
            query.push(("category_id", category_id.to_string()));
        }
        if let Some(project_id) = self.project_id {
            query.push(("project_id", project_id.to_string()));
        }
        if let Some(start_date) = self.start_date {
            query.push(("start_date", start_date.to_string()));
        }
        if let Some(end_date) = self.end_date {
            query.push(("end_date", end_date.to_string()));
        }
        query
    }
}

pub async fn list(query: &RecordQuery) -> Result<RecordList, ApiError> {
    get_json("/records", &query.to_query()).await
}

pub async fn summary(query: &RecordQuery) -> Result<RecordSummary, ApiError> {
    get_json("/records/summary", &query.to_query()).await
}

pub async fn create(data: &RecordCreate) -> Result<LedgerRecord, ApiError> {
    post_json("/records", data).await
}

pub async fn update(id: i64, data: &RecordUpdate) -> Result<LedgerRecord, ApiError> {
    put_json(&format!("/records/{id}"), data).await
}

pub async fn remove(id: i64) -> Result<(), ApiError> {
    delete_json(&format!("/records/{id}")).await
}
