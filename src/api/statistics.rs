//! Statistics endpoints.

use serde::Deserialize;

use super::records::RecordKind;
use super::{ApiError, get_json};

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct OverviewStats {
    #[serde(default)]
    pub today_income: f64,
    #[serde(default)]
    pub today_expense: f64,
    #[serde(default)]
    pub today_balance: f64,
    #[serde(default)]
    pub month_income: f64,
    #[serde(default)]
    pub month_expense: f64,
    #[serde(default)]
    pub month_balance: f64,
    #[serde(default)]
    pub month_budget_usage: Option<f64>,
    #[serde(default)]
    pub active_projects: i64,
    #[serde(default)]
    pub recent_records_count: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DailyStat {
    pub date: String,
    #[serde(default)]
    pub income: f64,
    #[serde(default)]
    pub expense: f64,
    #[serde(default)]
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DailyStatsResponse {
    pub stats: Vec<DailyStat>,
    pub total_income: f64,
    pub total_expense: f64,
    pub total_days: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MonthlyStat {
    pub year: i32,
    pub month: u32,
    #[serde(default)]
    pub income: f64,
    #[serde(default)]
    pub expense: f64,
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub record_count: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MonthlyStatsResponse {
    pub stats: Vec<MonthlyStat>,
    pub total_income: f64,
    pub total_expense: f64,
    pub total_months: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryStat {
    pub category_id: i64,
    pub category_name: String,
    #[serde(default)]
    pub category_icon: Option<String>,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub percentage: f64,
    #[serde(default)]
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryStatsResponse {
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub total_amount: f64,
    pub categories: Vec<CategoryStat>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrendDataPoint {
    pub date: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrendResponse {
    #[serde(rename = "type")]
    pub kind: String,
    pub trend: Vec<TrendDataPoint>,
    pub avg_daily: f64,
    pub max_value: f64,
    pub min_value: f64,
    #[serde(default)]
    pub growth_rate: Option<f64>,
}

fn date_range(start_date: &str, end_date: &str) -> Vec<(&'static str, String)> {
    vec![
        ("start_date", start_date.to_owned()),
        ("end_date", end_date.to_owned()),
    ]
}

pub async fn overview() -> Result<OverviewStats, ApiError> {
    get_json("/statistics/overview", &[]).await
}

pub async fn daily(start_date: &str, end_date: &str) -> Result<DailyStatsResponse, ApiError> {
    get_json("/statistics/daily", &date_range(start_date, end_date)).await
}

pub async fn monthly(year: i32) -> Result<MonthlyStatsResponse, ApiError> {
    get_json("/statistics/monthly", &[("year", year.to_string())]).await
}

pub async fn by_category(
    kind: RecordKind,
    start_date: &str,
    end_date: &str,
) -> Result<CategoryStatsResponse, ApiError> {
    let mut query = date_range(start_date, end_date);
    query.push(("type", kind.as_str().to_owned()));
    get_json("/statistics/category", &query).await
}

pub async fn trend(
    kind: RecordKind,
    start_date: &str,
    end_date: &str,
) -> Result<TrendResponse, ApiError> {
    let mut query = date_range(start_date, end_date);
    query.push(("type", kind.as_str().to_owned()));
    get_json("/statistics/trend", &query).await
}
