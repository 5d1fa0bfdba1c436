use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Aggregated view of one calendar month, computed on demand and never
/// persisted. `total_savings` is the sum of goal contributions in the
/// month, not income minus expenses.
#[derive(Serialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    pub total_income: f64,
    pub total_expenses: f64,
    pub total_savings: f64,
    pub category_breakdown: HashMap<String, f64>,
    pub goal_spending: HashMap<String, f64>,
    pub goal_contributions: HashMap<String, f64>,
}

/// Persisted snapshot of a [start, end) window. Unlike the monthly view,
/// `total_savings` here is income minus expenses. `category_data` carries
/// the category breakdown serialized to JSON, stored verbatim.
#[derive(
    Queryable,
    Insertable,
    Identifiable,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::historical_summaries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct HistoricalSummary {
    pub id: String,
    pub user_id: String,
    pub period_type: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub total_income: f64,
    pub total_expense: f64,
    pub total_savings: f64,
    pub category_data: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl HistoricalSummary {
    /// The stored breakdown, tolerating an empty or malformed payload:
    /// those read as an empty map rather than an error, since the
    /// breakdown only feeds cosmetic report sections.
    pub fn category_breakdown(&self) -> HashMap<String, f64> {
        serde_json::from_str(&self.category_data).unwrap_or_default()
    }
}
