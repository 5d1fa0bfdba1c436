use std::collections::HashMap;

use chrono::NaiveDate;

use crate::context::UserContext;
use crate::errors::Result;
use crate::summary::period::PeriodType;
use crate::summary::summary_model::{HistoricalSummary, MonthlySummary};

/// Narrow ledger-store surface the aggregation engine reads through.
/// Every range is half-open: `>= start AND < end`.
pub trait SummaryRepositoryTrait: Send + Sync {
    fn sum_income(&self, user_id: &str, start: NaiveDate, end: NaiveDate) -> Result<f64>;
    fn sum_expenses(&self, user_id: &str, start: NaiveDate, end: NaiveDate) -> Result<f64>;
    fn expense_totals_by_category(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<HashMap<String, f64>>;
    fn expense_totals_by_goal(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<HashMap<String, f64>>;
    fn contribution_totals_by_goal(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<HashMap<String, f64>>;

    fn insert_summary(&self, summary: HistoricalSummary) -> Result<HistoricalSummary>;
    fn list_summaries(
        &self,
        user_id: &str,
        period_type: PeriodType,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<HistoricalSummary>>;
}

pub trait SummaryServiceTrait: Send + Sync {
    fn get_monthly_summary(
        &self,
        ctx: &UserContext,
        year: i32,
        month: u32,
    ) -> Result<MonthlySummary>;

    fn generate_historical_summary(
        &self,
        ctx: &UserContext,
        period_type: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<HistoricalSummary>;

    /// Same computation as `generate_historical_summary`, but nothing is
    /// persisted. Used by report rendering.
    fn compute_historical_summary(
        &self,
        ctx: &UserContext,
        period_type: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<HistoricalSummary>;

    fn get_historical_data(
        &self,
        ctx: &UserContext,
        period_type: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<HistoricalSummary>>;
}
