use std::sync::Arc;

use chrono::Utc;
use log::debug;
use uuid::Uuid;

use crate::context::UserContext;
use crate::errors::Result;
use crate::summary::period::{month_bounds, resolve_period, ResolvedPeriod};
use crate::summary::summary_model::{HistoricalSummary, MonthlySummary};
use crate::summary::summary_traits::{SummaryRepositoryTrait, SummaryServiceTrait};

pub struct SummaryService {
    summary_repo: Arc<dyn SummaryRepositoryTrait>,
}

impl SummaryService {
    pub fn new(summary_repo: Arc<dyn SummaryRepositoryTrait>) -> Self {
        SummaryService { summary_repo }
    }

    /// Computes a snapshot for exactly [start, end); the period type is a
    /// recorded label and never widens or narrows the window.
    fn compute_historical(
        &self,
        ctx: &UserContext,
        period: &ResolvedPeriod,
    ) -> Result<HistoricalSummary> {
        let total_income = self
            .summary_repo
            .sum_income(&ctx.user_id, period.start, period.end)?;
        let total_expense = self
            .summary_repo
            .sum_expenses(&ctx.user_id, period.start, period.end)?;
        let breakdown = self.summary_repo.expense_totals_by_category(
            &ctx.user_id,
            period.start,
            period.end,
        )?;

        let now = Utc::now().naive_utc();
        Ok(HistoricalSummary {
            id: Uuid::new_v4().to_string(),
            user_id: ctx.user_id.clone(),
            period_type: period.period_type.to_string(),
            period_start: period.start,
            period_end: period.end,
            total_income,
            total_expense,
            // historical savings are net: income minus expenses
            total_savings: total_income - total_expense,
            category_data: serde_json::to_string(&breakdown)?,
            created_at: now,
            updated_at: now,
        })
    }
}

impl SummaryServiceTrait for SummaryService {
    fn get_monthly_summary(
        &self,
        ctx: &UserContext,
        year: i32,
        month: u32,
    ) -> Result<MonthlySummary> {
        // Bounds are validated before any query runs.
        let (start, end) = month_bounds(year, month)?;
        debug!("Computing monthly summary for {}-{:02}", year, month);

        let total_income = self.summary_repo.sum_income(&ctx.user_id, start, end)?;
        let total_expenses = self.summary_repo.sum_expenses(&ctx.user_id, start, end)?;
        let category_breakdown =
            self.summary_repo
                .expense_totals_by_category(&ctx.user_id, start, end)?;
        let goal_spending = self
            .summary_repo
            .expense_totals_by_goal(&ctx.user_id, start, end)?;
        let goal_contributions =
            self.summary_repo
                .contribution_totals_by_goal(&ctx.user_id, start, end)?;

        // Monthly savings are defined as money put toward goals in the
        // period, not income minus expenses.
        let total_savings: f64 = goal_contributions.values().sum();

        Ok(MonthlySummary {
            year,
            month,
            total_income,
            total_expenses,
            total_savings,
            category_breakdown,
            goal_spending,
            goal_contributions,
        })
    }

    fn generate_historical_summary(
        &self,
        ctx: &UserContext,
        period_type: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<HistoricalSummary> {
        let period = resolve_period(period_type, start_date, end_date)?;
        let summary = self.compute_historical(ctx, &period)?;
        // Always a fresh row; regenerating the same window appends.
        self.summary_repo.insert_summary(summary)
    }

    fn compute_historical_summary(
        &self,
        ctx: &UserContext,
        period_type: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<HistoricalSummary> {
        let period = resolve_period(period_type, start_date, end_date)?;
        self.compute_historical(ctx, &period)
    }

    fn get_historical_data(
        &self,
        ctx: &UserContext,
        period_type: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<HistoricalSummary>> {
        let period = resolve_period(period_type, start_date, end_date)?;
        self.summary_repo
            .list_summaries(&ctx.user_id, period.period_type, period.start, period.end)
    }
}
