use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use diesel::dsl::sum;
use diesel::prelude::*;

use crate::db::{get_connection, DbPool};
use crate::errors::Result;
use crate::schema::{expenses, goal_contributions, historical_summaries, incomes};
use crate::summary::period::PeriodType;
use crate::summary::summary_model::HistoricalSummary;
use crate::summary::summary_traits::SummaryRepositoryTrait;

pub struct SummaryRepository {
    pool: Arc<DbPool>,
}

impl SummaryRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        SummaryRepository { pool }
    }
}

impl SummaryRepositoryTrait for SummaryRepository {
    fn sum_income(&self, user_id: &str, start: NaiveDate, end: NaiveDate) -> Result<f64> {
        let mut conn = get_connection(&self.pool)?;
        let total: Option<f64> = incomes::table
            .filter(
                incomes::user_id
                    .eq(user_id)
                    .and(incomes::received_at.ge(start))
                    .and(incomes::received_at.lt(end)),
            )
            .select(sum(incomes::amount))
            .first(&mut conn)?;
        Ok(total.unwrap_or(0.0))
    }

    fn sum_expenses(&self, user_id: &str, start: NaiveDate, end: NaiveDate) -> Result<f64> {
        let mut conn = get_connection(&self.pool)?;
        let total: Option<f64> = expenses::table
            .filter(
                expenses::user_id
                    .eq(user_id)
                    .and(expenses::spent_at.ge(start))
                    .and(expenses::spent_at.lt(end)),
            )
            .select(sum(expenses::amount))
            .first(&mut conn)?;
        Ok(total.unwrap_or(0.0))
    }

    fn expense_totals_by_category(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<HashMap<String, f64>> {
        let mut conn = get_connection(&self.pool)?;
        let rows: Vec<(String, Option<f64>)> = expenses::table
            .filter(
                expenses::user_id
                    .eq(user_id)
                    .and(expenses::spent_at.ge(start))
                    .and(expenses::spent_at.lt(end)),
            )
            .group_by(expenses::category)
            .select((expenses::category, sum(expenses::amount)))
            .load(&mut conn)?;
        Ok(rows
            .into_iter()
            .map(|(category, total)| (category, total.unwrap_or(0.0)))
            .collect())
    }

    fn expense_totals_by_goal(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<HashMap<String, f64>> {
        let mut conn = get_connection(&self.pool)?;
        let rows: Vec<(Option<String>, Option<f64>)> = expenses::table
            .filter(
                expenses::user_id
                    .eq(user_id)
                    .and(expenses::spent_at.ge(start))
                    .and(expenses::spent_at.lt(end))
                    .and(expenses::goal_id.is_not_null()),
            )
            .group_by(expenses::goal_id)
            .select((expenses::goal_id, sum(expenses::amount)))
            .load(&mut conn)?;
        Ok(rows
            .into_iter()
            .filter_map(|(goal, total)| goal.map(|g| (g, total.unwrap_or(0.0))))
            .collect())
    }

    fn contribution_totals_by_goal(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<HashMap<String, f64>> {
        let mut conn = get_connection(&self.pool)?;
        let rows: Vec<(String, Option<f64>)> = goal_contributions::table
            .filter(
                goal_contributions::user_id
                    .eq(user_id)
                    .and(goal_contributions::contributed_at.ge(start))
                    .and(goal_contributions::contributed_at.lt(end)),
            )
            .group_by(goal_contributions::goal_id)
            .select((goal_contributions::goal_id, sum(goal_contributions::amount)))
            .load(&mut conn)?;
        Ok(rows
            .into_iter()
            .map(|(goal, total)| (goal, total.unwrap_or(0.0)))
            .collect())
    }

    fn insert_summary(&self, summary: HistoricalSummary) -> Result<HistoricalSummary> {
        let mut conn = get_connection(&self.pool)?;
        Ok(diesel::insert_into(historical_summaries::table)
            .values(&summary)
            .returning(historical_summaries::all_columns)
            .get_result(&mut conn)?)
    }

    fn list_summaries(
        &self,
        user_id: &str,
        period_type: PeriodType,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<HistoricalSummary>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(historical_summaries::table
            .filter(
                historical_summaries::user_id
                    .eq(user_id)
                    .and(historical_summaries::period_type.eq(period_type.as_str()))
                    .and(historical_summaries::period_start.le(end))
                    .and(historical_summaries::period_end.ge(start)),
            )
            .order(historical_summaries::period_start.asc())
            .load::<HistoricalSummary>(&mut conn)?)
    }
}
