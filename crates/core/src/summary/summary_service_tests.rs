//! Unit tests for the aggregation engine.

use super::period::PeriodType;
use super::summary_model::HistoricalSummary;
use super::summary_service::SummaryService;
use super::summary_traits::{SummaryRepositoryTrait, SummaryServiceTrait};
use crate::context::UserContext;
use crate::errors::{Error, Result};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

// ============================================================================
// Mock Implementations
// ============================================================================

/// In-memory ledger store over raw records, applying the half-open
/// `>= start AND < end` window the SQL layer applies.
#[derive(Default)]
struct MockLedger {
    // (date, amount)
    incomes: Vec<(NaiveDate, f64)>,
    // (date, category, goal_id, amount)
    expenses: Vec<(NaiveDate, String, Option<String>, f64)>,
    // (date, goal_id, amount)
    contributions: Vec<(NaiveDate, String, f64)>,
    summaries: RwLock<Vec<HistoricalSummary>>,
}

impl SummaryRepositoryTrait for MockLedger {
    fn sum_income(&self, _user_id: &str, start: NaiveDate, end: NaiveDate) -> Result<f64> {
        Ok(self
            .incomes
            .iter()
            .filter(|(date, _)| *date >= start && *date < end)
            .map(|(_, amount)| amount)
            .sum())
    }

    fn sum_expenses(&self, _user_id: &str, start: NaiveDate, end: NaiveDate) -> Result<f64> {
        Ok(self
            .expenses
            .iter()
            .filter(|(date, _, _, _)| *date >= start && *date < end)
            .map(|(_, _, _, amount)| amount)
            .sum())
    }

    fn expense_totals_by_category(
        &self,
        _user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<HashMap<String, f64>> {
        let mut totals = HashMap::new();
        for (date, category, _, amount) in &self.expenses {
            if *date >= start && *date < end {
                *totals.entry(category.clone()).or_insert(0.0) += amount;
            }
        }
        Ok(totals)
    }

    fn expense_totals_by_goal(
        &self,
        _user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<HashMap<String, f64>> {
        let mut totals = HashMap::new();
        for (date, _, goal, amount) in &self.expenses {
            if let Some(goal) = goal {
                if *date >= start && *date < end {
                    *totals.entry(goal.clone()).or_insert(0.0) += amount;
                }
            }
        }
        Ok(totals)
    }

    fn contribution_totals_by_goal(
        &self,
        _user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<HashMap<String, f64>> {
        let mut totals = HashMap::new();
        for (date, goal, amount) in &self.contributions {
            if *date >= start && *date < end {
                *totals.entry(goal.clone()).or_insert(0.0) += amount;
            }
        }
        Ok(totals)
    }

    fn insert_summary(&self, summary: HistoricalSummary) -> Result<HistoricalSummary> {
        self.summaries.write().unwrap().push(summary.clone());
        Ok(summary)
    }

    fn list_summaries(
        &self,
        user_id: &str,
        period_type: PeriodType,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<HistoricalSummary>> {
        Ok(self
            .summaries
            .read()
            .unwrap()
            .iter()
            .filter(|s| {
                s.user_id == user_id
                    && s.period_type == period_type.as_str()
                    && s.period_start <= end
                    && s.period_end >= start
            })
            .cloned()
            .collect())
    }
}

/// A store that must never be reached: every query panics. Used to prove
/// validation happens before any query executes.
struct UnreachableLedger;

impl SummaryRepositoryTrait for UnreachableLedger {
    fn sum_income(&self, _: &str, _: NaiveDate, _: NaiveDate) -> Result<f64> {
        panic!("query executed before validation")
    }
    fn sum_expenses(&self, _: &str, _: NaiveDate, _: NaiveDate) -> Result<f64> {
        panic!("query executed before validation")
    }
    fn expense_totals_by_category(
        &self,
        _: &str,
        _: NaiveDate,
        _: NaiveDate,
    ) -> Result<HashMap<String, f64>> {
        panic!("query executed before validation")
    }
    fn expense_totals_by_goal(
        &self,
        _: &str,
        _: NaiveDate,
        _: NaiveDate,
    ) -> Result<HashMap<String, f64>> {
        panic!("query executed before validation")
    }
    fn contribution_totals_by_goal(
        &self,
        _: &str,
        _: NaiveDate,
        _: NaiveDate,
    ) -> Result<HashMap<String, f64>> {
        panic!("query executed before validation")
    }
    fn insert_summary(&self, _: HistoricalSummary) -> Result<HistoricalSummary> {
        panic!("query executed before validation")
    }
    fn list_summaries(
        &self,
        _: &str,
        _: PeriodType,
        _: NaiveDate,
        _: NaiveDate,
    ) -> Result<Vec<HistoricalSummary>> {
        panic!("query executed before validation")
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn ctx() -> UserContext {
    UserContext::new("user-1")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Income $5000 on 2024-06-15, rent $1500 on 2024-06-01, food $600 on
/// 2024-06-20, $500 contributed to goal G on 2024-06-10.
fn june_ledger() -> MockLedger {
    MockLedger {
        incomes: vec![(date(2024, 6, 15), 5000.0)],
        expenses: vec![
            (date(2024, 6, 1), "rent".to_string(), None, 1500.0),
            (date(2024, 6, 20), "food".to_string(), None, 600.0),
        ],
        contributions: vec![(date(2024, 6, 10), "G".to_string(), 500.0)],
        ..Default::default()
    }
}

fn service(ledger: MockLedger) -> SummaryService {
    SummaryService::new(Arc::new(ledger))
}

// ============================================================================
// Monthly summary
// ============================================================================

#[test]
fn monthly_summary_aggregates_a_full_month() {
    let summary = service(june_ledger())
        .get_monthly_summary(&ctx(), 2024, 6)
        .unwrap();

    assert_eq!(summary.total_income, 5000.0);
    assert_eq!(summary.total_expenses, 2100.0);
    assert_eq!(summary.category_breakdown.len(), 2);
    assert_eq!(summary.category_breakdown["rent"], 1500.0);
    assert_eq!(summary.category_breakdown["food"], 600.0);
    assert_eq!(summary.goal_contributions["G"], 500.0);
    assert_eq!(summary.total_savings, 500.0);
    assert!(summary.goal_spending.is_empty());
}

#[test]
fn records_on_the_next_month_boundary_are_excluded() {
    let mut ledger = june_ledger();
    // First day of July: must not leak into June.
    ledger
        .expenses
        .push((date(2024, 7, 1), "rent".to_string(), None, 999.0));
    ledger.incomes.push((date(2024, 7, 1), 999.0));

    let summary = service(ledger).get_monthly_summary(&ctx(), 2024, 6).unwrap();
    assert_eq!(summary.total_income, 5000.0);
    assert_eq!(summary.total_expenses, 2100.0);
}

#[test]
fn first_day_of_month_is_included() {
    let summary = service(june_ledger())
        .get_monthly_summary(&ctx(), 2024, 6)
        .unwrap();
    // Rent was spent on June 1st and counts.
    assert_eq!(summary.category_breakdown["rent"], 1500.0);
}

#[test]
fn breakdown_has_no_zero_categories() {
    let mut ledger = june_ledger();
    // Spent in May only; must not show up as a June key at all.
    ledger
        .expenses
        .push((date(2024, 5, 3), "transport".to_string(), None, 80.0));

    let summary = service(ledger).get_monthly_summary(&ctx(), 2024, 6).unwrap();
    assert!(!summary.category_breakdown.contains_key("transport"));
    let mut keys: Vec<&str> = summary
        .category_breakdown
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["food", "rent"]);
}

#[test]
fn monthly_savings_are_contributions_not_income_minus_expenses() {
    let mut ledger = june_ledger();
    ledger.contributions.clear();

    // 5000 income vs 2100 expenses, but nothing contributed: zero savings.
    let summary = service(ledger).get_monthly_summary(&ctx(), 2024, 6).unwrap();
    assert_eq!(summary.total_savings, 0.0);
}

#[test]
fn goal_linked_expenses_feed_goal_spending() {
    let mut ledger = june_ledger();
    ledger.expenses.push((
        date(2024, 6, 12),
        "gear".to_string(),
        Some("G".to_string()),
        250.0,
    ));

    let summary = service(ledger).get_monthly_summary(&ctx(), 2024, 6).unwrap();
    assert_eq!(summary.goal_spending["G"], 250.0);
    assert_eq!(summary.total_expenses, 2350.0);
}

#[test]
fn invalid_month_fails_before_any_query() {
    let svc = SummaryService::new(Arc::new(UnreachableLedger));
    for month in [0, 13] {
        let err = svc.get_monthly_summary(&ctx(), 2024, month).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}

// ============================================================================
// Historical summaries
// ============================================================================

#[test]
fn historical_savings_are_income_minus_expenses() {
    let summary = service(june_ledger())
        .generate_historical_summary(&ctx(), "monthly", "2024-06-01", "2024-07-01")
        .unwrap();

    assert_eq!(summary.total_income, 5000.0);
    assert_eq!(summary.total_expense, 2100.0);
    assert_eq!(summary.total_savings, 2900.0);
    assert_eq!(summary.period_type, "monthly");

    let breakdown = summary.category_breakdown();
    assert_eq!(breakdown["rent"], 1500.0);
    assert_eq!(breakdown["food"], 600.0);
}

#[test]
fn generate_round_trips_through_listing() {
    let svc = service(june_ledger());
    let generated = svc
        .generate_historical_summary(&ctx(), "monthly", "2024-06-01", "2024-07-01")
        .unwrap();

    let listed = svc
        .get_historical_data(&ctx(), "monthly", "2024-06-01", "2024-07-01")
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, generated.id);
    assert_eq!(listed[0].total_income, generated.total_income);
    assert_eq!(listed[0].total_expense, generated.total_expense);
    assert_eq!(listed[0].total_savings, generated.total_savings);
}

#[test]
fn regenerating_appends_instead_of_upserting() {
    let svc = service(june_ledger());
    let first = svc
        .generate_historical_summary(&ctx(), "monthly", "2024-06-01", "2024-07-01")
        .unwrap();
    let second = svc
        .generate_historical_summary(&ctx(), "monthly", "2024-06-01", "2024-07-01")
        .unwrap();
    assert_ne!(first.id, second.id);

    let listed = svc
        .get_historical_data(&ctx(), "monthly", "2024-06-01", "2024-07-01")
        .unwrap();
    assert_eq!(listed.len(), 2);
}

#[test]
fn compute_does_not_persist() {
    let svc = service(june_ledger());
    let computed = svc
        .compute_historical_summary(&ctx(), "monthly", "2024-06-01", "2024-07-01")
        .unwrap();
    assert_eq!(computed.total_savings, 2900.0);

    let listed = svc
        .get_historical_data(&ctx(), "monthly", "2024-06-01", "2024-07-01")
        .unwrap();
    assert!(listed.is_empty());
}

#[test]
fn historical_window_is_taken_verbatim() {
    // A "yearly" request over ten days of June computes exactly those days.
    let summary = service(june_ledger())
        .generate_historical_summary(&ctx(), "yearly", "2024-06-05", "2024-06-16")
        .unwrap();
    assert_eq!(summary.total_income, 5000.0); // June 15th in range
    assert_eq!(summary.total_expense, 0.0); // rent (1st) and food (20th) out
    assert_eq!(summary.period_start, date(2024, 6, 5));
    assert_eq!(summary.period_end, date(2024, 6, 16));
}

#[test]
fn invalid_period_type_fails_before_any_query() {
    let svc = SummaryService::new(Arc::new(UnreachableLedger));
    let err = svc
        .generate_historical_summary(&ctx(), "daily", "2024-06-01", "2024-07-01")
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn malformed_dates_fail_before_any_query() {
    let svc = SummaryService::new(Arc::new(UnreachableLedger));
    let err = svc
        .generate_historical_summary(&ctx(), "monthly", "June 1st 2024", "2024-07-01")
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    let err = svc
        .get_historical_data(&ctx(), "monthly", "2024-06-01", "07/01/2024")
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn malformed_category_data_reads_as_empty_breakdown() {
    let svc = service(june_ledger());
    let mut summary = svc
        .generate_historical_summary(&ctx(), "weekly", "2024-06-01", "2024-06-08")
        .unwrap();
    summary.category_data = "{not json".to_string();
    assert!(summary.category_breakdown().is_empty());
}
