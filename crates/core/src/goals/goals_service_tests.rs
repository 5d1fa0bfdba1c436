//! Unit tests for the goal progress calculator and hierarchy assembly.

use super::goals_model::*;
use super::goals_service::GoalService;
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::context::UserContext;
use crate::errors::{Error, Result};
use chrono::{Days, NaiveDate, Utc};
use std::collections::HashMap;
use std::sync::Arc;

// ============================================================================
// Mock Implementations
// ============================================================================

#[derive(Default)]
struct MockGoalRepository {
    goals: Vec<Goal>,
    contributions: Vec<GoalContribution>,
    goal_expenses: Vec<GoalExpense>,
    // (goal_id, amount) pairs standing in for goal-linked expense rows
    linked_expenses: Vec<(String, f64)>,
}

impl GoalRepositoryTrait for MockGoalRepository {
    fn insert(&self, goal: Goal) -> Result<Goal> {
        Ok(goal)
    }

    fn list(&self, user_id: &str) -> Result<Vec<Goal>> {
        let mut goals: Vec<Goal> = self
            .goals
            .iter()
            .filter(|g| g.user_id == user_id)
            .cloned()
            .collect();
        goals.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(goals)
    }

    fn update(&self, goal_id: &str, _user_id: &str, _patch: GoalUpdate) -> Result<Goal> {
        self.goals
            .iter()
            .find(|g| g.id == goal_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("goal {}", goal_id)))
    }

    fn delete(&self, goal_id: &str, _user_id: &str) -> Result<usize> {
        Ok(self.goals.iter().filter(|g| g.id == goal_id).count())
    }

    fn list_main_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        let mut goals: Vec<Goal> = self
            .goals
            .iter()
            .filter(|g| g.user_id == user_id && g.is_main_goal)
            .cloned()
            .collect();
        goals.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(goals)
    }

    fn list_subgoals(&self, user_id: &str, parent_id: &str) -> Result<Vec<Goal>> {
        let mut goals: Vec<Goal> = self
            .goals
            .iter()
            .filter(|g| g.user_id == user_id && g.parent_goal_id.as_deref() == Some(parent_id))
            .cloned()
            .collect();
        goals.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(goals)
    }

    fn contribution_sums(&self, user_id: &str) -> Result<HashMap<String, f64>> {
        let mut sums = HashMap::new();
        for c in self.contributions.iter().filter(|c| c.user_id == user_id) {
            *sums.entry(c.goal_id.clone()).or_insert(0.0) += c.amount;
        }
        Ok(sums)
    }

    fn expense_sums(&self, _user_id: &str) -> Result<HashMap<String, f64>> {
        let mut sums = HashMap::new();
        for (goal_id, amount) in &self.linked_expenses {
            *sums.entry(goal_id.clone()).or_insert(0.0) += amount;
        }
        Ok(sums)
    }

    fn insert_contribution(&self, contribution: GoalContribution) -> Result<GoalContribution> {
        Ok(contribution)
    }

    fn insert_goal_expense(&self, goal_expense: GoalExpense) -> Result<GoalExpense> {
        Ok(goal_expense)
    }

    fn list_goal_expenses(&self, user_id: &str, goal_id: &str) -> Result<Vec<GoalExpense>> {
        Ok(self
            .goal_expenses
            .iter()
            .filter(|e| e.user_id == user_id && e.goal_id == goal_id)
            .cloned()
            .collect())
    }

    fn list_goal_categories(&self) -> Result<Vec<GoalCategory>> {
        Ok(Vec::new())
    }
}

// ============================================================================
// Helpers
// ============================================================================

const USER: &str = "11111111-2222-3333-4444-555555555555";

fn ctx() -> UserContext {
    UserContext::new(USER)
}

fn goal(id: &str, target_amount: f64, created_days_ago: u64) -> Goal {
    let created = Utc::now()
        .naive_utc()
        .checked_sub_days(Days::new(created_days_ago))
        .unwrap();
    Goal {
        id: id.to_string(),
        user_id: USER.to_string(),
        name: format!("goal {}", id),
        description: String::new(),
        category: "savings".to_string(),
        target_amount,
        target_date: None,
        parent_goal_id: None,
        is_main_goal: false,
        created_at: created,
        updated_at: created,
    }
}

fn contribution(goal_id: &str, amount: f64) -> GoalContribution {
    GoalContribution {
        id: uuid::Uuid::new_v4().to_string(),
        user_id: USER.to_string(),
        goal_id: goal_id.to_string(),
        amount,
        contributed_at: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
        created_at: Utc::now().naive_utc(),
    }
}

fn service(repo: MockGoalRepository) -> GoalService {
    GoalService::new(Arc::new(repo))
}

// ============================================================================
// Progress
// ============================================================================

#[test]
fn progress_is_capped_at_100() {
    let repo = MockGoalRepository {
        goals: vec![goal("g1", 1000.0, 1)],
        contributions: vec![contribution("g1", 700.0), contribution("g1", 500.0)],
        ..Default::default()
    };

    let result = service(repo).list_goals_with_progress(&ctx()).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].contributed_sum, 1200.0);
    assert_eq!(result[0].progress, 100.0);
}

#[test]
fn progress_with_zero_target_is_zero() {
    let repo = MockGoalRepository {
        goals: vec![goal("g1", 0.0, 1)],
        contributions: vec![contribution("g1", 250.0)],
        ..Default::default()
    };

    let result = service(repo).list_goals_with_progress(&ctx()).unwrap();
    assert_eq!(result[0].progress, 0.0);
}

#[test]
fn goals_without_activity_report_zero_sums() {
    let repo = MockGoalRepository {
        goals: vec![goal("g1", 500.0, 1)],
        ..Default::default()
    };

    let result = service(repo).list_goals_with_progress(&ctx()).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].contributed_sum, 0.0);
    assert_eq!(result[0].expense_sum, 0.0);
    assert_eq!(result[0].progress, 0.0);
}

#[test]
fn expenses_are_reported_but_do_not_reduce_progress() {
    let repo = MockGoalRepository {
        goals: vec![goal("g1", 1000.0, 1)],
        contributions: vec![contribution("g1", 400.0)],
        linked_expenses: vec![("g1".to_string(), 300.0)],
        ..Default::default()
    };

    let result = service(repo).list_goals_with_progress(&ctx()).unwrap();
    assert_eq!(result[0].expense_sum, 300.0);
    // 400 / 1000, untouched by the 300 spent
    assert_eq!(result[0].progress, 40.0);
}

#[test]
fn goals_are_listed_newest_first() {
    let repo = MockGoalRepository {
        goals: vec![goal("old", 100.0, 10), goal("new", 100.0, 1)],
        ..Default::default()
    };

    let result = service(repo).list_goals_with_progress(&ctx()).unwrap();
    assert_eq!(result[0].goal.id, "new");
    assert_eq!(result[1].goal.id, "old");
}

// ============================================================================
// Hierarchy
// ============================================================================

#[test]
fn non_main_goal_never_appears_top_level() {
    let mut orphan = goal("standalone", 100.0, 1);
    orphan.is_main_goal = false;
    orphan.parent_goal_id = None;

    let repo = MockGoalRepository {
        goals: vec![orphan],
        ..Default::default()
    };

    let result = service(repo).list_main_goals_with_subgoals(&ctx()).unwrap();
    assert!(result.is_empty());
}

#[test]
fn subgoals_are_attached_oldest_first() {
    let mut main = goal("main", 1000.0, 5);
    main.is_main_goal = true;
    let mut sub_old = goal("sub-old", 100.0, 4);
    sub_old.parent_goal_id = Some("main".to_string());
    let mut sub_new = goal("sub-new", 100.0, 2);
    sub_new.parent_goal_id = Some("main".to_string());

    let repo = MockGoalRepository {
        goals: vec![main, sub_new, sub_old],
        ..Default::default()
    };

    let result = service(repo).list_main_goals_with_subgoals(&ctx()).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].goal.id, "main");
    let ids: Vec<&str> = result[0].subgoals.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, vec!["sub-old", "sub-new"]);
}

#[test]
fn subgoal_of_missing_parent_is_silently_absent() {
    let mut dangling = goal("dangling", 100.0, 1);
    dangling.parent_goal_id = Some("no-such-goal".to_string());

    let repo = MockGoalRepository {
        goals: vec![dangling],
        ..Default::default()
    };

    let result = service(repo).list_main_goals_with_subgoals(&ctx()).unwrap();
    assert!(result.is_empty());
}

// ============================================================================
// Validation
// ============================================================================

fn new_goal(target_amount: f64) -> NewGoal {
    NewGoal {
        name: "vacation".to_string(),
        description: String::new(),
        category: "travel".to_string(),
        target_amount,
        target_date: None,
        parent_goal_id: None,
        is_main_goal: true,
    }
}

#[test]
fn create_goal_rejects_non_positive_target() {
    let svc = service(MockGoalRepository::default());
    let err = svc.create_goal(&ctx(), new_goal(0.0)).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn create_goal_rejects_past_target_date() {
    let svc = service(MockGoalRepository::default());
    let mut request = new_goal(500.0);
    request.target_date = NaiveDate::from_ymd_opt(2020, 1, 1);
    let err = svc.create_goal(&ctx(), request).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn create_goal_accepts_future_target_date() {
    let svc = service(MockGoalRepository::default());
    let mut request = new_goal(500.0);
    request.target_date = Utc::now().date_naive().checked_add_days(Days::new(30));
    let created = svc.create_goal(&ctx(), request).unwrap();
    assert_eq!(created.target_amount, 500.0);
    assert!(created.is_main_goal);
}

#[test]
fn empty_goal_update_is_rejected() {
    let svc = service(MockGoalRepository::default());
    let err = svc
        .update_goal(&ctx(), "g1", GoalUpdate::default())
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn contribution_amount_must_be_positive() {
    let svc = service(MockGoalRepository::default());
    let err = svc
        .create_contribution(
            &ctx(),
            NewGoalContribution {
                goal_id: "g1".to_string(),
                amount: -5.0,
                contributed_at: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            },
        )
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}
