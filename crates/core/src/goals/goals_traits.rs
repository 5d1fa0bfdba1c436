use std::collections::HashMap;

use crate::context::UserContext;
use crate::errors::Result;
use crate::goals::goals_model::{
    Goal, GoalCategory, GoalContribution, GoalExpense, GoalUpdate, GoalWithProgress,
    GoalWithSubgoals, NewGoal, NewGoalContribution, NewGoalExpense,
};

pub trait GoalRepositoryTrait: Send + Sync {
    fn insert(&self, goal: Goal) -> Result<Goal>;
    fn list(&self, user_id: &str) -> Result<Vec<Goal>>;
    fn update(&self, goal_id: &str, user_id: &str, patch: GoalUpdate) -> Result<Goal>;
    fn delete(&self, goal_id: &str, user_id: &str) -> Result<usize>;

    fn list_main_goals(&self, user_id: &str) -> Result<Vec<Goal>>;
    fn list_subgoals(&self, user_id: &str, parent_id: &str) -> Result<Vec<Goal>>;

    /// All-time contribution totals per goal id.
    fn contribution_sums(&self, user_id: &str) -> Result<HashMap<String, f64>>;
    /// All-time goal-linked expense totals per goal id (via `Expense.goal_id`).
    fn expense_sums(&self, user_id: &str) -> Result<HashMap<String, f64>>;

    fn insert_contribution(&self, contribution: GoalContribution) -> Result<GoalContribution>;
    fn insert_goal_expense(&self, goal_expense: GoalExpense) -> Result<GoalExpense>;
    fn list_goal_expenses(&self, user_id: &str, goal_id: &str) -> Result<Vec<GoalExpense>>;

    fn list_goal_categories(&self) -> Result<Vec<GoalCategory>>;
}

pub trait GoalServiceTrait: Send + Sync {
    fn create_goal(&self, ctx: &UserContext, new_goal: NewGoal) -> Result<Goal>;
    fn update_goal(&self, ctx: &UserContext, goal_id: &str, patch: GoalUpdate) -> Result<Goal>;
    fn delete_goal(&self, ctx: &UserContext, goal_id: &str) -> Result<()>;

    fn list_goals_with_progress(&self, ctx: &UserContext) -> Result<Vec<GoalWithProgress>>;
    fn list_main_goals_with_subgoals(&self, ctx: &UserContext) -> Result<Vec<GoalWithSubgoals>>;

    fn create_contribution(
        &self,
        ctx: &UserContext,
        new_contribution: NewGoalContribution,
    ) -> Result<GoalContribution>;
    fn create_goal_expense(
        &self,
        ctx: &UserContext,
        new_goal_expense: NewGoalExpense,
    ) -> Result<GoalExpense>;
    fn list_goal_expenses(&self, ctx: &UserContext, goal_id: &str) -> Result<Vec<GoalExpense>>;

    fn list_goal_categories(&self) -> Result<Vec<GoalCategory>>;
}
