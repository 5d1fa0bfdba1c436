use std::sync::Arc;

use chrono::Utc;
use log::debug;
use uuid::Uuid;

use crate::context::UserContext;
use crate::errors::{Error, Result, ValidationError};
use crate::goals::goals_model::{
    Goal, GoalCategory, GoalContribution, GoalExpense, GoalUpdate, GoalWithProgress,
    GoalWithSubgoals, NewGoal, NewGoalContribution, NewGoalExpense,
};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};

const MAX_GOAL_NAME_LEN: usize = 200;
const MAX_GOAL_DESCRIPTION_LEN: usize = 1000;

pub struct GoalService {
    goal_repo: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    pub fn new(goal_repo: Arc<dyn GoalRepositoryTrait>) -> Self {
        GoalService { goal_repo }
    }

    /// Progress is measured against contributions alone; goal-linked
    /// expenses are reported but never subtracted.
    fn progress_pct(target_amount: f64, contributed: f64) -> f64 {
        if target_amount <= 0.0 {
            return 0.0;
        }
        (contributed / target_amount * 100.0).min(100.0)
    }

    fn validate_name(name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(ValidationError::MissingField("name".into()).into());
        }
        if name.len() > MAX_GOAL_NAME_LEN {
            return Err(ValidationError::InvalidInput(format!(
                "goal name must be {} characters or less",
                MAX_GOAL_NAME_LEN
            ))
            .into());
        }
        Ok(())
    }

    fn validate_description(description: &str) -> Result<()> {
        if description.len() > MAX_GOAL_DESCRIPTION_LEN {
            return Err(ValidationError::InvalidInput(format!(
                "goal description must be {} characters or less",
                MAX_GOAL_DESCRIPTION_LEN
            ))
            .into());
        }
        Ok(())
    }

    fn validate_target_amount(target_amount: f64) -> Result<()> {
        if target_amount <= 0.0 {
            return Err(ValidationError::NonPositiveAmount(target_amount).into());
        }
        Ok(())
    }

    fn validate_target_date(target_date: chrono::NaiveDate) -> Result<()> {
        if target_date <= Utc::now().date_naive() {
            return Err(
                ValidationError::InvalidInput("goal target date must be in the future".into())
                    .into(),
            );
        }
        Ok(())
    }
}

impl GoalServiceTrait for GoalService {
    fn create_goal(&self, ctx: &UserContext, new_goal: NewGoal) -> Result<Goal> {
        Self::validate_name(&new_goal.name)?;
        Self::validate_description(&new_goal.description)?;
        Self::validate_target_amount(new_goal.target_amount)?;
        if let Some(date) = new_goal.target_date {
            Self::validate_target_date(date)?;
        }

        let now = Utc::now().naive_utc();
        let goal = Goal {
            id: Uuid::new_v4().to_string(),
            user_id: ctx.user_id.clone(),
            name: new_goal.name,
            description: new_goal.description,
            category: new_goal.category,
            target_amount: new_goal.target_amount,
            target_date: new_goal.target_date,
            parent_goal_id: new_goal.parent_goal_id,
            is_main_goal: new_goal.is_main_goal,
            created_at: now,
            updated_at: now,
        };

        debug!("Creating goal '{}'", goal.name);
        self.goal_repo.insert(goal)
    }

    fn update_goal(&self, ctx: &UserContext, goal_id: &str, patch: GoalUpdate) -> Result<Goal> {
        if patch.is_empty() {
            return Err(ValidationError::InvalidInput("no fields to update".into()).into());
        }
        if let Some(ref name) = patch.name {
            Self::validate_name(name)?;
        }
        if let Some(ref description) = patch.description {
            Self::validate_description(description)?;
        }
        if let Some(target_amount) = patch.target_amount {
            Self::validate_target_amount(target_amount)?;
        }
        if let Some(date) = patch.target_date {
            Self::validate_target_date(date)?;
        }

        let mut patch = patch;
        patch.updated_at = Some(Utc::now().naive_utc());
        self.goal_repo.update(goal_id, &ctx.user_id, patch)
    }

    fn delete_goal(&self, ctx: &UserContext, goal_id: &str) -> Result<()> {
        let deleted = self.goal_repo.delete(goal_id, &ctx.user_id)?;
        if deleted == 0 {
            return Err(Error::NotFound(format!("goal {}", goal_id)));
        }
        Ok(())
    }

    fn list_goals_with_progress(&self, ctx: &UserContext) -> Result<Vec<GoalWithProgress>> {
        let goals = self.goal_repo.list(&ctx.user_id)?;
        let contributions = self.goal_repo.contribution_sums(&ctx.user_id)?;
        let expenses = self.goal_repo.expense_sums(&ctx.user_id)?;

        Ok(goals
            .into_iter()
            .map(|goal| {
                let contributed_sum = contributions.get(&goal.id).copied().unwrap_or(0.0);
                let expense_sum = expenses.get(&goal.id).copied().unwrap_or(0.0);
                let progress = Self::progress_pct(goal.target_amount, contributed_sum);
                GoalWithProgress {
                    goal,
                    contributed_sum,
                    expense_sum,
                    progress,
                }
            })
            .collect())
    }

    fn list_main_goals_with_subgoals(&self, ctx: &UserContext) -> Result<Vec<GoalWithSubgoals>> {
        let main_goals = self.goal_repo.list_main_goals(&ctx.user_id)?;

        let mut result = Vec::with_capacity(main_goals.len());
        for main_goal in main_goals {
            let subgoals = self.goal_repo.list_subgoals(&ctx.user_id, &main_goal.id)?;
            result.push(GoalWithSubgoals {
                goal: main_goal,
                subgoals,
            });
        }
        Ok(result)
    }

    fn create_contribution(
        &self,
        ctx: &UserContext,
        new_contribution: NewGoalContribution,
    ) -> Result<GoalContribution> {
        if new_contribution.amount <= 0.0 {
            return Err(ValidationError::NonPositiveAmount(new_contribution.amount).into());
        }

        let contribution = GoalContribution {
            id: Uuid::new_v4().to_string(),
            user_id: ctx.user_id.clone(),
            goal_id: new_contribution.goal_id,
            amount: new_contribution.amount,
            contributed_at: new_contribution.contributed_at,
            created_at: Utc::now().naive_utc(),
        };

        self.goal_repo.insert_contribution(contribution)
    }

    fn create_goal_expense(
        &self,
        ctx: &UserContext,
        new_goal_expense: NewGoalExpense,
    ) -> Result<GoalExpense> {
        if new_goal_expense.amount <= 0.0 {
            return Err(ValidationError::NonPositiveAmount(new_goal_expense.amount).into());
        }

        let goal_expense = GoalExpense {
            id: Uuid::new_v4().to_string(),
            user_id: ctx.user_id.clone(),
            goal_id: new_goal_expense.goal_id,
            expense_id: new_goal_expense.expense_id,
            amount: new_goal_expense.amount,
            description: new_goal_expense.description,
            created_at: Utc::now().naive_utc(),
        };

        self.goal_repo.insert_goal_expense(goal_expense)
    }

    fn list_goal_expenses(&self, ctx: &UserContext, goal_id: &str) -> Result<Vec<GoalExpense>> {
        self.goal_repo.list_goal_expenses(&ctx.user_id, goal_id)
    }

    fn list_goal_categories(&self) -> Result<Vec<GoalCategory>> {
        self.goal_repo.list_goal_categories()
    }
}
