use std::collections::HashMap;
use std::sync::Arc;

use diesel::dsl::sum;
use diesel::prelude::*;

use crate::db::{get_connection, DbPool};
use crate::errors::{Error, Result};
use crate::goals::goals_model::{
    Goal, GoalCategory, GoalContribution, GoalExpense, GoalUpdate,
};
use crate::goals::goals_traits::GoalRepositoryTrait;
use crate::schema::{expenses, goal_categories, goal_contributions, goal_expenses, goals};

pub struct GoalRepository {
    pool: Arc<DbPool>,
}

impl GoalRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        GoalRepository { pool }
    }
}

impl GoalRepositoryTrait for GoalRepository {
    fn insert(&self, goal: Goal) -> Result<Goal> {
        let mut conn = get_connection(&self.pool)?;
        Ok(diesel::insert_into(goals::table)
            .values(&goal)
            .returning(goals::all_columns)
            .get_result(&mut conn)?)
    }

    fn list(&self, user_id: &str) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(goals::table
            .filter(goals::user_id.eq(user_id))
            .order(goals::created_at.desc())
            .load::<Goal>(&mut conn)?)
    }

    fn update(&self, goal_id: &str, user_id: &str, patch: GoalUpdate) -> Result<Goal> {
        let mut conn = get_connection(&self.pool)?;
        let affected = diesel::update(
            goals::table.filter(goals::id.eq(goal_id).and(goals::user_id.eq(user_id))),
        )
        .set(&patch)
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound(format!("goal {}", goal_id)));
        }

        Ok(goals::table.filter(goals::id.eq(goal_id)).first(&mut conn)?)
    }

    fn delete(&self, goal_id: &str, user_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(diesel::delete(
            goals::table.filter(goals::id.eq(goal_id).and(goals::user_id.eq(user_id))),
        )
        .execute(&mut conn)?)
    }

    fn list_main_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(goals::table
            .filter(goals::user_id.eq(user_id).and(goals::is_main_goal.eq(true)))
            .order(goals::created_at.desc())
            .load::<Goal>(&mut conn)?)
    }

    fn list_subgoals(&self, user_id: &str, parent_id: &str) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(goals::table
            .filter(
                goals::user_id
                    .eq(user_id)
                    .and(goals::parent_goal_id.eq(parent_id)),
            )
            .order(goals::created_at.asc())
            .load::<Goal>(&mut conn)?)
    }

    fn contribution_sums(&self, user_id: &str) -> Result<HashMap<String, f64>> {
        let mut conn = get_connection(&self.pool)?;
        let rows: Vec<(String, Option<f64>)> = goal_contributions::table
            .filter(goal_contributions::user_id.eq(user_id))
            .group_by(goal_contributions::goal_id)
            .select((goal_contributions::goal_id, sum(goal_contributions::amount)))
            .load(&mut conn)?;
        Ok(rows
            .into_iter()
            .map(|(goal, total)| (goal, total.unwrap_or(0.0)))
            .collect())
    }

    fn expense_sums(&self, user_id: &str) -> Result<HashMap<String, f64>> {
        let mut conn = get_connection(&self.pool)?;
        let rows: Vec<(Option<String>, Option<f64>)> = expenses::table
            .filter(
                expenses::user_id
                    .eq(user_id)
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

    fn insert_contribution(&self, contribution: GoalContribution) -> Result<GoalContribution> {
        let mut conn = get_connection(&self.pool)?;
        Ok(diesel::insert_into(goal_contributions::table)
            .values(&contribution)
            .returning(goal_contributions::all_columns)
            .get_result(&mut conn)?)
    }

    fn insert_goal_expense(&self, goal_expense: GoalExpense) -> Result<GoalExpense> {
        let mut conn = get_connection(&self.pool)?;
        Ok(diesel::insert_into(goal_expenses::table)
            .values(&goal_expense)
            .returning(goal_expenses::all_columns)
            .get_result(&mut conn)?)
    }

    fn list_goal_expenses(&self, user_id: &str, goal_id: &str) -> Result<Vec<GoalExpense>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(goal_expenses::table
            .filter(
                goal_expenses::user_id
                    .eq(user_id)
                    .and(goal_expenses::goal_id.eq(goal_id)),
            )
            .order(goal_expenses::created_at.desc())
            .load::<GoalExpense>(&mut conn)?)
    }

    fn list_goal_categories(&self) -> Result<Vec<GoalCategory>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(goal_categories::table
            .order(goal_categories::name.asc())
            .load::<GoalCategory>(&mut conn)?)
    }
}
