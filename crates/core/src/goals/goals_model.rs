use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// A savings goal. `parent_goal_id` and `is_main_goal` are independent
/// fields: the first forms a (shallow) tree, the second marks entries for
/// the hierarchical listing.
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
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub target_amount: f64,
    pub target_date: Option<NaiveDate>,
    pub parent_goal_id: Option<String>,
    pub is_main_goal: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub target_amount: f64,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    #[serde(default)]
    pub parent_goal_id: Option<String>,
    #[serde(default)]
    pub is_main_goal: bool,
}

/// Partial update; `parent_goal_id` is tri-state so a sub-goal can be
/// detached with an explicit null. `updated_at` is stamped by the service,
/// never taken from the wire.
#[derive(AsChangeset, Deserialize, Debug, Clone, Default)]
#[diesel(table_name = crate::schema::goals)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub target_amount: Option<f64>,
    pub target_date: Option<NaiveDate>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub parent_goal_id: Option<Option<String>>,
    pub is_main_goal: Option<bool>,
    #[serde(skip)]
    pub updated_at: Option<NaiveDateTime>,
}

impl GoalUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.target_amount.is_none()
            && self.target_date.is_none()
            && self.parent_goal_id.is_none()
            && self.is_main_goal.is_none()
    }
}

/// Money earmarked toward a goal.
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
#[diesel(table_name = crate::schema::goal_contributions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct GoalContribution {
    pub id: String,
    pub user_id: String,
    pub goal_id: String,
    pub amount: f64,
    pub contributed_at: NaiveDate,
    pub created_at: NaiveDateTime,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoalContribution {
    pub goal_id: String,
    pub amount: f64,
    pub contributed_at: NaiveDate,
}

/// Association between an existing expense and a goal. Kept separate from
/// `Expense.goal_id`; the two linkage mechanisms are never merged.
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
#[diesel(table_name = crate::schema::goal_expenses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct GoalExpense {
    pub id: String,
    pub user_id: String,
    pub goal_id: String,
    pub expense_id: String,
    pub amount: f64,
    pub description: String,
    pub created_at: NaiveDateTime,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoalExpense {
    pub goal_id: String,
    pub expense_id: String,
    pub amount: f64,
    #[serde(default)]
    pub description: String,
}

/// Global, predefined goal taxonomy; display metadata only.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::goal_categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct GoalCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub created_at: NaiveDateTime,
}

/// A goal together with its all-time contribution/expense totals and the
/// progress percentage derived from contributions alone.
#[derive(Serialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GoalWithProgress {
    pub goal: Goal,
    pub contributed_sum: f64,
    pub expense_sum: f64,
    pub progress: f64,
}

#[derive(Serialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GoalWithSubgoals {
    pub goal: Goal,
    pub subgoals: Vec<Goal>,
}
