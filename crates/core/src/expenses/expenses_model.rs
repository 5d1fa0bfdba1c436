use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// A spending entry, optionally linked to a goal through `goal_id`.
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
#[diesel(table_name = crate::schema::expenses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub user_id: String,
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub spent_at: NaiveDate,
    pub goal_id: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub amount: f64,
    pub spent_at: NaiveDate,
    #[serde(default)]
    pub goal_id: Option<String>,
}

/// Partial update. `goal_id` is tri-state: absent leaves the link alone,
/// an explicit null clears it, a value re-points it.
#[derive(AsChangeset, Deserialize, Debug, Clone, Default)]
#[diesel(table_name = crate::schema::expenses)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseUpdate {
    pub category: Option<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub spent_at: Option<NaiveDate>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub goal_id: Option<Option<String>>,
}

impl ExpenseUpdate {
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.description.is_none()
            && self.amount.is_none()
            && self.spent_at.is_none()
            && self.goal_id.is_none()
    }
}
