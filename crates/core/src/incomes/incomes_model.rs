use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// An income entry, e.g. a monthly salary payment.
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
#[diesel(table_name = crate::schema::incomes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct Income {
    pub id: String,
    pub user_id: String,
    pub source: String,
    pub amount: f64,
    pub received_at: NaiveDate,
    pub created_at: NaiveDateTime,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewIncome {
    #[serde(default)]
    pub source: String,
    pub amount: f64,
    pub received_at: NaiveDate,
}

/// Partial update; absent fields leave the stored value untouched.
#[derive(AsChangeset, Deserialize, Debug, Clone, Default)]
#[diesel(table_name = crate::schema::incomes)]
#[serde(rename_all = "camelCase")]
pub struct IncomeUpdate {
    pub source: Option<String>,
    pub amount: Option<f64>,
    pub received_at: Option<NaiveDate>,
}

impl IncomeUpdate {
    pub fn is_empty(&self) -> bool {
        self.source.is_none() && self.amount.is_none() && self.received_at.is_none()
    }
}
