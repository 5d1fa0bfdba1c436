use std::sync::Arc;

use diesel::prelude::*;

use crate::db::{get_connection, DbPool};
use crate::errors::{Error, Result};
use crate::expenses::expenses_model::{Expense, ExpenseUpdate};
use crate::expenses::expenses_traits::ExpenseRepositoryTrait;
use crate::schema::expenses;
use crate::schema::expenses::dsl::*;

pub struct ExpenseRepository {
    pool: Arc<DbPool>,
}

impl ExpenseRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        ExpenseRepository { pool }
    }
}

impl ExpenseRepositoryTrait for ExpenseRepository {
    fn insert(&self, expense: Expense) -> Result<Expense> {
        let mut conn = get_connection(&self.pool)?;
        Ok(diesel::insert_into(expenses::table)
            .values(&expense)
            .returning(expenses::all_columns)
            .get_result(&mut conn)?)
    }

    fn list(&self, expense_user_id: &str, limit: Option<i64>) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = expenses
            .filter(user_id.eq(expense_user_id))
            .order(spent_at.desc())
            .into_boxed();
        if let Some(max) = limit {
            query = query.limit(max);
        }
        Ok(query.load::<Expense>(&mut conn)?)
    }

    fn update(
        &self,
        expense_id: &str,
        expense_user_id: &str,
        patch: ExpenseUpdate,
    ) -> Result<Expense> {
        let mut conn = get_connection(&self.pool)?;
        let affected = diesel::update(
            expenses.filter(id.eq(expense_id).and(user_id.eq(expense_user_id))),
        )
        .set(&patch)
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound(format!("expense {}", expense_id)));
        }

        Ok(expenses.filter(id.eq(expense_id)).first(&mut conn)?)
    }

    fn delete(&self, expense_id: &str, expense_user_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(
            diesel::delete(expenses.filter(id.eq(expense_id).and(user_id.eq(expense_user_id))))
                .execute(&mut conn)?,
        )
    }
}
