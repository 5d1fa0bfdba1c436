use std::sync::Arc;

use diesel::prelude::*;

use crate::db::{get_connection, DbPool};
use crate::errors::{Error, Result};
use crate::incomes::incomes_model::{Income, IncomeUpdate};
use crate::incomes::incomes_traits::IncomeRepositoryTrait;
use crate::schema::incomes;
use crate::schema::incomes::dsl::*;

pub struct IncomeRepository {
    pool: Arc<DbPool>,
}

impl IncomeRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        IncomeRepository { pool }
    }
}

impl IncomeRepositoryTrait for IncomeRepository {
    fn insert(&self, income: Income) -> Result<Income> {
        let mut conn = get_connection(&self.pool)?;
        Ok(diesel::insert_into(incomes::table)
            .values(&income)
            .returning(incomes::all_columns)
            .get_result(&mut conn)?)
    }

    fn list(&self, income_user_id: &str, limit: Option<i64>) -> Result<Vec<Income>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = incomes
            .filter(user_id.eq(income_user_id))
            .order(received_at.desc())
            .into_boxed();
        if let Some(max) = limit {
            query = query.limit(max);
        }
        Ok(query.load::<Income>(&mut conn)?)
    }

    fn update(&self, income_id: &str, income_user_id: &str, patch: IncomeUpdate) -> Result<Income> {
        let mut conn = get_connection(&self.pool)?;
        let affected = diesel::update(
            incomes.filter(id.eq(income_id).and(user_id.eq(income_user_id))),
        )
        .set(&patch)
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound(format!("income {}", income_id)));
        }

        Ok(incomes.filter(id.eq(income_id)).first(&mut conn)?)
    }

    fn delete(&self, income_id: &str, income_user_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(
            diesel::delete(incomes.filter(id.eq(income_id).and(user_id.eq(income_user_id))))
                .execute(&mut conn)?,
        )
    }
}
