use std::sync::Arc;

use diesel::prelude::*;

use crate::categories::categories_model::Category;
use crate::categories::categories_traits::CategoryRepositoryTrait;
use crate::db::{get_connection, DbPool};
use crate::errors::Result;
use crate::schema::categories;
use crate::schema::categories::dsl::*;

pub struct CategoryRepository {
    pool: Arc<DbPool>,
}

impl CategoryRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        CategoryRepository { pool }
    }
}

impl CategoryRepositoryTrait for CategoryRepository {
    fn insert(&self, category: Category) -> Result<Category> {
        let mut conn = get_connection(&self.pool)?;
        Ok(diesel::insert_into(categories::table)
            .values(&category)
            .returning(categories::all_columns)
            .get_result(&mut conn)?)
    }

    fn list(&self, category_user_id: &str) -> Result<Vec<Category>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(categories
            .filter(user_id.eq(category_user_id))
            .order(name.asc())
            .load::<Category>(&mut conn)?)
    }

    fn delete(&self, category_id: &str, category_user_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(diesel::delete(
            categories.filter(id.eq(category_id).and(user_id.eq(category_user_id))),
        )
        .execute(&mut conn)?)
    }
}
