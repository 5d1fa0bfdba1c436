use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::categories::categories_model::{Category, NewCategory};
use crate::categories::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
use crate::context::UserContext;
use crate::errors::{Error, Result, ValidationError};

const MAX_CATEGORY_NAME_LEN: usize = 100;

pub struct CategoryService {
    category_repo: Arc<dyn CategoryRepositoryTrait>,
}

impl CategoryService {
    pub fn new(category_repo: Arc<dyn CategoryRepositoryTrait>) -> Self {
        CategoryService { category_repo }
    }
}

impl CategoryServiceTrait for CategoryService {
    fn create_category(&self, ctx: &UserContext, new_category: NewCategory) -> Result<Category> {
        if new_category.name.is_empty() {
            return Err(ValidationError::MissingField("name".into()).into());
        }
        if new_category.name.len() > MAX_CATEGORY_NAME_LEN {
            return Err(ValidationError::InvalidInput(format!(
                "category name must be {} characters or less",
                MAX_CATEGORY_NAME_LEN
            ))
            .into());
        }

        let category = Category {
            id: Uuid::new_v4().to_string(),
            user_id: ctx.user_id.clone(),
            name: new_category.name,
            created_at: Utc::now().naive_utc(),
        };

        self.category_repo.insert(category)
    }

    fn list_categories(&self, ctx: &UserContext) -> Result<Vec<Category>> {
        self.category_repo.list(&ctx.user_id)
    }

    fn delete_category(&self, ctx: &UserContext, category_id: &str) -> Result<()> {
        let deleted = self.category_repo.delete(category_id, &ctx.user_id)?;
        if deleted == 0 {
            return Err(Error::NotFound(format!("category {}", category_id)));
        }
        Ok(())
    }
}
