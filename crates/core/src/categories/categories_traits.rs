use crate::categories::categories_model::{Category, NewCategory};
use crate::context::UserContext;
use crate::errors::Result;

pub trait CategoryRepositoryTrait: Send + Sync {
    fn insert(&self, category: Category) -> Result<Category>;
    fn list(&self, user_id: &str) -> Result<Vec<Category>>;
    fn delete(&self, category_id: &str, user_id: &str) -> Result<usize>;
}

pub trait CategoryServiceTrait: Send + Sync {
    fn create_category(&self, ctx: &UserContext, new_category: NewCategory) -> Result<Category>;
    fn list_categories(&self, ctx: &UserContext) -> Result<Vec<Category>>;
    fn delete_category(&self, ctx: &UserContext, category_id: &str) -> Result<()>;
}
