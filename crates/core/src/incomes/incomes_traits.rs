use crate::context::UserContext;
use crate::errors::Result;
use crate::incomes::incomes_model::{Income, IncomeUpdate, NewIncome};

pub trait IncomeRepositoryTrait: Send + Sync {
    fn insert(&self, income: Income) -> Result<Income>;
    fn list(&self, user_id: &str, limit: Option<i64>) -> Result<Vec<Income>>;
    fn update(&self, income_id: &str, user_id: &str, patch: IncomeUpdate) -> Result<Income>;
    fn delete(&self, income_id: &str, user_id: &str) -> Result<usize>;
}

pub trait IncomeServiceTrait: Send + Sync {
    fn create_income(&self, ctx: &UserContext, new_income: NewIncome) -> Result<Income>;
    fn list_incomes(&self, ctx: &UserContext, limit: Option<i64>) -> Result<Vec<Income>>;
    fn update_income(
        &self,
        ctx: &UserContext,
        income_id: &str,
        patch: IncomeUpdate,
    ) -> Result<Income>;
    fn delete_income(&self, ctx: &UserContext, income_id: &str) -> Result<()>;
}
