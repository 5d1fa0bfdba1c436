use crate::context::UserContext;
use crate::errors::Result;
use crate::expenses::expenses_model::{Expense, ExpenseUpdate, NewExpense};

pub trait ExpenseRepositoryTrait: Send + Sync {
    fn insert(&self, expense: Expense) -> Result<Expense>;
    fn list(&self, user_id: &str, limit: Option<i64>) -> Result<Vec<Expense>>;
    fn update(&self, expense_id: &str, user_id: &str, patch: ExpenseUpdate) -> Result<Expense>;
    fn delete(&self, expense_id: &str, user_id: &str) -> Result<usize>;
}

pub trait ExpenseServiceTrait: Send + Sync {
    fn create_expense(&self, ctx: &UserContext, new_expense: NewExpense) -> Result<Expense>;
    fn list_expenses(&self, ctx: &UserContext, limit: Option<i64>) -> Result<Vec<Expense>>;
    fn update_expense(
        &self,
        ctx: &UserContext,
        expense_id: &str,
        patch: ExpenseUpdate,
    ) -> Result<Expense>;
    fn delete_expense(&self, ctx: &UserContext, expense_id: &str) -> Result<()>;
}
