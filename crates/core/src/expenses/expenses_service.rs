use std::sync::Arc;

use chrono::Utc;
use log::debug;
use uuid::Uuid;

use crate::context::UserContext;
use crate::errors::{Error, Result, ValidationError};
use crate::expenses::expenses_model::{Expense, ExpenseUpdate, NewExpense};
use crate::expenses::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};

pub struct ExpenseService {
    expense_repo: Arc<dyn ExpenseRepositoryTrait>,
}

impl ExpenseService {
    pub fn new(expense_repo: Arc<dyn ExpenseRepositoryTrait>) -> Self {
        ExpenseService { expense_repo }
    }
}

impl ExpenseServiceTrait for ExpenseService {
    fn create_expense(&self, ctx: &UserContext, new_expense: NewExpense) -> Result<Expense> {
        if new_expense.amount <= 0.0 {
            return Err(ValidationError::NonPositiveAmount(new_expense.amount).into());
        }

        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            user_id: ctx.user_id.clone(),
            category: new_expense.category,
            description: new_expense.description,
            amount: new_expense.amount,
            spent_at: new_expense.spent_at,
            goal_id: new_expense.goal_id,
            created_at: Utc::now().naive_utc(),
        };

        debug!("Creating expense in category '{}'", expense.category);
        self.expense_repo.insert(expense)
    }

    fn list_expenses(&self, ctx: &UserContext, limit: Option<i64>) -> Result<Vec<Expense>> {
        self.expense_repo.list(&ctx.user_id, limit)
    }

    fn update_expense(
        &self,
        ctx: &UserContext,
        expense_id: &str,
        patch: ExpenseUpdate,
    ) -> Result<Expense> {
        if patch.is_empty() {
            return Err(ValidationError::InvalidInput("no fields to update".into()).into());
        }
        if let Some(amount) = patch.amount {
            if amount <= 0.0 {
                return Err(ValidationError::NonPositiveAmount(amount).into());
            }
        }
        self.expense_repo.update(expense_id, &ctx.user_id, patch)
    }

    fn delete_expense(&self, ctx: &UserContext, expense_id: &str) -> Result<()> {
        let deleted = self.expense_repo.delete(expense_id, &ctx.user_id)?;
        if deleted == 0 {
            return Err(Error::NotFound(format!("expense {}", expense_id)));
        }
        Ok(())
    }
}
