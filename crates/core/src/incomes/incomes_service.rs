use std::sync::Arc;

use chrono::Utc;
use log::debug;
use uuid::Uuid;

use crate::context::UserContext;
use crate::errors::{Result, ValidationError};
use crate::incomes::incomes_model::{Income, IncomeUpdate, NewIncome};
use crate::incomes::incomes_traits::{IncomeRepositoryTrait, IncomeServiceTrait};

pub struct IncomeService {
    income_repo: Arc<dyn IncomeRepositoryTrait>,
}

impl IncomeService {
    pub fn new(income_repo: Arc<dyn IncomeRepositoryTrait>) -> Self {
        IncomeService { income_repo }
    }
}

impl IncomeServiceTrait for IncomeService {
    fn create_income(&self, ctx: &UserContext, new_income: NewIncome) -> Result<Income> {
        if new_income.amount <= 0.0 {
            return Err(ValidationError::NonPositiveAmount(new_income.amount).into());
        }

        let income = Income {
            id: Uuid::new_v4().to_string(),
            user_id: ctx.user_id.clone(),
            source: new_income.source,
            amount: new_income.amount,
            received_at: new_income.received_at,
            created_at: Utc::now().naive_utc(),
        };

        debug!("Creating income from source '{}'", income.source);
        self.income_repo.insert(income)
    }

    fn list_incomes(&self, ctx: &UserContext, limit: Option<i64>) -> Result<Vec<Income>> {
        self.income_repo.list(&ctx.user_id, limit)
    }

    fn update_income(
        &self,
        ctx: &UserContext,
        income_id: &str,
        patch: IncomeUpdate,
    ) -> Result<Income> {
        if patch.is_empty() {
            return Err(ValidationError::InvalidInput("no fields to update".into()).into());
        }
        if let Some(amount) = patch.amount {
            if amount <= 0.0 {
                return Err(ValidationError::NonPositiveAmount(amount).into());
            }
        }
        self.income_repo.update(income_id, &ctx.user_id, patch)
    }

    fn delete_income(&self, ctx: &UserContext, income_id: &str) -> Result<()> {
        let deleted = self.income_repo.delete(income_id, &ctx.user_id)?;
        if deleted == 0 {
            return Err(crate::errors::Error::NotFound(format!("income {}", income_id)));
        }
        Ok(())
    }
}
