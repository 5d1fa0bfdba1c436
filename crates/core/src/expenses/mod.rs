//! Expenses module - domain models, services, and traits.

mod expenses_model;
mod expenses_repository;
mod expenses_service;
mod expenses_traits;

pub use expenses_model::{Expense, ExpenseUpdate, NewExpense};
pub use expenses_repository::ExpenseRepository;
pub use expenses_service::ExpenseService;
pub use expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
