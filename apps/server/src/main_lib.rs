use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use finotes_core::{
    categories::{CategoryRepository, CategoryService, CategoryServiceTrait},
    db,
    expenses::{ExpenseRepository, ExpenseService, ExpenseServiceTrait},
    goals::{GoalRepository, GoalService, GoalServiceTrait},
    incomes::{IncomeRepository, IncomeService, IncomeServiceTrait},
    notes::{NoteRepository, NoteService, NoteServiceTrait},
    summary::{SummaryRepository, SummaryService, SummaryServiceTrait},
};

use crate::config::Config;

pub struct AppState {
    pub pool: Arc<db::DbPool>,
    pub income_service: Arc<dyn IncomeServiceTrait>,
    pub expense_service: Arc<dyn ExpenseServiceTrait>,
    pub category_service: Arc<dyn CategoryServiceTrait>,
    pub goal_service: Arc<dyn GoalServiceTrait>,
    pub note_service: Arc<dyn NoteServiceTrait>,
    pub summary_service: Arc<dyn SummaryServiceTrait>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.data_dir)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;

    let income_repo = Arc::new(IncomeRepository::new(pool.clone()));
    let income_service = Arc::new(IncomeService::new(income_repo));

    let expense_repo = Arc::new(ExpenseRepository::new(pool.clone()));
    let expense_service = Arc::new(ExpenseService::new(expense_repo));

    let category_repo = Arc::new(CategoryRepository::new(pool.clone()));
    let category_service = Arc::new(CategoryService::new(category_repo));

    let goal_repo = Arc::new(GoalRepository::new(pool.clone()));
    let goal_service = Arc::new(GoalService::new(goal_repo));

    let note_repo = Arc::new(NoteRepository::new(pool.clone()));
    let note_service = Arc::new(NoteService::new(note_repo));

    let summary_repo = Arc::new(SummaryRepository::new(pool.clone()));
    let summary_service = Arc::new(SummaryService::new(summary_repo));

    Ok(Arc::new(AppState {
        pool,
        income_service,
        expense_service,
        category_service,
        goal_service,
        note_service,
        summary_service,
    }))
}
