use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use finotes_core::expenses::{Expense, ExpenseUpdate, NewExpense};
use serde::Deserialize;

use crate::{auth, error::ApiResult, main_lib::AppState};

const DEFAULT_LIST_LIMIT: i64 = 100;

#[derive(Deserialize)]
struct ListParams {
    limit: Option<i64>,
}

async fn list_expenses(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Vec<Expense>>> {
    let ctx = auth::current_user();
    let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    let expenses = state.expense_service.list_expenses(&ctx, Some(limit))?;
    Ok(Json(expenses))
}

async fn create_expense(
    State(state): State<Arc<AppState>>,
    Json(new_expense): Json<NewExpense>,
) -> ApiResult<(StatusCode, Json<Expense>)> {
    let ctx = auth::current_user();
    let expense = state.expense_service.create_expense(&ctx, new_expense)?;
    Ok((StatusCode::CREATED, Json(expense)))
}

async fn update_expense(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(patch): Json<ExpenseUpdate>,
) -> ApiResult<Json<Expense>> {
    let ctx = auth::current_user();
    let expense = state.expense_service.update_expense(&ctx, &id, patch)?;
    Ok(Json(expense))
}

async fn delete_expense(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let ctx = auth::current_user();
    state.expense_service.delete_expense(&ctx, &id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/finance/expenses", get(list_expenses).post(create_expense))
        .route(
            "/finance/expenses/{id}",
            put(update_expense).delete(delete_expense),
        )
}
