use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use finotes_core::incomes::{Income, IncomeUpdate, NewIncome};
use serde::Deserialize;

use crate::{auth, error::ApiResult, main_lib::AppState};

const DEFAULT_LIST_LIMIT: i64 = 100;

#[derive(Deserialize)]
struct ListParams {
    limit: Option<i64>,
}

async fn list_incomes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Vec<Income>>> {
    let ctx = auth::current_user();
    let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    let incomes = state.income_service.list_incomes(&ctx, Some(limit))?;
    Ok(Json(incomes))
}

async fn create_income(
    State(state): State<Arc<AppState>>,
    Json(new_income): Json<NewIncome>,
) -> ApiResult<(StatusCode, Json<Income>)> {
    let ctx = auth::current_user();
    let income = state.income_service.create_income(&ctx, new_income)?;
    Ok((StatusCode::CREATED, Json(income)))
}

async fn update_income(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(patch): Json<IncomeUpdate>,
) -> ApiResult<Json<Income>> {
    let ctx = auth::current_user();
    let income = state.income_service.update_income(&ctx, &id, patch)?;
    Ok(Json(income))
}

async fn delete_income(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let ctx = auth::current_user();
    state.income_service.delete_income(&ctx, &id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/finance/incomes", get(list_incomes).post(create_income))
        .route(
            "/finance/incomes/{id}",
            put(update_income).delete(delete_income),
        )
}
