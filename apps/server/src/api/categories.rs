use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use finotes_core::categories::{Category, NewCategory};

use crate::{auth, error::ApiResult, main_lib::AppState};

async fn list_categories(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Category>>> {
    let ctx = auth::current_user();
    let categories = state.category_service.list_categories(&ctx)?;
    Ok(Json(categories))
}

async fn create_category(
    State(state): State<Arc<AppState>>,
    Json(new_category): Json<NewCategory>,
) -> ApiResult<(StatusCode, Json<Category>)> {
    let ctx = auth::current_user();
    let category = state.category_service.create_category(&ctx, new_category)?;
    Ok((StatusCode::CREATED, Json(category)))
}

async fn delete_category(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let ctx = auth::current_user();
    state.category_service.delete_category(&ctx, &id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/finance/categories",
            get(list_categories).post(create_category),
        )
        .route("/finance/categories/{id}", delete(delete_category))
}
