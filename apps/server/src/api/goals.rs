use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use finotes_core::goals::{
    Goal, GoalCategory, GoalContribution, GoalExpense, GoalUpdate, GoalWithProgress,
    GoalWithSubgoals, NewGoal, NewGoalContribution, NewGoalExpense,
};

use crate::{auth, error::ApiResult, main_lib::AppState};

async fn list_goals_with_progress(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<GoalWithProgress>>> {
    let ctx = auth::current_user();
    let goals = state.goal_service.list_goals_with_progress(&ctx)?;
    Ok(Json(goals))
}

async fn create_goal(
    State(state): State<Arc<AppState>>,
    Json(new_goal): Json<NewGoal>,
) -> ApiResult<(StatusCode, Json<Goal>)> {
    let ctx = auth::current_user();
    let goal = state.goal_service.create_goal(&ctx, new_goal)?;
    Ok((StatusCode::CREATED, Json(goal)))
}

async fn update_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(patch): Json<GoalUpdate>,
) -> ApiResult<Json<Goal>> {
    let ctx = auth::current_user();
    let goal = state.goal_service.update_goal(&ctx, &id, patch)?;
    Ok(Json(goal))
}

async fn delete_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let ctx = auth::current_user();
    state.goal_service.delete_goal(&ctx, &id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn create_contribution(
    State(state): State<Arc<AppState>>,
    Json(new_contribution): Json<NewGoalContribution>,
) -> ApiResult<(StatusCode, Json<GoalContribution>)> {
    let ctx = auth::current_user();
    let contribution = state
        .goal_service
        .create_contribution(&ctx, new_contribution)?;
    Ok((StatusCode::CREATED, Json(contribution)))
}

async fn list_goal_categories(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<GoalCategory>>> {
    let categories = state.goal_service.list_goal_categories()?;
    Ok(Json(categories))
}

async fn list_main_goals_with_subgoals(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<GoalWithSubgoals>>> {
    let ctx = auth::current_user();
    let goals = state.goal_service.list_main_goals_with_subgoals(&ctx)?;
    Ok(Json(goals))
}

async fn create_goal_expense(
    State(state): State<Arc<AppState>>,
    Json(new_goal_expense): Json<NewGoalExpense>,
) -> ApiResult<(StatusCode, Json<GoalExpense>)> {
    let ctx = auth::current_user();
    let goal_expense = state
        .goal_service
        .create_goal_expense(&ctx, new_goal_expense)?;
    Ok((StatusCode::CREATED, Json(goal_expense)))
}

async fn list_goal_expenses(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<GoalExpense>>> {
    let ctx = auth::current_user();
    let expenses = state.goal_service.list_goal_expenses(&ctx, &id)?;
    Ok(Json(expenses))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/finance/goals",
            get(list_goals_with_progress).post(create_goal),
        )
        .route("/finance/goals/categories", get(list_goal_categories))
        .route(
            "/finance/goals/hierarchical",
            get(list_main_goals_with_subgoals),
        )
        .route("/finance/goals/contributions", post(create_contribution))
        .route("/finance/goals/expenses", post(create_goal_expense))
        .route("/finance/goals/{id}/expenses", get(list_goal_expenses))
        .route("/finance/goals/{id}", put(update_goal).delete(delete_goal))
}
