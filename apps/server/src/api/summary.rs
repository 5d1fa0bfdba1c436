use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use finotes_core::reports::{render_report, ReportFormat};
use finotes_core::summary::{HistoricalSummary, MonthlySummary};
use serde::Deserialize;

use crate::{auth, error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
struct MonthlyParams {
    year: i32,
    month: u32,
}

async fn monthly_summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MonthlyParams>,
) -> ApiResult<Json<MonthlySummary>> {
    let ctx = auth::current_user();
    let summary = state
        .summary_service
        .get_monthly_summary(&ctx, params.year, params.month)?;
    Ok(Json(summary))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HistoricalParams {
    period_type: String,
    start_date: String,
    end_date: String,
}

async fn historical_data(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HistoricalParams>,
) -> ApiResult<Json<Vec<HistoricalSummary>>> {
    let ctx = auth::current_user();
    let summaries = state.summary_service.get_historical_data(
        &ctx,
        &params.period_type,
        &params.start_date,
        &params.end_date,
    )?;
    Ok(Json(summaries))
}

async fn generate_historical_summary(
    State(state): State<Arc<AppState>>,
    Json(request): Json<HistoricalParams>,
) -> ApiResult<(StatusCode, Json<HistoricalSummary>)> {
    let ctx = auth::current_user();
    let summary = state.summary_service.generate_historical_summary(
        &ctx,
        &request.period_type,
        &request.start_date,
        &request.end_date,
    )?;
    Ok((StatusCode::CREATED, Json(summary)))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportRequest {
    period_type: String,
    start_date: String,
    end_date: String,
    #[serde(default)]
    format: String,
}

/// Computes the summary for the requested window (without persisting it)
/// and renders the HTML report document.
async fn render_period_report(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ReportRequest>,
) -> ApiResult<Html<String>> {
    let ctx = auth::current_user();
    let summary = state.summary_service.compute_historical_summary(
        &ctx,
        &request.period_type,
        &request.start_date,
        &request.end_date,
    )?;
    let format = ReportFormat::from_hint(&request.format);
    Ok(Html(render_report(&summary, format)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/finance/summary", get(monthly_summary))
        .route("/finance/historical", get(historical_data))
        .route(
            "/finance/historical/generate",
            post(generate_historical_summary),
        )
        .route("/finance/reports", post(render_period_report))
}
