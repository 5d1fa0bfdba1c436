use std::sync::Arc;

use axum::{extract::State, routing::get, Router};
use finotes_core::db;

use crate::{error::ApiResult, main_lib::AppState};

async fn healthz() -> &'static str {
    "ok"
}

/// Ready only when a pooled database connection can be handed out.
async fn readyz(State(state): State<Arc<AppState>>) -> ApiResult<&'static str> {
    let _conn = db::get_connection(&state.pool)?;
    Ok("ok")
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
