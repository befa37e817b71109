use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::Deserialize;
use wealthtrack_core::constants::DEFAULT_HISTORY_DAYS;
use wealthtrack_core::wealth::{WealthSnapshot, WealthSummary};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

#[derive(Deserialize)]
struct HistoryQuery {
    #[serde(default)]
    days: Option<i64>,
}

async fn get_summary(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<Json<WealthSummary>> {
    let summary = state.wealth_service.get_summary(&auth.user_id)?;
    Ok(Json(summary))
}

async fn get_history(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Query(q): Query<HistoryQuery>,
) -> ApiResult<Json<Vec<WealthSnapshot>>> {
    let days = q.days.unwrap_or(DEFAULT_HISTORY_DAYS);
    let history = state.wealth_service.get_history(&auth.user_id, days)?;
    Ok(Json(history))
}

async fn recompute(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<Json<WealthSnapshot>> {
    let snapshot = state.wealth_service.recompute(&auth.user_id)?;
    Ok(Json(snapshot))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/wealth/summary", get(get_summary))
        .route("/wealth/history", get(get_history))
        .route("/wealth/recompute", post(recompute))
}
