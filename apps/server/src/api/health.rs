use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Extension, Json, Router};
use wealthtrack_core::health::HealthReport;

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

/// Compute the financial health score from the caller's live data.
async fn get_health_score(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<Json<HealthReport>> {
    let report = state.health_service.get_health_report(&auth.user_id)?;
    Ok(Json(report))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health-score", get(get_health_score))
}
