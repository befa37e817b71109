use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Extension, Json, Router};
use wealthtrack_core::analytics::Dashboard;

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<Json<Dashboard>> {
    let dashboard = state.analytics_service.get_dashboard(&auth.user_id)?;
    Ok(Json(dashboard))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/analytics/dashboard", get(get_dashboard))
}
