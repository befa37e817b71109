use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Extension, Json, Router};
use wealthtrack_core::users::{UserProfile, UserUpdate};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn get_profile(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<Json<UserProfile>> {
    let user = state.user_service.get_user(&auth.user_id)?;
    Ok(Json(user.into()))
}

async fn update_profile(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<UserUpdate>,
) -> ApiResult<Json<UserProfile>> {
    let user = state.user_service.update_profile(&auth.user_id, body)?;
    Ok(Json(user.into()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/profile", get(get_profile).put(update_profile))
}
