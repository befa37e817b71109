use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Extension, Json, Router};
use wealthtrack_core::milestones::{MilestoneUpdate, MilestoneView, NewMilestone};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn list_milestones(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<Json<Vec<MilestoneView>>> {
    let milestones = state.milestone_service.get_milestones(&auth.user_id)?;
    Ok(Json(milestones.into_iter().map(Into::into).collect()))
}

async fn create_milestone(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<NewMilestone>,
) -> ApiResult<(StatusCode, Json<MilestoneView>)> {
    let milestone = state.milestone_service.create_milestone(&auth.user_id, body)?;
    Ok((StatusCode::CREATED, Json(milestone.into())))
}

async fn update_milestone(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(body): Json<MilestoneUpdate>,
) -> ApiResult<Json<MilestoneView>> {
    let milestone = state
        .milestone_service
        .update_milestone(&auth.user_id, &id, body)?;
    Ok(Json(milestone.into()))
}

async fn delete_milestone(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.milestone_service.delete_milestone(&auth.user_id, &id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/milestones", get(list_milestones).post(create_milestone))
        .route("/milestones/{id}", put(update_milestone).delete(delete_milestone))
}
