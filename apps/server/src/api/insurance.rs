use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Extension, Json, Router};
use wealthtrack_core::insurance::{
    InsurancePolicy, InsurancePolicyUpdate, InsuranceSummary, NewInsurancePolicy,
};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn list_policies(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<Json<Vec<InsurancePolicy>>> {
    let policies = state.insurance_service.get_policies(&auth.user_id)?;
    Ok(Json(policies))
}

async fn create_policy(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<NewInsurancePolicy>,
) -> ApiResult<(StatusCode, Json<InsurancePolicy>)> {
    let policy = state.insurance_service.create_policy(&auth.user_id, body)?;
    Ok((StatusCode::CREATED, Json(policy)))
}

async fn update_policy(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(body): Json<InsurancePolicyUpdate>,
) -> ApiResult<Json<InsurancePolicy>> {
    let policy = state
        .insurance_service
        .update_policy(&auth.user_id, &id, body)?;
    Ok(Json(policy))
}

async fn delete_policy(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.insurance_service.delete_policy(&auth.user_id, &id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_summary(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<Json<InsuranceSummary>> {
    let summary = state.insurance_service.get_summary(&auth.user_id)?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/insurance", get(list_policies).post(create_policy))
        .route("/insurance/summary", get(get_summary))
        .route("/insurance/{id}", put(update_policy).delete(delete_policy))
}
