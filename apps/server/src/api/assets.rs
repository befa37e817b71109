use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Extension, Json, Router};
use wealthtrack_core::assets::{Asset, AssetUpdate, NewAsset};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn list_assets(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<Json<Vec<Asset>>> {
    let assets = state.asset_service.get_assets(&auth.user_id)?;
    Ok(Json(assets))
}

async fn create_asset(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<NewAsset>,
) -> ApiResult<(StatusCode, Json<Asset>)> {
    let asset = state.asset_service.create_asset(&auth.user_id, body)?;
    Ok((StatusCode::CREATED, Json(asset)))
}

async fn update_asset(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(body): Json<AssetUpdate>,
) -> ApiResult<Json<Asset>> {
    let asset = state.asset_service.update_asset(&auth.user_id, &id, body)?;
    Ok(Json(asset))
}

async fn delete_asset(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.asset_service.delete_asset(&auth.user_id, &id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/assets", get(list_assets).post(create_asset))
        .route("/assets/{id}", put(update_asset).delete(delete_asset))
}
