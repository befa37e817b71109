use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use wealthtrack_core::users::{NewUser, UserProfile};

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

const MIN_PASSWORD_LENGTH: usize = 8;
const DEFAULT_BASE_CURRENCY: &str = "GBP";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegisterRequest {
    email: String,
    password: String,
    full_name: String,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    base_currency: Option<String>,
}

#[derive(Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    access_token: String,
    token_type: &'static str,
    expires_in: i64,
    user: UserProfile,
}

fn token_response(state: &AppState, user: wealthtrack_core::users::User) -> ApiResult<TokenResponse> {
    let issued = state.auth.issue_token(&user.id)?;
    Ok(TokenResponse {
        access_token: issued.token,
        token_type: "bearer",
        expires_in: issued.expires_in,
        user: user.into(),
    })
}

async fn register(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<TokenResponse>)> {
    if body.password.len() < MIN_PASSWORD_LENGTH {
        return Err(ApiError::BadRequest(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    let password_hash = state.auth.hash_password(&body.password)?;
    let user = state.user_service.register_user(NewUser {
        id: None,
        email: body.email,
        password_hash,
        full_name: body.full_name,
        country: body.country,
        base_currency: body
            .base_currency
            .unwrap_or_else(|| DEFAULT_BASE_CURRENCY.to_string()),
    })?;

    Ok((StatusCode::CREATED, Json(token_response(&state, user)?)))
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let invalid = || ApiError::Unauthorized("Invalid email or password".to_string());

    let user = state
        .user_service
        .get_user_by_email(body.email.trim())?
        .ok_or_else(invalid)?;
    if !state.auth.verify_password(&user.password_hash, &body.password) {
        return Err(invalid());
    }
    if !user.is_active {
        return Err(ApiError::Unauthorized(
            "Account is deactivated".to_string(),
        ));
    }

    Ok(Json(token_response(&state, user)?))
}

async fn me(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<Json<UserProfile>> {
    let user = state.user_service.get_user(&auth.user_id)?;
    Ok(Json(user.into()))
}

/// Routes reachable without a token.
pub fn public_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/auth/me", get(me))
}
