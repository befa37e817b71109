use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Extension, Json, Router};
use wealthtrack_core::journal::{
    CashFlowEvent, CashFlowEventUpdate, CashFlowKind, NewCashFlowEvent,
};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

fn list(
    state: &AppState,
    auth: &AuthUser,
    kind: CashFlowKind,
) -> ApiResult<Json<Vec<CashFlowEvent>>> {
    let events = state.journal_service.get_events(kind, &auth.user_id)?;
    Ok(Json(events))
}

fn create(
    state: &AppState,
    auth: &AuthUser,
    kind: CashFlowKind,
    body: NewCashFlowEvent,
) -> ApiResult<(StatusCode, Json<CashFlowEvent>)> {
    let event = state.journal_service.create_event(kind, &auth.user_id, body)?;
    Ok((StatusCode::CREATED, Json(event)))
}

fn update(
    state: &AppState,
    auth: &AuthUser,
    kind: CashFlowKind,
    id: &str,
    body: CashFlowEventUpdate,
) -> ApiResult<Json<CashFlowEvent>> {
    let event = state
        .journal_service
        .update_event(kind, &auth.user_id, id, body)?;
    Ok(Json(event))
}

fn remove(state: &AppState, auth: &AuthUser, kind: CashFlowKind, id: &str) -> ApiResult<StatusCode> {
    state.journal_service.delete_event(kind, &auth.user_id, id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_income(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<Json<Vec<CashFlowEvent>>> {
    list(&state, &auth, CashFlowKind::Income)
}

async fn create_income(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<NewCashFlowEvent>,
) -> ApiResult<(StatusCode, Json<CashFlowEvent>)> {
    create(&state, &auth, CashFlowKind::Income, body)
}

async fn update_income(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(body): Json<CashFlowEventUpdate>,
) -> ApiResult<Json<CashFlowEvent>> {
    update(&state, &auth, CashFlowKind::Income, &id, body)
}

async fn delete_income(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    remove(&state, &auth, CashFlowKind::Income, &id)
}

async fn list_expenses(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<Json<Vec<CashFlowEvent>>> {
    list(&state, &auth, CashFlowKind::Expense)
}

async fn create_expense(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<NewCashFlowEvent>,
) -> ApiResult<(StatusCode, Json<CashFlowEvent>)> {
    create(&state, &auth, CashFlowKind::Expense, body)
}

async fn update_expense(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(body): Json<CashFlowEventUpdate>,
) -> ApiResult<Json<CashFlowEvent>> {
    update(&state, &auth, CashFlowKind::Expense, &id, body)
}

async fn delete_expense(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    remove(&state, &auth, CashFlowKind::Expense, &id)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/income", get(list_income).post(create_income))
        .route("/income/{id}", put(update_income).delete(delete_income))
        .route("/expenses", get(list_expenses).post(create_expense))
        .route("/expenses/{id}", put(update_expense).delete(delete_expense))
}
