use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Router};
use wealthtrack_core::reports::ReportFlavor;

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

/// Generate and download a report document.
async fn download_report(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path(flavor): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let flavor = ReportFlavor::from_path_key(&flavor)
        .ok_or_else(|| ApiError::NotFound(format!("Report '{}'", flavor)))?;
    let document = state.report_service.generate_report(&auth.user_id, flavor)?;

    let disposition = format!("attachment; filename=\"{}\"", document.filename);
    Ok((
        [
            (header::CONTENT_TYPE, document.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document.bytes,
    ))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/reports/{flavor}", get(download_report))
}
