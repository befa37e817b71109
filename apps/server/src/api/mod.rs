mod analytics;
mod assets;
mod auth;
mod health;
mod insurance;
mod journal;
mod milestones;
mod profile;
mod reports;
mod wealth;

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::{middleware, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::main_lib::AppState;

async fn probe() -> &'static str {
    "ok"
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins = config.cors_allow_origins.trim();
    if origins == "*" {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(parsed)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let protected = Router::new()
        .merge(auth::router())
        .merge(assets::router())
        .merge(wealth::router())
        .merge(journal::router())
        .merge(milestones::router())
        .merge(profile::router())
        .merge(insurance::router())
        .merge(health::router())
        .merge(reports::router())
        .merge(analytics::router())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            crate::auth::require_jwt,
        ));

    let api = Router::new().merge(auth::public_router()).merge(protected);

    Router::new()
        .route("/healthz", get(probe))
        .route("/readyz", get(probe))
        .nest("/api/v1", api)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_millis(
                    config.request_timeout_ms,
                )))
                .layer(cors_layer(config))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .with_state(state)
}
