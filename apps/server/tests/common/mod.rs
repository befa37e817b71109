#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request};
use axum::Router;
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;
use wealthtrack_server::api::app_router;
use wealthtrack_server::build_state;
use wealthtrack_server::config::Config;

/// Builds a router over a throwaway database. Keep the returned guard alive
/// for the duration of the test.
pub async fn build_test_router() -> (Router, TempDir) {
    let tmp = tempdir().unwrap();
    std::env::set_var("WT_DB_PATH", tmp.path().join("test.db"));
    std::env::set_var("WT_JWT_SECRET", "integration-test-secret-0123456789abcdef");

    let config = Config::from_env();
    let state = build_state(&config).await.unwrap();
    (app_router(state, &config), tmp)
}

pub fn cleanup_env() {
    for key in ["WT_DB_PATH", "WT_JWT_SECRET", "DATABASE_URL"] {
        std::env::remove_var(key);
    }
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> axum::response::Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Registers a user and returns a bearer token for it.
pub async fn register_user(app: &Router, email: &str) -> String {
    let response = send(
        app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(serde_json::json!({
            "email": email,
            "password": "super-secret",
            "fullName": "Avery Saver",
        })),
    )
    .await;
    assert_eq!(response.status(), 201);
    let body = body_json(response).await;
    body["accessToken"].as_str().unwrap().to_string()
}
