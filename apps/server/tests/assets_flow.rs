mod common;

use axum::http::Method;
use common::{body_json, build_test_router, cleanup_env, register_user, send};

#[tokio::test]
async fn asset_ledger_drives_wealth_and_dashboard() {
    let (app, _db) = build_test_router().await;
    let token = register_user(&app, "ledger@example.com").await;
    let token = Some(token.as_str());

    // Seed the ledger
    let response = send(
        &app,
        Method::POST,
        "/api/v1/assets",
        token,
        Some(serde_json::json!({
            "name": "Cash ISA",
            "category": "cash_savings",
            "value": 25000,
            "institution": "Big Bank",
        })),
    )
    .await;
    assert_eq!(response.status(), 201);
    let cash_asset = body_json(response).await;
    let cash_asset_id = cash_asset["id"].as_str().unwrap().to_string();
    assert_eq!(cash_asset["value"].as_f64(), Some(25000.0));

    for (name, category, value) in [
        ("Flat", "real_estate", 450_000),
        ("Index fund", "stocks_securities", 75_000),
    ] {
        let response = send(
            &app,
            Method::POST,
            "/api/v1/assets",
            token,
            Some(serde_json::json!({
                "name": name,
                "category": category,
                "value": value,
            })),
        )
        .await;
        assert_eq!(response.status(), 201);
    }

    // Invalid writes are rejected before touching the ledger
    let response = send(
        &app,
        Method::POST,
        "/api/v1/assets",
        token,
        Some(serde_json::json!({
            "name": "Bad",
            "category": "cash_savings",
            "value": -1,
        })),
    )
    .await;
    assert_eq!(response.status(), 400);
    let response = send(
        &app,
        Method::POST,
        "/api/v1/assets",
        token,
        Some(serde_json::json!({
            "name": "   ",
            "category": "cash_savings",
            "value": 10,
        })),
    )
    .await;
    assert_eq!(response.status(), 400);
    let response = send(
        &app,
        Method::DELETE,
        "/api/v1/assets/no-such-asset",
        token,
        None,
    )
    .await;
    assert_eq!(response.status(), 404);

    // Live summary aggregates per category
    let response = send(&app, Method::GET, "/api/v1/wealth/summary", token, None).await;
    assert_eq!(response.status(), 200);
    let summary = body_json(response).await;
    assert_eq!(summary["totalWealth"].as_f64(), Some(550_000.0));
    assert_eq!(summary["realEstate"].as_f64(), Some(450_000.0));
    assert_eq!(summary["assetCount"], 3);

    // Mutations have been writing today's snapshot all along
    let response = send(
        &app,
        Method::GET,
        "/api/v1/wealth/history?days=7",
        token,
        None,
    )
    .await;
    let history = body_json(response).await;
    assert_eq!(history.as_array().unwrap().len(), 1);
    assert_eq!(history[0]["totalWealth"].as_f64(), Some(550_000.0));

    // An explicit recompute lands on the same daily row
    let response = send(&app, Method::POST, "/api/v1/wealth/recompute", token, None).await;
    assert_eq!(response.status(), 200);
    let snapshot = body_json(response).await;
    assert_eq!(snapshot["totalWealth"].as_f64(), Some(550_000.0));

    // Categories outside the recognized six are stored but never counted
    let response = send(
        &app,
        Method::POST,
        "/api/v1/assets",
        token,
        Some(serde_json::json!({
            "name": "Wine crate",
            "category": "collectibles",
            "value": 9999,
        })),
    )
    .await;
    assert_eq!(response.status(), 201);
    let collectible_id = body_json(response).await["id"].as_str().unwrap().to_string();
    let response = send(&app, Method::GET, "/api/v1/wealth/summary", token, None).await;
    let summary = body_json(response).await;
    assert_eq!(summary["totalWealth"].as_f64(), Some(550_000.0));
    assert_eq!(summary["assetCount"], 4);

    // Partial update, then drop the unrecognized asset
    let response = send(
        &app,
        Method::PUT,
        &format!("/api/v1/assets/{cash_asset_id}"),
        token,
        Some(serde_json::json!({ "value": 30000 })),
    )
    .await;
    assert_eq!(response.status(), 200);
    let updated = body_json(response).await;
    assert_eq!(updated["value"].as_f64(), Some(30000.0));
    assert_eq!(updated["institution"], "Big Bank");

    let response = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/assets/{collectible_id}"),
        token,
        None,
    )
    .await;
    assert_eq!(response.status(), 204);

    let response = send(&app, Method::GET, "/api/v1/assets", token, None).await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 3);

    // Journal feeds the dashboard windows
    let response = send(
        &app,
        Method::POST,
        "/api/v1/income",
        token,
        Some(serde_json::json!({
            "name": "Salary",
            "amount": 3000,
            "category": "salary",
        })),
    )
    .await;
    assert_eq!(response.status(), 201);
    let response = send(
        &app,
        Method::POST,
        "/api/v1/expenses",
        token,
        Some(serde_json::json!({
            "name": "Rent",
            "amount": 1200,
            "category": "housing",
        })),
    )
    .await;
    assert_eq!(response.status(), 201);

    let response = send(
        &app,
        Method::GET,
        "/api/v1/analytics/dashboard",
        token,
        None,
    )
    .await;
    assert_eq!(response.status(), 200);
    let dashboard = body_json(response).await;
    let metrics = &dashboard["metrics"];
    assert_eq!(metrics["currentWealth"].as_f64(), Some(555_000.0));
    assert_eq!(metrics["totalIncome3m"].as_f64(), Some(3000.0));
    assert_eq!(metrics["totalExpenses3m"].as_f64(), Some(1200.0));
    assert_eq!(metrics["netSavings3m"].as_f64(), Some(1800.0));
    // 30000 cash against 400/month of spending
    assert_eq!(metrics["emergencyFundMonths"].as_f64(), Some(75.0));
    // Single-day history pins the trend baseline to the current value
    assert_eq!(metrics["wealthChangePercent"].as_f64(), Some(0.0));

    let trend = dashboard["wealthTrend"].as_array().unwrap();
    assert_eq!(trend.len(), 1);
    assert_eq!(trend[0]["totalWealth"].as_f64(), Some(555_000.0));

    let categories = dashboard["topAssetCategories"].as_object().unwrap();
    assert_eq!(categories["Real Estate"].as_f64(), Some(450_000.0));
    assert_eq!(categories["Cash & Savings"].as_f64(), Some(30000.0));
    assert!(!categories.contains_key("Business Assets"));

    assert_eq!(dashboard["recentEvents"].as_array().unwrap().len(), 2);

    cleanup_env();
}
