mod common;

use axum::body::to_bytes;
use axum::http::{header, Method};
use common::{body_json, build_test_router, cleanup_env, register_user, send};

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn milestones_insurance_health_and_reports() {
    let (app, _db) = build_test_router().await;
    let token = register_user(&app, "planner@example.com").await;
    let token = Some(token.as_str());

    // Milestone progress is derived, never stored
    let response = send(
        &app,
        Method::POST,
        "/api/v1/milestones",
        token,
        Some(serde_json::json!({
            "title": "House deposit",
            "category": "savings",
            "targetAmount": 50000,
            "currentAmount": 25000,
            "targetDate": "2027-01-01",
        })),
    )
    .await;
    assert_eq!(response.status(), 201);
    let milestone = body_json(response).await;
    let milestone_id = milestone["id"].as_str().unwrap().to_string();
    assert_eq!(milestone["progressPercentage"].as_f64(), Some(50.0));
    assert_eq!(milestone["isCompleted"], false);

    let response = send(
        &app,
        Method::PUT,
        &format!("/api/v1/milestones/{milestone_id}"),
        token,
        Some(serde_json::json!({ "currentAmount": 40000 })),
    )
    .await;
    assert_eq!(response.status(), 200);
    assert_eq!(
        body_json(response).await["progressPercentage"].as_f64(),
        Some(80.0)
    );

    // Insurance summary scores coverage against fixed targets
    let response = send(
        &app,
        Method::POST,
        "/api/v1/insurance",
        token,
        Some(serde_json::json!({
            "policyType": "income",
            "provider": "Shield Mutual",
            "coverageAmount": 3750,
            "monthlyPremium": 30,
        })),
    )
    .await;
    assert_eq!(response.status(), 201);

    let response = send(&app, Method::GET, "/api/v1/insurance/summary", token, None).await;
    assert_eq!(response.status(), 200);
    let summary = body_json(response).await;
    assert_eq!(summary["totalPolicies"], 1);
    assert_eq!(summary["coveragePercentage"].as_f64(), Some(33.33));
    assert_eq!(summary["protectionGap"].as_f64(), Some(66.67));
    assert_eq!(
        summary["coverageBreakdown"]["incomePercentage"].as_f64(),
        Some(100.0)
    );

    // A bare profile scores zero everywhere
    let response = send(&app, Method::GET, "/api/v1/health-score", token, None).await;
    assert_eq!(response.status(), 200);
    let report = body_json(response).await;
    assert_eq!(report["overallScore"].as_f64(), Some(0.0));
    assert_eq!(report["status"], "Needs Attention");
    assert_eq!(report["recommendations"].as_array().unwrap().len(), 6);

    // Recording estate documents moves the estate and insurance dimensions
    let response = send(
        &app,
        Method::PUT,
        "/api/v1/profile",
        token,
        Some(serde_json::json!({
            "willLocation": "Desk drawer",
            "solicitorName": "Garfield & Sons",
            "insuranceNotes": "Income protection via Shield Mutual",
        })),
    )
    .await;
    assert_eq!(response.status(), 200);
    let profile = body_json(response).await;
    assert_eq!(profile["willLocation"], "Desk drawer");

    let response = send(&app, Method::GET, "/api/v1/health-score", token, None).await;
    let report = body_json(response).await;
    // insurance 80 and estate 70, each weighted 0.15
    assert_eq!(report["overallScore"].as_f64(), Some(22.5));
    assert_eq!(report["recommendations"].as_array().unwrap().len(), 4);

    // Reports come back as downloadable plain-text documents
    let response = send(
        &app,
        Method::GET,
        "/api/v1/reports/wealth-statement",
        token,
        None,
    )
    .await;
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/plain; charset=utf-8"
    );
    let disposition = response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"wealth_statement_"));
    let text = body_text(response).await;
    assert!(text.contains("WEALTH STATEMENT"));
    assert!(text.contains("Prepared for: Avery Saver (planner@example.com)"));
    assert!(text.contains("No assets recorded."));

    let response = send(
        &app,
        Method::GET,
        "/api/v1/reports/financial-health",
        token,
        None,
    )
    .await;
    assert_eq!(response.status(), 200);
    let text = body_text(response).await;
    assert!(text.contains("FINANCIAL HEALTH REPORT"));
    assert!(text.contains("House deposit"));

    let response = send(
        &app,
        Method::GET,
        "/api/v1/reports/estate-planning",
        token,
        None,
    )
    .await;
    assert_eq!(response.status(), 200);
    let text = body_text(response).await;
    assert!(text.contains("ESTATE PLANNING REPORT"));
    assert!(text.contains("DOCUMENT CHECKLIST"));
    assert!(text.contains("Desk drawer"));

    // Unknown flavors are a 404, not an empty document
    let response = send(&app, Method::GET, "/api/v1/reports/quarterly", token, None).await;
    assert_eq!(response.status(), 404);

    // Milestone removal
    let response = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/milestones/{milestone_id}"),
        token,
        None,
    )
    .await;
    assert_eq!(response.status(), 204);
    let response = send(&app, Method::GET, "/api/v1/milestones", token, None).await;
    assert!(body_json(response).await.as_array().unwrap().is_empty());

    cleanup_env();
}
