//! Tests for the dashboard endpoints.

use axum::http::StatusCode;

use super::*;

/// Expect a complete, empty dashboard when no region can be reached
#[tokio::test]
async fn loads_dashboard_without_reachable_regions() {
    let (status, body) = get_json(test_router(), "/api/dashboard?from=2024-01-01&to=2024-01-07").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["range"]["from"], "2024-01-01");
    assert_eq!(body["events"], serde_json::json!([]));
    assert_eq!(body["failedSources"].as_array().unwrap().len(), 6);
    assert_eq!(body["absenceTypes"].as_array().unwrap().len(), 3);
    assert_eq!(body["eventMetrics"]["daysAnalyzed"], 7);
    assert_eq!(body["eventMetrics"]["byDay"].as_array().unwrap().len(), 7);
    assert_eq!(body["absenceMetrics"]["averageDurationDays"], 0.0);
}

/// Expect the current dashboard to be missing before and present after a load
#[tokio::test]
async fn current_dashboard_follows_latest_load() {
    let router = test_router();

    let (status, _) = get_json(router.clone(), "/api/dashboard/current").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get_json(router.clone(), "/api/dashboard?from=2024-03-01&to=2024-03-31").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get_json(router, "/api/dashboard/current").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["range"]["to"], "2024-03-31");
}

/// Expect 400 Bad Request without a date range
#[tokio::test]
async fn dashboard_requires_range() {
    let (status, _) = get_json(test_router(), "/api/dashboard").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Expect 400 Bad Request for a range spanning centuries, before anything is loaded
#[tokio::test]
async fn dashboard_rejects_oversized_range() {
    let router = test_router();

    let (status, body) = get_json(router.clone(), "/api/dashboard?from=0001-01-01&to=9999-12-31").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("exceeds the maximum"));

    let (status, _) = get_json(router, "/api/dashboard/current").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
