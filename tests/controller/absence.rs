//! Tests for the absence endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use panorama::server::controller::absence::get_absence_types;

use super::*;

/// Expect the default types, sorted, with 200 OK when no region can be queried
#[tokio::test]
async fn absence_types_fall_back_to_defaults() {
    let resp = get_absence_types(State(test_state())).await.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let (status, body) = get_json(test_router(), "/api/absences/types").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        serde_json::json!(["Accidente laboral", "Enfermedad", "Incumplimiento de horario"])
    );
}

/// Expect 404 Not Found for a region that records no absences
#[tokio::test]
async fn region_without_absences_is_not_found() {
    let (status, _) =
        get_json(test_router(), "/api/absences/cementos?from=2024-01-01&to=2024-01-31").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Expect 400 Bad Request for a malformed date
#[tokio::test]
async fn malformed_date_is_bad_request() {
    let (status, body) =
        get_json(test_router(), "/api/absences/barranquilla?from=01-01-2024&to=2024-01-31").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("\"from\""));
}

/// Expect 500 with a generic message for a region whose database isn't configured
#[tokio::test]
async fn unconfigured_region_fails_with_generic_message() {
    let (status, body) =
        get_json(test_router(), "/api/absences/barranquilla?from=2024-01-01&to=2024-01-31").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch data for BARRANQUILLA");
}

/// Expect the aggregated endpoint to list both absence regions as failed
#[tokio::test]
async fn aggregated_absences_report_failed_sources() {
    let (status, body) = get_json(
        test_router(),
        "/api/absences?from=2024-01-01&to=2024-01-31&type=Enfermedad",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], serde_json::json!([]));
    assert_eq!(body["failedSources"].as_array().unwrap().len(), 2);
}
