//! Tests for the event endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use panorama::{
    model::filter::EventFilter,
    server::controller::{event::get_events, event::get_region_events, util::range::RangeParams},
};

use super::*;

fn range(from: &str, to: &str) -> RangeParams {
    RangeParams {
        from: Some(from.to_string()),
        to: Some(to.to_string()),
    }
}

/// Expect 400 Bad Request when `from` is missing
#[tokio::test]
async fn region_events_without_from_is_bad_request() {
    let params = RangeParams {
        from: None,
        to: Some("2024-01-31".to_string()),
    };

    let result = get_region_events(
        State(test_state()),
        Path("cartagena".to_string()),
        Query(params),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

/// Expect 404 Not Found for a region that is not in the region table
#[tokio::test]
async fn unknown_region_is_not_found() {
    let result = get_region_events(
        State(test_state()),
        Path("medellin".to_string()),
        Query(range("2024-01-01", "2024-01-31")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

/// Expect 500 with a generic message for a region whose database isn't configured
#[tokio::test]
async fn unconfigured_region_fails_with_generic_message() {
    let (status, body) =
        get_json(test_router(), "/api/events/cartagena?from=2024-01-01&to=2024-01-31").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch data for CARTAGENA");
}

/// Expect 200 with empty data and every region listed as failed
#[tokio::test]
async fn aggregated_events_report_failed_sources() {
    let result = get_events(
        State(test_state()),
        Query(range("2024-01-01", "2024-01-31")),
        Query(EventFilter::default()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let (_, body) = get_json(test_router(), "/api/events?from=2024-01-01&to=2024-01-31").await;

    assert_eq!(body["data"], serde_json::json!([]));
    let failed = body["failedSources"].as_array().unwrap();
    let projects: Vec<&str> = failed
        .iter()
        .map(|source| source["project"].as_str().unwrap())
        .collect();
    assert_eq!(
        projects,
        vec!["BARRANQUILLA", "CARTAGENA", "CEMENTOS", "GRUPO ARGOS"]
    );
    assert_eq!(failed[0]["reason"], "not configured");
}

/// Expect 400 Bad Request for an inverted range on the aggregated endpoint
#[tokio::test]
async fn aggregated_events_reject_inverted_range() {
    let (status, body) = get_json(test_router(), "/api/events?from=2024-02-01&to=2024-01-01").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("must not be after"));
}
