//! Tests for route registration.

use axum::http::StatusCode;

use super::*;

/// Expect the OpenAPI document to list every API path
#[tokio::test]
async fn openapi_lists_every_path() {
    let (status, body) = get_json(test_router(), "/api/docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);

    let paths = body["paths"].as_object().unwrap();
    for path in [
        "/api/events/{region}",
        "/api/events",
        "/api/absences/{region}",
        "/api/absences",
        "/api/absences/types",
        "/api/dashboard",
        "/api/dashboard/current",
    ] {
        assert!(paths.contains_key(path), "missing {}", path);
    }
}

/// Expect an unknown path to be answered with 404 Not Found
#[tokio::test]
async fn unknown_path_is_not_found() {
    let (status, _) = get_json(test_router(), "/api/users").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
