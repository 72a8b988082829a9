//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/events/{region}` - Events of one region
/// - `GET /api/events` - Deduplicated events of every region, with drill-down filters
/// - `GET /api/absences/{region}` - Absences of one region
/// - `GET /api/absences` - Deduplicated absences of every region, with drill-down filters
/// - `GET /api/absences/types` - Active absence types, default list as fallback
/// - `GET /api/dashboard` - Load the dashboard of a date range
/// - `GET /api/dashboard/current` - Most recently loaded dashboard
///
/// The static `/api/absences/types` path takes precedence over `/api/absences/{region}`,
/// so no region may use `types` as its slug.
///
/// # Returns
/// An Axum `Router<AppState>` with every route and Swagger UI at `/api/docs`, the
/// OpenAPI specification itself is served at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::new(config));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Panorama", description = "Panorama operations dashboard API"), tags(
        (name = controller::event::EVENT_TAG, description = "Operational event routes"),
        (name = controller::absence::ABSENCE_TAG, description = "Personnel absence routes"),
        (name = controller::dashboard::DASHBOARD_TAG, description = "Aggregated dashboard routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::event::get_region_events))
        .routes(routes!(controller::event::get_events))
        .routes(routes!(controller::absence::get_absence_types))
        .routes(routes!(controller::absence::get_region_absences))
        .routes(routes!(controller::absence::get_absences))
        .routes(routes!(controller::dashboard::get_dashboard))
        .routes(routes!(controller::dashboard::get_current_dashboard))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
