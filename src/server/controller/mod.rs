//! HTTP controller endpoints for the Panorama web API.
//!
//! Axum handlers for per-region and aggregated events and absences, the
//! absence type catalog and the dashboard. Handlers validate the date range,
//! call into the service layer and document themselves for OpenAPI via utoipa.

pub mod absence;
pub mod dashboard;
pub mod event;
pub mod util;
