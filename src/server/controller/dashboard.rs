use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, dashboard::DashboardDto},
    server::{
        controller::util::range::RangeParams,
        error::Error,
        model::app::AppState,
        service::metrics::positions_for_client,
    },
};

pub static DASHBOARD_TAG: &str = "dashboard";

/// Client selected on the absences-per-client chart
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DashboardParams {
    /// Restricts the absences-per-position breakdown to this client
    pub client: Option<String>,
}

/// Load the dashboard of a date range
///
/// Fetches events, absences and absence types of every region, derives their
/// metrics and stores the result as the current dashboard unless a newer range
/// was requested in the meantime. The loaded snapshot is returned either way.
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = DASHBOARD_TAG,
    params(RangeParams, DashboardParams),
    responses(
        (status = 200, description = "Dashboard of the range", body = DashboardDto),
        (status = 400, description = "Missing or invalid date range", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
    Query(drill_down): Query<DashboardParams>,
) -> Result<impl IntoResponse, Error> {
    let range = params.parse()?;

    let outcome = state.dashboard.refresh(range).await;
    let mut dashboard = DashboardDto::clone(outcome.snapshot());

    if let Some(client) = drill_down.client {
        dashboard.absence_metrics.by_position = positions_for_client(&dashboard.absences, &client);
    }

    Ok((StatusCode::OK, Json(dashboard)))
}

/// Get the most recently loaded dashboard
#[utoipa::path(
    get,
    path = "/api/dashboard/current",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Latest stored dashboard", body = DashboardDto),
        (status = 404, description = "No dashboard loaded yet", body = ErrorDto)
    ),
)]
pub async fn get_current_dashboard(State(state): State<AppState>) -> impl IntoResponse {
    match state.dashboard.current().await {
        Some(dashboard) => (StatusCode::OK, Json(DashboardDto::clone(&dashboard))).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "No dashboard has been loaded yet".to_string(),
            }),
        )
            .into_response(),
    }
}
