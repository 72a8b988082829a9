use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{AggregateDto, DataDto, ErrorDto},
        filter::EventFilter,
        novedad::Novedad,
    },
    server::{
        controller::util::range::RangeParams,
        error::{request::RequestError, Error},
        model::app::AppState,
        region,
        service::{
            aggregate::Aggregator,
            source::{EventSource, RegionSource},
        },
    },
};

pub static EVENT_TAG: &str = "event";

/// Get the events of one region within a date range
#[utoipa::path(
    get,
    path = "/api/events/{region}",
    tag = EVENT_TAG,
    params(
        ("region" = String, Path, description = "Region slug, e.g. `cartagena`"),
        RangeParams
    ),
    responses(
        (status = 200, description = "Events of the region", body = DataDto<Vec<Novedad>>),
        (status = 400, description = "Missing or invalid date range", body = ErrorDto),
        (status = 404, description = "Unknown region", body = ErrorDto),
        (status = 500, description = "Region's database unavailable", body = ErrorDto)
    ),
)]
pub async fn get_region_events(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<RangeParams>,
) -> Result<impl IntoResponse, Error> {
    let region = region::find(&slug)
        .filter(|region| region.events.is_some())
        .ok_or(RequestError::UnknownRegion(slug))?;
    let range = params.parse()?;

    let events = EventSource::new(region, &state.config).fetch(&range).await?;

    Ok((StatusCode::OK, Json(DataDto { data: events })))
}

/// Get the deduplicated events of every region within a date range
///
/// Regions that can't be reached are listed in `failedSources` while the
/// events of every other region are still returned. Optional drill-down
/// parameters narrow the result to one project, type, client or day.
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    params(RangeParams, EventFilter),
    responses(
        (status = 200, description = "Events of every reachable region", body = AggregateDto<Novedad>),
        (status = 400, description = "Missing or invalid date range", body = ErrorDto)
    ),
)]
pub async fn get_events(
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
    Query(filter): Query<EventFilter>,
) -> Result<impl IntoResponse, Error> {
    let range = params.parse()?;

    let outcome = Aggregator::new(EventSource::all(&state.config))
        .aggregate(&range)
        .await;
    let failed_sources = outcome.failed_sources();

    Ok((
        StatusCode::OK,
        Json(AggregateDto {
            data: filter.apply(outcome.records),
            failed_sources,
        }),
    ))
}
