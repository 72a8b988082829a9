use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{AggregateDto, DataDto, ErrorDto},
        ausencia::Ausencia,
        filter::AbsenceFilter,
    },
    server::{
        controller::util::range::RangeParams,
        error::{request::RequestError, Error},
        model::app::AppState,
        region,
        service::{
            absence_type::AbsenceTypeService,
            aggregate::Aggregator,
            source::{AbsenceSource, AbsenceTypeSource, RegionSource},
        },
    },
};

pub static ABSENCE_TAG: &str = "absence";

/// Get the absences of one region starting within a date range
#[utoipa::path(
    get,
    path = "/api/absences/{region}",
    tag = ABSENCE_TAG,
    params(
        ("region" = String, Path, description = "Region slug, e.g. `barranquilla`"),
        RangeParams
    ),
    responses(
        (status = 200, description = "Absences of the region", body = DataDto<Vec<Ausencia>>),
        (status = 400, description = "Missing or invalid date range", body = ErrorDto),
        (status = 404, description = "Unknown region or region without absences", body = ErrorDto),
        (status = 500, description = "Region's database unavailable", body = ErrorDto)
    ),
)]
pub async fn get_region_absences(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<RangeParams>,
) -> Result<impl IntoResponse, Error> {
    let region = region::find(&slug)
        .filter(|region| region.absences.is_some())
        .ok_or(RequestError::UnknownRegion(slug))?;
    let range = params.parse()?;

    let absences = AbsenceSource::new(region, &state.config)
        .fetch(&range)
        .await?;

    Ok((StatusCode::OK, Json(DataDto { data: absences })))
}

/// Get the deduplicated absences of every region starting within a date range
#[utoipa::path(
    get,
    path = "/api/absences",
    tag = ABSENCE_TAG,
    params(RangeParams, AbsenceFilter),
    responses(
        (status = 200, description = "Absences of every reachable region", body = AggregateDto<Ausencia>),
        (status = 400, description = "Missing or invalid date range", body = ErrorDto)
    ),
)]
pub async fn get_absences(
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
    Query(filter): Query<AbsenceFilter>,
) -> Result<impl IntoResponse, Error> {
    let range = params.parse()?;

    let outcome = Aggregator::new(AbsenceSource::all(&state.config))
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

/// Get the active absence types of every region
///
/// Never fails: when no region can provide its types a default list is
/// returned instead.
#[utoipa::path(
    get,
    path = "/api/absences/types",
    tag = ABSENCE_TAG,
    responses(
        (status = 200, description = "Sorted, distinct absence type names", body = DataDto<Vec<String>>)
    ),
)]
pub async fn get_absence_types(State(state): State<AppState>) -> impl IntoResponse {
    let types = AbsenceTypeService::new(AbsenceTypeSource::all(&state.config))
        .get_absence_types()
        .await;

    (StatusCode::OK, Json(DataDto { data: types }))
}
