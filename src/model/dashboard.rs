use serde::{Deserialize, Serialize};

use crate::model::{
    api::SourceFailureDto,
    ausencia::Ausencia,
    metrics::{AbsenceMetricsDto, EventMetricsDto},
    novedad::Novedad,
    range::DateRange,
};

/// Complete aggregated view of one date range
///
/// Snapshots are only ever replaced as a whole when the range changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDto {
    pub range: DateRange,
    /// Deduplicated events of every region, most recent first
    pub events: Vec<Novedad>,
    /// Deduplicated absences of every region, most recent start first
    pub absences: Vec<Ausencia>,
    pub absence_types: Vec<String>,
    pub event_metrics: EventMetricsDto,
    pub absence_metrics: AbsenceMetricsDto,
    pub failed_sources: Vec<SourceFailureDto>,
}
