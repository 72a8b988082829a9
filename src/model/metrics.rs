use serde::{Deserialize, Serialize};

/// Number of records sharing one category value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CategoryCountDto {
    pub label: String,
    pub count: u64,
    /// Share of the total in percent, rounded to one decimal
    pub percentage: f64,
}

/// Number of events registered on one day
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DayCountDto {
    /// Day formatted as `YYYY-MM-DD`
    pub date: String,
    pub count: u64,
}

/// Statistics derived from an aggregated list of events
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventMetricsDto {
    pub total: u64,
    pub days_analyzed: u64,
    pub critical: u64,
    /// Most frequent event type, `None` when there are no events
    pub top_type: Option<CategoryCountDto>,
    /// Day with the most events, `None` when there are no events
    pub busiest_day: Option<DayCountDto>,
    pub by_project: Vec<CategoryCountDto>,
    pub by_type: Vec<CategoryCountDto>,
    pub by_client: Vec<CategoryCountDto>,
    /// One entry per day of the requested range, days without events included
    pub by_day: Vec<DayCountDto>,
}

/// Statistics derived from an aggregated list of absences
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AbsenceMetricsDto {
    pub total: u64,
    /// Average absence duration in days, rounded to one decimal
    pub average_duration_days: f64,
    pub by_type: Vec<CategoryCountDto>,
    pub by_project: Vec<CategoryCountDto>,
    pub by_client: Vec<CategoryCountDto>,
    /// Absences per position, restricted to one client when one was selected
    pub by_position: Vec<CategoryCountDto>,
}
