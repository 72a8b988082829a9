use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, Debug, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response wrapping the records of a single region
#[derive(Serialize, Deserialize, Debug, utoipa::ToSchema)]
pub struct DataDto<T> {
    pub data: T,
}

/// The response for an aggregated, multi-region request
///
/// Regions that could not be reached are listed in `failed_sources` while the
/// records of every other region are still returned in `data`.
#[derive(Serialize, Deserialize, Debug, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AggregateDto<T> {
    pub data: Vec<T>,
    pub failed_sources: Vec<SourceFailureDto>,
}

/// A region which failed during an aggregated request
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, utoipa::ToSchema)]
pub struct SourceFailureDto {
    /// Project label of the failed region
    pub project: String,
    /// Generic failure reason, never the underlying driver error
    pub reason: String,
}
