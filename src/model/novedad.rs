use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::record::{calendar_day, Dated, Identifier, ProjectScoped};

/// Default value for position & client when a region doesn't record them
pub const NOT_AVAILABLE: &str = "N/A";

/// Operational event registered against a region
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Novedad {
    pub id: Identifier,
    /// Day of the event formatted as `YYYY-MM-DD`
    pub date: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub project: String,
    pub user: String,
    pub description: String,
    pub management_note: String,
    pub critical: bool,
    pub sequence_number: Identifier,
    pub position: String,
    pub client: String,
    pub images: Vec<ImageDto>,
}

impl Dated for Novedad {
    fn day(&self) -> Option<NaiveDate> {
        calendar_day(&self.date)
    }
}

impl ProjectScoped for Novedad {
    fn id(&self) -> &Identifier {
        &self.id
    }

    fn project(&self) -> &str {
        &self.project
    }
}

/// Image or file attached to an event
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageDto {
    pub id: Option<i64>,
    pub url: String,
    pub original_filename: Option<String>,
    pub uploaded_at: String,
}
