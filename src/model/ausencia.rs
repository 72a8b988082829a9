use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::record::{calendar_day, Dated, Identifier, ProjectScoped};

/// Personnel absence registered against a region
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ausencia {
    pub id: Identifier,
    /// First day of the absence formatted as `YYYY-MM-DD`
    pub start_date: String,
    /// Last day of the absence formatted as `YYYY-MM-DD`, inclusive
    pub end_date: String,
    pub description: String,
    pub absence_type: String,
    pub collaborator: String,
    pub position: String,
    pub registered_by: String,
    pub registered_at: String,
    pub project: String,
    pub client: String,
    /// Inclusive number of days between start & end date, never below 1
    pub duration_days: i64,
}

impl Dated for Ausencia {
    fn day(&self) -> Option<NaiveDate> {
        calendar_day(&self.start_date)
    }
}

impl ProjectScoped for Ausencia {
    fn id(&self) -> &Identifier {
        &self.id
    }

    fn project(&self) -> &str {
        &self.project
    }
}
