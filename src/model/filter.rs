//! Drill-down filters applied to aggregated records.
//!
//! Each field narrows the records to those whose dimension equals the selected
//! value; unset fields match everything.

use serde::{Deserialize, Serialize};

use crate::model::{ausencia::Ausencia, novedad::Novedad};

/// Dimension values selected on the event charts
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EventFilter {
    pub project: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub client: Option<String>,
    /// Day formatted as `YYYY-MM-DD`
    pub date: Option<String>,
}

/// Dimension values selected on the absence charts
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AbsenceFilter {
    pub project: Option<String>,
    #[serde(rename = "type")]
    pub absence_type: Option<String>,
    pub client: Option<String>,
    pub position: Option<String>,
}

fn selected(filter: &Option<String>, value: &str) -> bool {
    filter.as_deref().map_or(true, |selected| selected == value)
}

impl EventFilter {
    pub fn matches(&self, event: &Novedad) -> bool {
        let day = event.date.get(..10).unwrap_or(&event.date);

        selected(&self.project, &event.project)
            && selected(&self.event_type, &event.event_type)
            && selected(&self.client, &event.client)
            && selected(&self.date, day)
    }

    pub fn apply(&self, events: Vec<Novedad>) -> Vec<Novedad> {
        events.into_iter().filter(|e| self.matches(e)).collect()
    }
}

impl AbsenceFilter {
    pub fn matches(&self, absence: &Ausencia) -> bool {
        selected(&self.project, &absence.project)
            && selected(&self.absence_type, &absence.absence_type)
            && selected(&self.client, &absence.client)
            && selected(&self.position, &absence.position)
    }

    pub fn apply(&self, absences: Vec<Ausencia>) -> Vec<Ausencia> {
        absences.into_iter().filter(|a| self.matches(a)).collect()
    }
}
