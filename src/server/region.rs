//! Declarative table of the regional business units.
//!
//! Each region names the database it lives in and the queries used to read
//! its events, absences and absence types. Adding a region, or pointing one at
//! a different database, only requires a new entry in [`REGIONS`].

use crate::server::data::query;

/// Statement run against a regional database, optionally preceded by a session setup statement
#[derive(Debug)]
pub struct SourceQuery {
    /// Executed on the same connection before `sql`, its result is ignored
    pub setup: Option<&'static str>,
    /// Parameterized statement, `from` & `to` dates are bound in that order when present
    pub sql: &'static str,
}

/// One regional business unit and how to read its data
#[derive(Debug)]
pub struct Region {
    /// Path segment used by the per-region routes
    pub slug: &'static str,
    /// Fixed project label stamped on every record of the region
    pub project: &'static str,
    /// Key of the `DB_<KEY>_*` environment variables holding the connection parameters
    pub database: &'static str,
    pub events: Option<SourceQuery>,
    pub absences: Option<SourceQuery>,
    pub absence_types: Option<SourceQuery>,
}

/// Regions in the order their records are merged
pub static REGIONS: &[Region] = &[
    Region {
        slug: "barranquilla",
        project: "BARRANQUILLA",
        database: "BARRANQUILLA",
        events: Some(SourceQuery {
            setup: Some(query::GROUP_CONCAT_LIMIT),
            sql: query::BARRANQUILLA_EVENTS,
        }),
        absences: Some(SourceQuery {
            setup: None,
            sql: query::BARRANQUILLA_ABSENCES,
        }),
        absence_types: Some(SourceQuery {
            setup: None,
            sql: query::ACTIVE_ABSENCE_TYPES,
        }),
    },
    Region {
        slug: "cartagena",
        project: "CARTAGENA",
        database: "CARTAGENA",
        events: Some(SourceQuery {
            setup: Some(query::GROUP_CONCAT_LIMIT),
            sql: query::CARTAGENA_EVENTS,
        }),
        absences: Some(SourceQuery {
            setup: None,
            sql: query::CARTAGENA_ABSENCES,
        }),
        absence_types: Some(SourceQuery {
            setup: None,
            sql: query::ACTIVE_ABSENCE_TYPES,
        }),
    },
    Region {
        slug: "cementos",
        project: "CEMENTOS",
        database: "CEMENTOSARGOS",
        events: Some(SourceQuery {
            setup: Some(query::GROUP_CONCAT_LIMIT),
            sql: query::CEMENTOS_EVENTS,
        }),
        absences: None,
        absence_types: None,
    },
    Region {
        slug: "grupo-argos",
        project: "GRUPO ARGOS",
        database: "CEMENTOSARGOS",
        events: Some(SourceQuery {
            setup: Some(query::GROUP_CONCAT_LIMIT),
            sql: query::GRUPO_ARGOS_EVENTS,
        }),
        absences: None,
        absence_types: None,
    },
];

/// Finds a region by the slug used in its routes
pub fn find(slug: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|region| region.slug == slug)
}

/// Every distinct database key referenced by the table
pub fn database_keys() -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = Vec::new();

    for region in REGIONS {
        if !keys.contains(&region.database) {
            keys.push(region.database);
        }
    }

    keys
}

/// Project labels of the regions recording absences
pub fn absence_projects() -> Vec<&'static str> {
    REGIONS
        .iter()
        .filter(|region| region.absences.is_some())
        .map(|region| region.project)
        .collect()
}

/// Project labels of the regions recording events
pub fn event_projects() -> Vec<&'static str> {
    REGIONS
        .iter()
        .filter(|region| region.events.is_some())
        .map(|region| region.project)
        .collect()
}
