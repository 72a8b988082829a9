use dioxus_logger::tracing;
use futures::future::join_all;

use crate::server::service::source::CatalogSource;

/// Absence types offered when no region could provide its own
pub const DEFAULT_ABSENCE_TYPES: [&str; 3] =
    ["Enfermedad", "Incumplimiento de horario", "Accidente laboral"];

/// Resolves the list of absence types across every region with a catalog
pub struct AbsenceTypeService<S> {
    sources: Vec<S>,
}

impl<S> AbsenceTypeService<S>
where
    S: CatalogSource + Sync,
{
    /// Creates a new instance of [`AbsenceTypeService`]
    pub fn new(sources: Vec<S>) -> Self {
        Self { sources }
    }

    /// Distinct active absence types of every region, sorted
    ///
    /// Each region is queried in isolation; a failing region is logged and
    /// skipped. When no region yields a single type the default list is
    /// returned instead, so this never fails.
    pub async fn get_absence_types(&self) -> Vec<String> {
        let results = join_all(self.sources.iter().map(|source| source.fetch_names())).await;

        let mut names = Vec::new();
        for (source, result) in self.sources.iter().zip(results) {
            match result {
                Ok(found) => names.extend(found),
                Err(e) => tracing::warn!("Skipping absence types of {}: {}", source.project(), e),
            }
        }

        merge_names(names)
    }
}

/// Trims, deduplicates & sorts type names, substituting the defaults when none remain
fn merge_names(names: Vec<String>) -> Vec<String> {
    let mut names: Vec<String> = names
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();

    if names.is_empty() {
        tracing::warn!("No absence types available from any region, using defaults");
        names.extend(DEFAULT_ABSENCE_TYPES.iter().map(|name| name.to_string()));
    }

    names.sort();
    names.dedup();

    names
}
