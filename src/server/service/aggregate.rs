use std::collections::HashSet;

use dioxus_logger::tracing;
use futures::future::join_all;

use crate::{
    model::{
        api::SourceFailureDto,
        range::DateRange,
        record::{Identifier, ProjectScoped},
    },
    server::{error::source::SourceError, service::source::RegionSource},
};

/// Result of one aggregated fetch
///
/// `records` holds the deduplicated records of every source that answered,
/// `failures` one entry per source that didn't.
#[derive(Debug)]
pub struct AggregateOutcome<T> {
    pub records: Vec<T>,
    pub failures: Vec<SourceError>,
}

impl<T> AggregateOutcome<T> {
    /// Failed sources in their public form, driver details left out
    pub fn failed_sources(&self) -> Vec<SourceFailureDto> {
        self.failures.iter().map(SourceFailureDto::from).collect()
    }
}

impl From<&SourceError> for SourceFailureDto {
    fn from(error: &SourceError) -> Self {
        Self {
            project: error.project().to_string(),
            reason: error.public_reason().to_string(),
        }
    }
}

/// Fans one fetch out to every regional source of an entity type
pub struct Aggregator<S> {
    sources: Vec<S>,
}

impl<S> Aggregator<S>
where
    S: RegionSource + Sync,
    S::Record: ProjectScoped,
{
    /// Creates a new instance of [`Aggregator`]
    ///
    /// # Arguments
    /// - `sources` - Regional sources in the order their records are merged
    pub fn new(sources: Vec<S>) -> Self {
        Self { sources }
    }

    /// Fetches every source concurrently and merges the records that arrived
    ///
    /// Every source is awaited to completion; a failing source never cancels
    /// or discards the records of the others. Records are merged in source
    /// order and deduplicated by (`id`, `project`), keeping the first.
    pub async fn aggregate(&self, range: &DateRange) -> AggregateOutcome<S::Record> {
        let results = join_all(self.sources.iter().map(|source| source.fetch(range))).await;

        let mut merged = Vec::new();
        let mut failures = Vec::new();

        for (source, result) in self.sources.iter().zip(results) {
            match result {
                Ok(records) => {
                    tracing::debug!("Fetched {} records from {}", records.len(), source.project());
                    merged.extend(records);
                }
                Err(e) => {
                    tracing::warn!("Excluding {} from aggregated result: {}", source.project(), e);
                    failures.push(e);
                }
            }
        }

        AggregateOutcome {
            records: dedupe(merged),
            failures,
        }
    }
}

/// Drops every record whose (`id`, `project`) pair was already seen, order preserved
pub fn dedupe<T>(records: Vec<T>) -> Vec<T>
where
    T: ProjectScoped,
{
    let mut seen: HashSet<(Identifier, String)> = HashSet::with_capacity(records.len());

    records
        .into_iter()
        .filter(|record| seen.insert((record.id().clone(), record.project().to_string())))
        .collect()
}
