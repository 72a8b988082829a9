//! Regional sources of canonical records.
//!
//! A source fetches the raw rows of one region and normalizes them. The
//! aggregator only sees the [`RegionSource`] trait so it can be driven by
//! in-memory sources in tests.

use std::future::Future;

use dioxus_logger::tracing;

use crate::{
    model::{ausencia::Ausencia, novedad::Novedad, range::DateRange, record::Dated},
    server::{
        config::Config,
        data::region::RegionRepository,
        error::source::SourceError,
        region::{Region, REGIONS},
        service::normalize::normalize_rows,
    },
};

/// One region's store of canonical records of a single entity type
pub trait RegionSource {
    type Record;

    /// Project label stamped on every record of the source
    fn project(&self) -> &str;

    /// Fetches and normalizes every record of the region within `range`
    ///
    /// Either all records are returned or the store is reported unavailable,
    /// never a partial list.
    fn fetch(
        &self,
        range: &DateRange,
    ) -> impl Future<Output = Result<Vec<Self::Record>, SourceError>> + Send;
}

/// Regional source of absence type names, independent of any date range
pub trait CatalogSource {
    fn project(&self) -> &str;

    fn fetch_names(&self) -> impl Future<Output = Result<Vec<String>, SourceError>> + Send;
}

/// Events of one region read from its database
#[derive(Clone, Debug)]
pub struct EventSource(RegionRepository);

/// Absences of one region read from its database
#[derive(Clone, Debug)]
pub struct AbsenceSource(RegionRepository);

/// Active absence types of one region read from its database
#[derive(Clone, Debug)]
pub struct AbsenceTypeSource(RegionRepository);

impl EventSource {
    pub fn new(region: &'static Region, config: &Config) -> Self {
        Self(repository(region, config))
    }

    /// Sources of every region recording events, in merge order
    pub fn all(config: &Config) -> Vec<Self> {
        REGIONS
            .iter()
            .filter(|region| region.events.is_some())
            .map(|region| Self::new(region, config))
            .collect()
    }
}

impl AbsenceSource {
    pub fn new(region: &'static Region, config: &Config) -> Self {
        Self(repository(region, config))
    }

    /// Sources of every region recording absences, in merge order
    pub fn all(config: &Config) -> Vec<Self> {
        REGIONS
            .iter()
            .filter(|region| region.absences.is_some())
            .map(|region| Self::new(region, config))
            .collect()
    }
}

impl AbsenceTypeSource {
    /// Sources of every region with an absence type catalog
    pub fn all(config: &Config) -> Vec<Self> {
        REGIONS
            .iter()
            .filter(|region| region.absence_types.is_some())
            .map(|region| Self(repository(region, config)))
            .collect()
    }
}

impl RegionSource for EventSource {
    type Record = Novedad;

    fn project(&self) -> &str {
        self.0.region().project
    }

    async fn fetch(&self, range: &DateRange) -> Result<Vec<Novedad>, SourceError> {
        let rows = self.0.get_events(range).await?;
        let records = normalize_rows(rows, self.project());

        Ok(retain_in_range(records, range, self.project()))
    }
}

impl RegionSource for AbsenceSource {
    type Record = Ausencia;

    fn project(&self) -> &str {
        self.0.region().project
    }

    async fn fetch(&self, range: &DateRange) -> Result<Vec<Ausencia>, SourceError> {
        let rows = self.0.get_absences(range).await?;
        let records = normalize_rows(rows, self.project());

        Ok(retain_in_range(records, range, self.project()))
    }
}

impl CatalogSource for AbsenceTypeSource {
    fn project(&self) -> &str {
        self.0.region().project
    }

    async fn fetch_names(&self) -> Result<Vec<String>, SourceError> {
        let rows = self.0.get_absence_types().await?;

        Ok(rows
            .into_iter()
            .filter_map(|row| row.nombre_tipo_ausencia)
            .collect())
    }
}

/// Drops records filed outside `range`, both ends included
///
/// The statements already filter by day, this only guards against a region
/// whose dates disagree with its own filter column. Records whose day can't be
/// read are kept.
pub fn retain_in_range<T>(records: Vec<T>, range: &DateRange, project: &str) -> Vec<T>
where
    T: Dated,
{
    let total = records.len();

    let records: Vec<T> = records
        .into_iter()
        .filter(|record| record.day().map_or(true, |day| range.contains(day)))
        .collect();

    if records.len() < total {
        tracing::warn!(
            "Dropped {} of {} records from {} filed outside {} to {}",
            total - records.len(),
            total,
            project,
            range.from,
            range.to
        );
    }

    records
}

fn repository(region: &'static Region, config: &Config) -> RegionRepository {
    RegionRepository::new(
        region,
        config.connection(region.database).cloned(),
        config.source_timeout,
    )
}
