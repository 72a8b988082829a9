//! Dashboard snapshots and the state holding the latest one.
//!
//! A snapshot bundles everything the dashboard shows for one date range. It is
//! built in one go by a [`DashboardLoader`] and only ever replaced as a whole.

use std::{
    future::Future,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use dioxus_logger::tracing;
use tokio::sync::RwLock;

use crate::{
    model::{
        ausencia::Ausencia, dashboard::DashboardDto, novedad::Novedad, range::DateRange,
    },
    server::{
        config::Config,
        region,
        service::{
            absence_type::AbsenceTypeService,
            aggregate::Aggregator,
            metrics::{absence_metrics, event_metrics},
            source::{AbsenceSource, AbsenceTypeSource, CatalogSource, EventSource, RegionSource},
        },
    },
};

/// Builds complete dashboard snapshots
pub trait DashboardLoader {
    fn load(&self, range: DateRange) -> impl Future<Output = DashboardDto> + Send;
}

/// Dashboard backed by the regional databases
pub type SqlDashboardService = DashboardService<EventSource, AbsenceSource, AbsenceTypeSource>;

/// Loads events, absences & absence types together and derives their metrics
pub struct DashboardService<E, A, T> {
    events: Aggregator<E>,
    absences: Aggregator<A>,
    absence_types: AbsenceTypeService<T>,
}

impl SqlDashboardService {
    /// Dashboard over every region of the region table
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Aggregator::new(EventSource::all(config)),
            Aggregator::new(AbsenceSource::all(config)),
            AbsenceTypeService::new(AbsenceTypeSource::all(config)),
        )
    }
}

impl<E, A, T> DashboardService<E, A, T> {
    /// Creates a new instance of [`DashboardService`]
    pub fn new(
        events: Aggregator<E>,
        absences: Aggregator<A>,
        absence_types: AbsenceTypeService<T>,
    ) -> Self {
        Self {
            events,
            absences,
            absence_types,
        }
    }
}

impl<E, A, T> DashboardLoader for DashboardService<E, A, T>
where
    E: RegionSource<Record = Novedad> + Sync,
    A: RegionSource<Record = Ausencia> + Sync,
    T: CatalogSource + Sync,
{
    /// Fetches every region concurrently and assembles the snapshot
    ///
    /// Regions that fail are listed in `failed_sources`; the snapshot is built
    /// from whatever the remaining regions returned.
    async fn load(&self, range: DateRange) -> DashboardDto {
        let (events, absences, absence_types) = tokio::join!(
            self.events.aggregate(&range),
            self.absences.aggregate(&range),
            self.absence_types.get_absence_types(),
        );

        let mut failed_sources = events.failed_sources();
        failed_sources.extend(absences.failed_sources());

        let mut events = events.records;
        let mut absences = absences.records;

        // Stable sorts, records of the same day stay in merge order
        events.sort_by(|a, b| b.date.cmp(&a.date));
        absences.sort_by(|a, b| b.start_date.cmp(&a.start_date));

        let event_metrics = event_metrics(&events, &range, &region::event_projects());
        let absence_metrics =
            absence_metrics(&absences, &absence_types, &region::absence_projects());

        tracing::info!(
            "Loaded dashboard for {} to {}: {} events, {} absences, {} failed sources",
            range.from,
            range.to,
            events.len(),
            absences.len(),
            failed_sources.len()
        );

        DashboardDto {
            range,
            events,
            absences,
            absence_types,
            event_metrics,
            absence_metrics,
            failed_sources,
        }
    }
}

/// Result of a [`DashboardState::refresh`]
#[derive(Clone, Debug)]
pub enum RefreshOutcome {
    /// The loaded snapshot is now the current one
    Applied(Arc<DashboardDto>),
    /// A newer refresh was requested while loading, the snapshot was not stored
    Stale(Arc<DashboardDto>),
}

impl RefreshOutcome {
    /// The snapshot loaded by this refresh, whether it was stored or not
    pub fn snapshot(&self) -> &Arc<DashboardDto> {
        match self {
            Self::Applied(snapshot) | Self::Stale(snapshot) => snapshot,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Holds the snapshot of the most recently requested date range
///
/// Every refresh takes a generation number; a load that completes after a newer
/// refresh was requested is discarded so an older, slower load can never
/// overwrite the result of a newer range.
pub struct DashboardState<L> {
    loader: L,
    generation: AtomicU64,
    snapshot: RwLock<Option<Arc<DashboardDto>>>,
}

impl<L> DashboardState<L>
where
    L: DashboardLoader,
{
    /// Creates a new instance of [`DashboardState`] without a snapshot
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            generation: AtomicU64::new(0),
            snapshot: RwLock::new(None),
        }
    }

    /// Loads the snapshot of `range` and stores it unless a newer refresh was requested meanwhile
    pub async fn refresh(&self, range: DateRange) -> RefreshOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let snapshot = Arc::new(self.loader.load(range).await);

        let mut current = self.snapshot.write().await;

        let latest = self.generation.load(Ordering::SeqCst);
        if latest != generation {
            tracing::debug!(
                "Discarding dashboard load {} for {} to {}, superseded by {}",
                generation,
                range.from,
                range.to,
                latest
            );

            return RefreshOutcome::Stale(snapshot);
        }

        *current = Some(snapshot.clone());

        RefreshOutcome::Applied(snapshot)
    }

    /// Most recently stored snapshot, `None` before the first refresh completes
    pub async fn current(&self) -> Option<Arc<DashboardDto>> {
        self.snapshot.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use chrono::{Datelike, NaiveDate};

    use super::*;
    use crate::{
        model::{
            api::SourceFailureDto,
            metrics::{AbsenceMetricsDto, EventMetricsDto},
        },
        server::util::test::{factory, source::FakeSource},
    };

    fn range(from: &str, to: &str) -> DateRange {
        let parse = |day: &str| NaiveDate::parse_from_str(day, "%Y-%m-%d").unwrap();
        DateRange::new(parse(from), parse(to)).unwrap()
    }

    mod load {
        use super::*;

        /// Expect a snapshot from healthy regions with the failed one reported
        #[tokio::test]
        async fn builds_snapshot_despite_failed_region() {
            let service = DashboardService::new(
                Aggregator::new(vec![
                    FakeSource::ok(
                        "BARRANQUILLA",
                        vec![
                            factory::novedad(1, "BARRANQUILLA", "2024-01-01", "Ronda"),
                            factory::novedad(2, "BARRANQUILLA", "2024-01-03", "Ronda"),
                        ],
                    ),
                    FakeSource::failing("CARTAGENA"),
                ]),
                Aggregator::new(vec![FakeSource::ok(
                    "CARTAGENA",
                    vec![factory::ausencia(1, "CARTAGENA", "Licencia", 3)],
                )]),
                AbsenceTypeService::new(vec![FakeSource::<String>::failing("CARTAGENA")]),
            );

            let snapshot = service.load(range("2024-01-01", "2024-01-03")).await;

            assert_eq!(snapshot.events.len(), 2);
            assert_eq!(snapshot.events[0].date, "2024-01-03");
            assert_eq!(
                snapshot.failed_sources,
                vec![SourceFailureDto {
                    project: "CARTAGENA".to_string(),
                    reason: "not configured".to_string(),
                }]
            );
            assert_eq!(
                snapshot.absence_types,
                vec!["Accidente laboral", "Enfermedad", "Incumplimiento de horario"]
            );
            assert_eq!(snapshot.event_metrics.total, 2);
            assert_eq!(snapshot.event_metrics.days_analyzed, 3);
            assert_eq!(snapshot.absence_metrics.average_duration_days, 3.0);
            // Default types are zero-filled, the unlisted type is still counted
            assert_eq!(snapshot.absence_metrics.by_type.len(), 4);
        }
    }

    /// Loader answering with an empty snapshot of the range after a range-dependent delay
    struct DelayedLoader;

    impl DashboardLoader for DelayedLoader {
        async fn load(&self, range: DateRange) -> DashboardDto {
            // Ranges starting in January load slowly
            if range.from.month() == 1 {
                tokio::time::sleep(Duration::from_millis(100)).await;
            }

            DashboardDto {
                range,
                events: Vec::new(),
                absences: Vec::new(),
                absence_types: Vec::new(),
                event_metrics: EventMetricsDto {
                    total: 0,
                    days_analyzed: range.days(),
                    critical: 0,
                    top_type: None,
                    busiest_day: None,
                    by_project: Vec::new(),
                    by_type: Vec::new(),
                    by_client: Vec::new(),
                    by_day: Vec::new(),
                },
                absence_metrics: AbsenceMetricsDto {
                    total: 0,
                    average_duration_days: 0.0,
                    by_type: Vec::new(),
                    by_project: Vec::new(),
                    by_client: Vec::new(),
                    by_position: Vec::new(),
                },
                failed_sources: Vec::new(),
            }
        }
    }

    mod refresh {
        use super::*;

        /// Expect no snapshot before the first refresh
        #[tokio::test]
        async fn starts_empty() {
            let state = DashboardState::new(DelayedLoader);

            assert!(state.current().await.is_none());
        }

        /// Expect a completed refresh to become the current snapshot
        #[tokio::test]
        async fn applies_latest_refresh() {
            let state = DashboardState::new(DelayedLoader);
            let february = range("2024-02-01", "2024-02-29");

            let outcome = state.refresh(february).await;

            assert!(outcome.is_applied());
            assert_eq!(state.current().await.unwrap().range, february);
        }

        /// Expect a slow, older refresh finishing last to be discarded
        #[tokio::test]
        async fn discards_superseded_refresh() {
            let state = Arc::new(DashboardState::new(DelayedLoader));
            let january = range("2024-01-01", "2024-01-31");
            let february = range("2024-02-01", "2024-02-29");

            let slow = {
                let state = state.clone();
                tokio::spawn(async move { state.refresh(january).await })
            };
            tokio::time::sleep(Duration::from_millis(20)).await;
            let fast = state.refresh(february).await;
            let slow = slow.await.unwrap();

            assert!(fast.is_applied());
            assert!(!slow.is_applied());
            assert_eq!(slow.snapshot().range, january);
            assert_eq!(state.current().await.unwrap().range, february);
        }
    }
}
