use std::{future::Future, time::Duration};

use dioxus_logger::tracing;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr,
    FromQueryResult, Statement, Value,
};

use crate::{
    model::range::DateRange,
    server::{
        config::ConnectionConfig,
        data::row::{AbsenceTypeRow, RawAusenciaRow, RawNovedadRow},
        error::source::SourceError,
        region::{Region, SourceQuery},
    },
};

/// Reads raw rows from the database of a single region
///
/// Each call opens its own connection, runs one statement and closes the
/// connection again; nothing is pooled or shared between calls. The whole
/// call, connection included, is bounded by `timeout`.
#[derive(Clone, Debug)]
pub struct RegionRepository {
    region: &'static Region,
    connection: Option<ConnectionConfig>,
    timeout: Duration,
}

impl RegionRepository {
    /// Creates a new instance of [`RegionRepository`]
    ///
    /// # Arguments
    /// - `region` - Region entry of the declarative region table
    /// - `connection` - Connection parameters, `None` if the region's database isn't configured
    /// - `timeout` - Upper bound for every call
    pub fn new(
        region: &'static Region,
        connection: Option<ConnectionConfig>,
        timeout: Duration,
    ) -> Self {
        Self {
            region,
            connection,
            timeout,
        }
    }

    pub fn region(&self) -> &'static Region {
        self.region
    }

    /// Event rows whose day falls within `range`, both ends included
    pub async fn get_events(&self, range: &DateRange) -> Result<Vec<RawNovedadRow>, SourceError> {
        let query = self.query(self.region.events.as_ref())?;

        self.fetch(query, range_values(range)).await
    }

    /// Absence rows whose start day falls within `range`, both ends included
    pub async fn get_absences(
        &self,
        range: &DateRange,
    ) -> Result<Vec<RawAusenciaRow>, SourceError> {
        let query = self.query(self.region.absences.as_ref())?;

        self.fetch(query, range_values(range)).await
    }

    /// Names of the absence types currently active in the region
    pub async fn get_absence_types(&self) -> Result<Vec<AbsenceTypeRow>, SourceError> {
        let query = self.query(self.region.absence_types.as_ref())?;

        self.fetch(query, Vec::new()).await
    }

    fn query<'q>(&self, query: Option<&'q SourceQuery>) -> Result<&'q SourceQuery, SourceError> {
        query.ok_or_else(|| SourceError::NotConfigured {
            project: self.region.project.to_string(),
        })
    }

    async fn fetch<R>(&self, query: &SourceQuery, values: Vec<Value>) -> Result<Vec<R>, SourceError>
    where
        R: FromQueryResult + Send,
    {
        let project = self.region.project;

        let fetch = async {
            let db = self.connect().await?;

            let result = run_query::<R>(&db, query, values).await;

            if let Err(e) = db.close().await {
                tracing::warn!("Failed to close {} database connection: {}", project, e);
            }

            result.map_err(|source| SourceError::Query {
                project: project.to_string(),
                source,
            })
        };

        let rows = with_timeout(project, self.timeout, fetch).await?;

        tracing::debug!("Fetched {} rows from {}", rows.len(), project);

        Ok(rows)
    }

    async fn connect(&self) -> Result<DatabaseConnection, SourceError> {
        let project = self.region.project;

        let connection = self
            .connection
            .as_ref()
            .ok_or_else(|| SourceError::NotConfigured {
                project: project.to_string(),
            })?;

        let url = connection.url().map_err(|reason| SourceError::Connect {
            project: project.to_string(),
            source: DbErr::Custom(reason),
        })?;

        let mut opt = ConnectOptions::new(url.to_string());
        opt.max_connections(1).min_connections(0).sqlx_logging(false);

        Database::connect(opt)
            .await
            .map_err(|source| SourceError::Connect {
                project: project.to_string(),
                source,
            })
    }
}

/// Bounds one regional store call, an elapsed call is reported as [`SourceError::Timeout`]
pub async fn with_timeout<T, F>(project: &str, after: Duration, call: F) -> Result<T, SourceError>
where
    F: Future<Output = Result<T, SourceError>>,
{
    tokio::time::timeout(after, call)
        .await
        .map_err(|_| SourceError::Timeout {
            project: project.to_string(),
            after,
        })?
}

async fn run_query<R>(
    db: &DatabaseConnection,
    query: &SourceQuery,
    values: Vec<Value>,
) -> Result<Vec<R>, DbErr>
where
    R: FromQueryResult,
{
    // Session variables only hold for this connection, hence the pool of one
    if let Some(setup) = query.setup {
        db.execute_unprepared(setup).await?;
    }

    R::find_by_statement(Statement::from_sql_and_values(
        DbBackend::MySql,
        query.sql,
        values,
    ))
    .all(db)
    .await
}

fn range_values(range: &DateRange) -> Vec<Value> {
    vec![range.from.into(), range.to.into()]
}
