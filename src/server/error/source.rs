use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use sea_orm::DbErr;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failure of a single regional data store
///
/// Every variant represents the store being unavailable for the call in
/// question; no partial data is ever returned alongside one of these.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("No database connection is configured for {project}")]
    NotConfigured { project: String },
    #[error("Failed to connect to the {project} database: {source}")]
    Connect {
        project: String,
        #[source]
        source: DbErr,
    },
    #[error("Failed to query the {project} database: {source}")]
    Query {
        project: String,
        #[source]
        source: DbErr,
    },
    #[error("The {project} database did not answer within {after:?}")]
    Timeout { project: String, after: Duration },
}

impl SourceError {
    /// Project label of the region which failed
    pub fn project(&self) -> &str {
        match self {
            Self::NotConfigured { project }
            | Self::Connect { project, .. }
            | Self::Query { project, .. }
            | Self::Timeout { project, .. } => project,
        }
    }

    /// Reason safe to hand to API consumers, without driver details
    pub fn public_reason(&self) -> &'static str {
        match self {
            Self::NotConfigured { .. } => "not configured",
            Self::Connect { .. } | Self::Query { .. } => "unavailable",
            Self::Timeout { .. } => "timed out",
        }
    }
}

impl IntoResponse for SourceError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: format!("Failed to fetch data for {}", self.project()),
            }),
        )
            .into_response()
    }
}
