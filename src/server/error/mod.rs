//! Error types for the Panorama server.
//!
//! Errors are grouped by domain and those reaching an HTTP handler are aggregated
//! into a single [`Error`] implementing `IntoResponse`, so handlers can propagate
//! them with `?`. Row normalization errors never leave the normalizer.

pub mod config;
pub mod normalize;
pub mod request;
pub mod source;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, request::RequestError, source::SourceError},
};

/// Main error type for the Panorama server.
///
/// Uses `thiserror`'s `#[from]` attribute so domain errors convert with the `?`
/// operator. The `IntoResponse` implementation maps them to HTTP responses.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Invalid request parameters (missing or malformed date range, unknown region).
    #[error(transparent)]
    RequestError(#[from] RequestError),
    /// A regional data store could not be reached or queried.
    #[error(transparent)]
    SourceError(#[from] SourceError),
    /// IO error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Missing, malformed, inverted or oversized date range
/// - 404 Not Found - Unknown region
/// - 500 Internal Server Error - Store failures and everything else, with a generic message
///   that never includes configuration details
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::RequestError(err) => err.into_response(),
            Self::SourceError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
