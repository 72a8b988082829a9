use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Parameters \"from\" and \"to\" are required")]
    MissingRange,
    #[error("Parameter \"{param}\" is not a valid YYYY-MM-DD date: {value:?}")]
    InvalidDate { param: &'static str, value: String },
    #[error("Parameter \"from\" ({from}) must not be after \"to\" ({to})")]
    InvertedRange { from: String, to: String },
    #[error("Range of {days} days exceeds the maximum of {max} days")]
    RangeTooLong { days: u64, max: u64 },
    #[error("Unknown region: {0:?}")]
    UnknownRegion(String),
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        let status = match self {
            Self::UnknownRegion(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
