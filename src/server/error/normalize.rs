use thiserror::Error;

/// A raw row which cannot be turned into a canonical record
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("Row is missing mandatory field {0:?}")]
    MissingField(&'static str),
    #[error("Row field {field:?} is not a date: {value:?}")]
    InvalidDate { field: &'static str, value: String },
}
