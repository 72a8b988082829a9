use chrono::NaiveDate;
use serde::Deserialize;

use crate::{model::range::DateRange, server::error::request::RequestError};

/// Longest range a request may span, both ends included
pub const MAX_RANGE_DAYS: u64 = 731;

/// `from` & `to` query parameters bounding a request, both formatted as `YYYY-MM-DD`
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RangeParams {
    /// First day of the range, inclusive
    pub from: Option<String>,
    /// Last day of the range, inclusive
    pub to: Option<String>,
}

impl RangeParams {
    /// Validates the parameters into a [`DateRange`]
    ///
    /// # Returns
    /// - `Err(RequestError::MissingRange)` - Either bound is missing or empty
    /// - `Err(RequestError::InvalidDate)` - A bound is not a `YYYY-MM-DD` date
    /// - `Err(RequestError::InvertedRange)` - `from` is after `to`
    /// - `Err(RequestError::RangeTooLong)` - The range spans more than [`MAX_RANGE_DAYS`]
    pub fn parse(&self) -> Result<DateRange, RequestError> {
        let (Some(from), Some(to)) = (non_empty(&self.from), non_empty(&self.to)) else {
            return Err(RequestError::MissingRange);
        };

        let from_day = parse_day("from", from)?;
        let to_day = parse_day("to", to)?;

        let range = DateRange::new(from_day, to_day).ok_or_else(|| RequestError::InvertedRange {
            from: from.to_string(),
            to: to.to_string(),
        })?;

        let days = range.days();
        if days > MAX_RANGE_DAYS {
            return Err(RequestError::RangeTooLong {
                days,
                max: MAX_RANGE_DAYS,
            });
        }

        Ok(range)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_day(param: &'static str, value: &str) -> Result<NaiveDate, RequestError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| RequestError::InvalidDate {
        param,
        value: value.to_string(),
    })
}
