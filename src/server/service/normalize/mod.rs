//! Row normalizer.
//!
//! Maps each region's raw rows onto the canonical [`Novedad`] and [`Ausencia`]
//! shapes. Missing optional fields are filled with defaults; only rows missing
//! an identity field (id or mandatory dates) are rejected.
//!
//! [`Novedad`]: crate::model::novedad::Novedad
//! [`Ausencia`]: crate::model::ausencia::Ausencia

pub mod ausencia;
pub mod image;
pub mod novedad;

use chrono::NaiveDate;
use dioxus_logger::tracing;

use crate::server::{data::row::RawDate, error::normalize::NormalizeError};

/// Raw rows which can be mapped onto a canonical record
pub trait Normalize: Sized {
    type Record;

    /// Maps the row onto its canonical record, stamping the region's project label
    fn normalize(self, project: &str) -> Result<Self::Record, NormalizeError>;
}

/// Normalizes every row of one region, skipping rows that can't be identified
///
/// A rejected row never prevents the remaining rows from being normalized.
pub fn normalize_rows<R>(rows: Vec<R>, project: &str) -> Vec<R::Record>
where
    R: Normalize,
{
    let total = rows.len();

    let records: Vec<R::Record> = rows
        .into_iter()
        .filter_map(|row| match row.normalize(project) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("Skipping {} row: {}", project, e);
                None
            }
        })
        .collect();

    if records.len() < total {
        tracing::warn!(
            "Normalized {} of {} rows from {}",
            records.len(),
            total,
            project
        );
    }

    records
}

/// Formats a date column as `YYYY-MM-DD`, text is passed through unchanged
pub fn format_date(date: &RawDate) -> String {
    match date {
        RawDate::Date(date) => date.format("%Y-%m-%d").to_string(),
        RawDate::DateTime(datetime) => datetime.date().format("%Y-%m-%d").to_string(),
        RawDate::Text(text) => text.clone(),
    }
}

/// Calendar day of a date column, time of day discarded
pub fn parse_day(date: &RawDate, field: &'static str) -> Result<NaiveDate, NormalizeError> {
    match date {
        RawDate::Date(date) => Ok(*date),
        RawDate::DateTime(datetime) => Ok(datetime.date()),
        RawDate::Text(text) => text
            .get(..10)
            .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
            .ok_or_else(|| NormalizeError::InvalidDate {
                field,
                value: text.clone(),
            }),
    }
}

/// Text column or the provided default, never null
pub fn text_or(value: Option<String>, default: &str) -> String {
    value.unwrap_or_else(|| default.to_string())
}

/// Text column or the provided default when null or blank
pub fn non_blank_or(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn formats_temporal_values_without_time() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let datetime = day.and_hms_opt(23, 59, 59).unwrap();

        assert_eq!(format_date(&RawDate::Date(day)), "2024-03-09");
        assert_eq!(format_date(&RawDate::DateTime(datetime)), "2024-03-09");
    }

    #[test]
    fn passes_text_dates_through() {
        let text = RawDate::Text("2024-03-09T05:00:00.000Z".to_string());

        assert_eq!(format_date(&text), "2024-03-09T05:00:00.000Z");
        assert_eq!(
            parse_day(&text, "fecha"),
            Ok(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap())
        );
    }

    #[test]
    fn rejects_text_that_is_not_a_date() {
        let text = RawDate::Text("ayer".to_string());

        assert!(matches!(
            parse_day(&text, "fecha"),
            Err(NormalizeError::InvalidDate { field: "fecha", .. })
        ));
    }

    #[test]
    fn blank_values_fall_back_to_default() {
        assert_eq!(non_blank_or(Some("  ".to_string()), "N/A"), "N/A");
        assert_eq!(non_blank_or(None, "N/A"), "N/A");
        assert_eq!(non_blank_or(Some("Portería".to_string()), "N/A"), "Portería");
        assert_eq!(text_or(None, ""), "");
    }
}
