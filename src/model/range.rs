use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Inclusive calendar date range used to filter records by day
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// Creates a new range, returns `None` if `from` is after `to`
    pub fn new(from: NaiveDate, to: NaiveDate) -> Option<Self> {
        if from > to {
            return None;
        }

        Some(Self { from, to })
    }

    /// Whether the provided day falls within the range, both ends included
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.from <= day && day <= self.to
    }

    /// Number of calendar days covered by the range, both ends included
    pub fn days(&self) -> u64 {
        (self.to - self.from).num_days() as u64 + 1
    }

    /// Every calendar day of the range in ascending order
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..self.days()).filter_map(move |offset| self.from.checked_add_days(Days::new(offset)))
    }
}
