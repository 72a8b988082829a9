use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Source identifier which may be stored as an integer or as text
///
/// Record ids and consecutive numbers are only unique within the region they
/// come from, and each regional schema picks its own column type for them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum Identifier {
    Number(i64),
    Text(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}", value),
            Self::Text(value) => write!(f, "{}", value),
        }
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Records which are identified by their id within the project they originate from
pub trait ProjectScoped {
    fn id(&self) -> &Identifier;
    fn project(&self) -> &str;
}

/// Records filed under one calendar day
pub trait Dated {
    /// Calendar day the record is filed under, `None` if its date can't be read
    fn day(&self) -> Option<NaiveDate>;
}

/// Calendar day of a `YYYY-MM-DD` date, anything after the day is ignored
pub fn calendar_day(date: &str) -> Option<NaiveDate> {
    let day = date.get(..10)?;

    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}
