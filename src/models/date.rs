use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::error::{Result, WmError};

/// Date-format patterns tried in order; the first successful parse wins.
///
/// Ambiguous numeric dates (e.g. "3/4/2024") are resolved by this priority
/// order, so month/day/year beats day/month/year.
const DATE_FORMATS: &[&str] = &[
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%b %d %Y",
    "%b %d, %Y",
    "%d %b %Y",
    "%d %b, %Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d-%b-%Y",
    "%B %d %Y",
    "%B %d, %Y",
    "%d %B %Y",
    "%d %B, %Y",
];

/// Calendar date of a single day's log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl LogDate {
    /// Resolve a free-form date string.
    ///
    /// Input is trimmed and lowercased. An empty string and "today" map to
    /// the current date, "yesterday" and "tomorrow" to the adjacent days.
    /// Anything else is tried against the fixed format table.
    pub fn resolve(input: &str) -> Result<Self> {
        Self::resolve_from(input, Local::now().date_naive())
    }

    fn resolve_from(input: &str, today: NaiveDate) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "" | "today" => return Ok(Self::from_naive(today)),
            "yesterday" => return Ok(Self::from_naive(today - Duration::days(1))),
            "tomorrow" => return Ok(Self::from_naive(today + Duration::days(1))),
            _ => {}
        }

        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(&normalized, format) {
                return Ok(Self::from_naive(date));
            }
        }

        Err(WmError::DateParse(input.to_string()))
    }

    fn from_naive(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}
