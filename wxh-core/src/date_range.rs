//! The inclusive date range the user is looking at.
//!
//! The range keeps the raw text of the two date inputs so an empty field can
//! be told apart from a filled one: an empty field means the form is still
//! being edited and no fetch should fire.

use chrono::{Datelike, Local, NaiveDate};
use log::warn;
use serde::{Deserialize, Serialize};

/// Date format of `<input type="date">` values and CLI arguments: "YYYY-MM-DD"
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date format of the timeseries `start`/`end` parameters (UTC midnight).
pub const SERVICE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT00:00:00.000Z";

/// Number of whole years before today the default range starts at.
pub const DEFAULT_YEARS_BACK: i32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Jan 1 two years before `today`, through `today`.
    pub fn default_for(today: NaiveDate) -> Self {
        let start = NaiveDate::from_ymd_opt(today.year() - DEFAULT_YEARS_BACK, 1, 1)
            .unwrap_or(today);
        Self {
            start: format_date(&start),
            end: format_date(&today),
        }
    }

    /// True when either field is empty.
    pub fn is_incomplete(&self) -> bool {
        self.start.trim().is_empty() || self.end.trim().is_empty()
    }

    /// Parse both endpoints.
    ///
    /// Returns `None` for an incomplete range, an unparseable field, or a
    /// start after the end. Only the last two are logged.
    pub fn resolve(&self) -> Option<(NaiveDate, NaiveDate)> {
        if self.is_incomplete() {
            return None;
        }
        let start = match parse_date(&self.start) {
            Ok(d) => d,
            Err(e) => {
                warn!("Ignoring start date {:?}: {}", self.start, e);
                return None;
            }
        };
        let end = match parse_date(&self.end) {
            Ok(d) => d,
            Err(e) => {
                warn!("Ignoring end date {:?}: {}", self.end, e);
                return None;
            }
        };
        if start > end {
            warn!("Start date {} is after end date {}", start, end);
            return None;
        }
        Some((start, end))
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self::default_for(Local::now().date_naive())
    }
}

/// Format a NaiveDate as "YYYY-MM-DD"
pub fn format_date(date: &NaiveDate) -> String {
    date.format(INPUT_DATE_FORMAT).to_string()
}

/// Parse a date string in "YYYY-MM-DD" format
pub fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s.trim(), INPUT_DATE_FORMAT)
}

/// Format a date as the UTC midnight timestamp the timeseries service expects.
pub fn service_timestamp(date: &NaiveDate) -> String {
    date.format(SERVICE_TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_starts_two_years_back_on_jan_1() {
        let range = DateRange::default_for(ymd(2024, 7, 15));
        assert_eq!(range.start, "2022-01-01");
        assert_eq!(range.end, "2024-07-15");
    }

    #[test]
    fn empty_field_is_incomplete() {
        assert!(DateRange::new("", "2021-12-31").is_incomplete());
        assert!(DateRange::new("2020-01-01", "  ").is_incomplete());
        assert!(!DateRange::new("2020-01-01", "2021-12-31").is_incomplete());
    }

    #[test]
    fn resolve_parses_both_ends() {
        let range = DateRange::new("2020-01-01", "2021-12-31");
        assert_eq!(range.resolve(), Some((ymd(2020, 1, 1), ymd(2021, 12, 31))));
    }

    #[test]
    fn resolve_rejects_incomplete_garbage_and_reversed() {
        assert_eq!(DateRange::new("", "2021-12-31").resolve(), None);
        assert_eq!(DateRange::new("2020-13-01", "2021-12-31").resolve(), None);
        assert_eq!(DateRange::new("2022-01-01", "2021-12-31").resolve(), None);
    }

    #[test]
    fn service_timestamp_is_utc_midnight() {
        assert_eq!(service_timestamp(&ymd(2020, 3, 9)), "2020-03-09T00:00:00.000Z");
    }
}
