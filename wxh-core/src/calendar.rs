//! X-axis labels and day display formats.

use crate::date_range::format_date;
use crate::year_stack::BUCKET_LEN;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Non-leap year whose days label the stacked axis.
pub const REFERENCE_YEAR: i32 = 2001;

/// How each day tick is printed on the time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayFormat {
    /// Full calendar date, for the plain series.
    FullDate,
    /// Month and day only, for the stacked overlay.
    MonthDay,
}

impl DayFormat {
    /// Display pattern in date-fns tokens, as consumed by the chart adapter.
    pub fn pattern(self) -> &'static str {
        match self {
            DayFormat::FullDate => "yyyy-MM-dd",
            DayFormat::MonthDay => "MMM d",
        }
    }
}

/// The 365 days of [`REFERENCE_YEAR`] as `YYYY-MM-DD`, one per bucket slot.
pub fn stacked_labels() -> Vec<String> {
    let Some(jan1) = NaiveDate::from_ymd_opt(REFERENCE_YEAR, 1, 1) else {
        return Vec::new();
    };
    (0..BUCKET_LEN as i64)
        .map(|offset| format_date(&(jan1 + Duration::days(offset))))
        .collect()
}
