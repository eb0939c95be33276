//! Year stacking: align every calendar year of a series on a shared
//! day-of-year axis so years can be overlaid.
//!
//! Each year gets two fixed 365-slot buckets (min and max) indexed by the
//! 0-based day-of-year. Slots without an observation stay `None`. Day 366 of
//! a leap year has no slot and is dropped.

use crate::timeseries::TimeSeries;
use chrono::Datelike;
use std::collections::BTreeMap;

/// Slots per yearly bucket.
pub const BUCKET_LEN: usize = 365;

/// One calendar year of min/max values aligned by day-of-year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearlyBucket {
    pub year: i32,
    pub min: Vec<Option<f64>>,
    pub max: Vec<Option<f64>>,
}

impl YearlyBucket {
    fn empty(year: i32) -> Self {
        Self {
            year,
            min: vec![None; BUCKET_LEN],
            max: vec![None; BUCKET_LEN],
        }
    }
}

/// 0-based bucket slot for a 1-based day-of-year, `None` past the last slot.
pub fn bucket_index(ordinal: u32) -> Option<usize> {
    let index = ordinal.checked_sub(1)? as usize;
    (index < BUCKET_LEN).then_some(index)
}

/// Partition `series` by calendar year, oldest year first.
pub fn stack_years(series: &TimeSeries) -> Vec<YearlyBucket> {
    let mut years: BTreeMap<i32, YearlyBucket> = BTreeMap::new();
    for (i, timestamp) in series.timestamps.iter().enumerate() {
        let year = timestamp.date.year();
        let bucket = years
            .entry(year)
            .or_insert_with(|| YearlyBucket::empty(year));
        let Some(slot) = bucket_index(timestamp.date.ordinal()) else {
            continue;
        };
        bucket.min[slot] = series.min.get(i).copied().flatten();
        bucket.max[slot] = series.max.get(i).copied().flatten();
    }
    years.into_values().collect()
}

/// Keep only the oldest and newest bucket. A single year is kept once.
pub fn first_and_last(mut buckets: Vec<YearlyBucket>) -> Vec<YearlyBucket> {
    if buckets.len() > 2 {
        let last = buckets.pop();
        buckets.truncate(1);
        buckets.extend(last);
    }
    buckets
}
