//! Chart projection: turn a series and the display filters into the labels
//! and datasets the chart draws.

use crate::calendar::{stacked_labels, DayFormat};
use crate::timeseries::TimeSeries;
use crate::year_stack::{first_and_last, stack_years};
use serde::{Deserialize, Serialize};

/// Line width of the most recent year in the stacked view.
pub const EMPHASIS_BORDER_WIDTH: u32 = 2;
/// Line width applied to datasets that leave it unset.
pub const DEFAULT_BORDER_WIDTH: u32 = 1;

/// Which of the two measurements a dataset shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measurement {
    Min,
    Max,
}

impl Measurement {
    /// Base hue: blue for minimum, red for maximum.
    pub fn hue(self) -> u16 {
        match self {
            Measurement::Min => 210,
            Measurement::Max => 0,
        }
    }

    fn short_name(self) -> &'static str {
        match self {
            Measurement::Min => "Min",
            Measurement::Max => "Max",
        }
    }

    fn long_name(self) -> &'static str {
        match self {
            Measurement::Min => "Minimum temperature (TN)",
            Measurement::Max => "Maximum temperature (TX)",
        }
    }

    fn values(self, series: &TimeSeries) -> Vec<Option<f64>> {
        match self {
            Measurement::Min => series.min.clone(),
            Measurement::Max => series.max.clone(),
        }
    }
}

/// The four checkboxes under the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFilters {
    pub stack_years: bool,
    pub first_last_only: bool,
    pub show_min: bool,
    pub show_max: bool,
}

impl Default for DisplayFilters {
    fn default() -> Self {
        Self {
            stack_years: false,
            first_last_only: false,
            show_min: true,
            show_max: true,
        }
    }
}

/// Names one of the [`DisplayFilters`] flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayFilter {
    StackYears,
    FirstLastOnly,
    ShowMin,
    ShowMax,
}

impl DisplayFilters {
    pub fn set(&mut self, filter: DisplayFilter, enabled: bool) {
        match filter {
            DisplayFilter::StackYears => self.stack_years = enabled,
            DisplayFilter::FirstLastOnly => self.first_last_only = enabled,
            DisplayFilter::ShowMin => self.show_min = enabled,
            DisplayFilter::ShowMax => self.show_max = enabled,
        }
    }

    fn measurements(&self) -> Vec<Measurement> {
        let mut enabled = Vec::with_capacity(2);
        if self.show_min {
            enabled.push(Measurement::Min);
        }
        if self.show_max {
            enabled.push(Measurement::Max);
        }
        enabled
    }
}

/// One line on the chart, serialized in the chart library's field names.
/// `None` values serialize as `null` and are drawn as gaps.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<Option<f64>>,
    pub border_color: String,
    pub background_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<u32>,
}

impl ChartDataset {
    /// Force line-only rendering and fill in the default line width.
    pub fn normalize(&mut self) {
        self.point_radius = Some(0);
        self.border_width.get_or_insert(DEFAULT_BORDER_WIDTH);
    }
}

/// Everything a redraw needs: x labels, datasets and the day format.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFrame {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
    pub day_format: DayFormat,
}

impl ChartFrame {
    /// Build a frame with every dataset normalized.
    pub fn new(labels: Vec<String>, mut datasets: Vec<ChartDataset>, day_format: DayFormat) -> Self {
        datasets.iter_mut().for_each(ChartDataset::normalize);
        Self {
            labels,
            datasets,
            day_format,
        }
    }
}

/// Opacity of the year at ascending position `index` of `count` years.
///
/// Fades linearly from 1 toward a floor of 0.4 for older years; the most
/// recent year is always fully opaque.
pub fn year_opacity(index: usize, count: usize) -> f64 {
    if count == 0 || index + 1 >= count {
        return 1.0;
    }
    let n = count as f64;
    let i = index as f64;
    (1.0 - (1.0 / n) * (n - i)) * 0.6 + 0.4
}

fn year_color(measurement: Measurement, opacity: f64, most_recent: bool) -> String {
    if most_recent {
        format!("hsla({}, 100%, 40%, 1)", measurement.hue())
    } else {
        format!("hsla({}, 60%, 60%, {:.3})", measurement.hue(), opacity)
    }
}

fn plain_dataset(measurement: Measurement, series: &TimeSeries) -> ChartDataset {
    let color = format!("hsla({}, 80%, 50%, 1)", measurement.hue());
    ChartDataset {
        label: measurement.long_name().to_string(),
        data: measurement.values(series),
        border_color: color.clone(),
        background_color: color,
        border_width: None,
        point_radius: None,
    }
}

fn year_dataset(
    measurement: Measurement,
    year: i32,
    data: Vec<Option<f64>>,
    index: usize,
    count: usize,
) -> ChartDataset {
    let most_recent = index + 1 == count;
    let color = year_color(measurement, year_opacity(index, count), most_recent);
    ChartDataset {
        label: format!("{} {}", measurement.short_name(), year),
        data,
        border_color: color.clone(),
        background_color: color,
        border_width: most_recent.then_some(EMPHASIS_BORDER_WIDTH),
        point_radius: None,
    }
}

/// Project `series` through `filters` into a chart frame.
///
/// Unstacked: one dataset per enabled measurement over the raw timestamps.
/// Stacked: one dataset per retained year and enabled measurement, all
/// minimum datasets first, each group oldest year first, over the 365-day
/// reference calendar.
pub fn project(series: &TimeSeries, filters: &DisplayFilters) -> ChartFrame {
    let measurements = filters.measurements();
    if !filters.stack_years {
        let datasets = measurements
            .into_iter()
            .map(|m| plain_dataset(m, series))
            .collect();
        return ChartFrame::new(series.labels(), datasets, DayFormat::FullDate);
    }

    let mut buckets = stack_years(series);
    if filters.first_last_only {
        buckets = first_and_last(buckets);
    }
    let count = buckets.len();
    let mut datasets = Vec::with_capacity(count * measurements.len());
    for measurement in measurements {
        for (index, bucket) in buckets.iter().enumerate() {
            let data = match measurement {
                Measurement::Min => bucket.min.clone(),
                Measurement::Max => bucket.max.clone(),
            };
            datasets.push(year_dataset(measurement, bucket.year, data, index, count));
        }
    }
    ChartFrame::new(stacked_labels(), datasets, DayFormat::MonthDay)
}

/// Per-dataset figures for a terminal summary.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub label: String,
    pub slots: usize,
    pub present: usize,
    pub lowest: Option<f64>,
    pub highest: Option<f64>,
}

impl From<&ChartDataset> for DatasetSummary {
    fn from(dataset: &ChartDataset) -> Self {
        let values = dataset.data.iter().flatten().copied();
        Self {
            label: dataset.label.clone(),
            slots: dataset.data.len(),
            present: dataset.data.iter().flatten().count(),
            lowest: values.clone().reduce(f64::min),
            highest: values.reduce(f64::max),
        }
    }
}
