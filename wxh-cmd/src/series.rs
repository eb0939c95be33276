//! `series` subcommand.

use anyhow::{bail, Context};
use chrono::Local;
use log::info;
use wxh_core::client::WeatherClient;
use wxh_core::config::ServiceConfig;
use wxh_core::dataset::{project, DatasetSummary, DisplayFilters};
use wxh_core::timeseries::FetchRequest;
use wxh_core::{Coordinate, DateRange};

#[derive(Debug, Clone, Default)]
pub struct SeriesOptions {
    pub start: Option<String>,
    pub end: Option<String>,
    pub stack_years: bool,
    pub first_last: bool,
    pub no_min: bool,
    pub no_max: bool,
}

impl SeriesOptions {
    /// Missing ends fall back to the same default range the browser starts with.
    pub fn date_range(&self) -> DateRange {
        let default = DateRange::default_for(Local::now().date_naive());
        DateRange::new(
            self.start.clone().unwrap_or(default.start),
            self.end.clone().unwrap_or(default.end),
        )
    }

    pub fn filters(&self) -> DisplayFilters {
        DisplayFilters {
            stack_years: self.stack_years,
            first_last_only: self.first_last,
            show_min: !self.no_min,
            show_max: !self.no_max,
        }
    }
}

pub async fn run_series(
    config: &ServiceConfig,
    lat: f64,
    lon: f64,
    options: &SeriesOptions,
) -> anyhow::Result<()> {
    let coordinate = Coordinate::new(lat, lon);
    if !coordinate.is_finite() {
        bail!("latitude and longitude must be finite numbers");
    }
    let range = options.date_range();
    let Some(request) = FetchRequest::from_inputs(coordinate, &range) else {
        bail!(
            "invalid date range {:?} to {:?} (expected YYYY-MM-DD, start not after end)",
            range.start,
            range.end
        );
    };

    let client = WeatherClient::new(config.clone())?;
    let series = client
        .fetch_series(&request)
        .await
        .with_context(|| format!("fetching series at {}", coordinate))?;
    info!("Fetched {} day(s) at {}", series.len(), coordinate);

    let frame = project(&series, &options.filters());
    println!(
        "{} from {} to {}: {} day(s), {} dataset(s)",
        coordinate,
        range.start,
        range.end,
        series.len(),
        frame.datasets.len()
    );
    for dataset in &frame.datasets {
        println!("{}", format_summary(&DatasetSummary::from(dataset)));
    }
    Ok(())
}

fn format_value(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.1}", v))
}

pub fn format_summary(summary: &DatasetSummary) -> String {
    format!(
        "{:<32} {:>4}/{:<4} low {:>6}  high {:>6}",
        summary.label,
        summary.present,
        summary.slots,
        format_value(summary.lowest),
        format_value(summary.highest)
    )
}
