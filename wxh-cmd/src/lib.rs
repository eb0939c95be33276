//! Command implementations for the temperature history CLI.
//!
//! `search` resolves a place name the way the address box does; `series`
//! fetches a daily TN/TX series and prints a summary of every dataset the
//! chart would draw for the given display filters.

use clap::{Args, Subcommand};
use wxh_core::config::ServiceConfig;

pub mod search;
pub mod series;

/// Endpoint overrides shared by all subcommands.
#[derive(Args, Debug, Clone)]
pub struct ServiceArgs {
    /// Base URL of the geocoding service
    #[arg(long)]
    pub geocoding_url: Option<String>,

    /// Base URL of the historical timeseries service
    #[arg(long)]
    pub timeseries_url: Option<String>,

    /// Dataset id of the timeseries service
    #[arg(long)]
    pub dataset_id: Option<String>,
}

impl ServiceArgs {
    pub fn to_config(&self) -> ServiceConfig {
        let mut config = ServiceConfig::default();
        if let Some(url) = &self.geocoding_url {
            config.geocoding_url = url.clone();
        }
        if let Some(url) = &self.timeseries_url {
            config.timeseries_url = url.clone();
        }
        if let Some(id) = &self.dataset_id {
            config.dataset_id = id.clone();
        }
        config
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Look up a place name and print up to three matches
    Search {
        /// Address, town or landmark
        query: String,

        #[command(flatten)]
        service: ServiceArgs,
    },

    /// Fetch daily min/max temperature for a location and summarize the chart datasets
    Series {
        /// Latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// First day (YYYY-MM-DD); defaults to two years before today
        #[arg(long)]
        start: Option<String>,

        /// Last day (YYYY-MM-DD); defaults to today
        #[arg(long)]
        end: Option<String>,

        /// One dataset per calendar year on a shared day-of-year axis
        #[arg(long)]
        stack_years: bool,

        /// With --stack-years, keep only the first and last year
        #[arg(long)]
        first_last: bool,

        /// Leave out the minimum temperature (TN)
        #[arg(long)]
        no_min: bool,

        /// Leave out the maximum temperature (TX)
        #[arg(long)]
        no_max: bool,

        #[command(flatten)]
        service: ServiceArgs,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Search { query, service } => {
            search::run_search(&service.to_config(), &query).await
        }
        Command::Series {
            lat,
            lon,
            start,
            end,
            stack_years,
            first_last,
            no_min,
            no_max,
            service,
        } => {
            let options = series::SeriesOptions {
                start,
                end,
                stack_years,
                first_last,
                no_min,
                no_max,
            };
            series::run_series(&service.to_config(), lat, lon, &options).await
        }
    }
}
