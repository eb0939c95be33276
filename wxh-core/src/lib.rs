//! Core types and transforms for the daily temperature history viewer.
//!
//! This crate provides:
//! - `coordinate`, `date_range`: the location and period the user is looking at
//! - `geocoding`, `timeseries`: service URL builders and response parsing
//! - `year_stack`, `calendar`, `dataset`: the year-stacking transform and chart projection
//! - `chart`: the create-once / update-in-place chart registry
//! - `session`: the reducer driving the single-page app
//! - `client` (feature `api`): native `reqwest` client for the CLI

pub mod calendar;
pub mod chart;
pub mod config;
pub mod coordinate;
pub mod dataset;
pub mod date_range;
pub mod error;
pub mod geocoding;
pub mod session;
pub mod timeseries;
pub mod year_stack;

#[cfg(feature = "api")]
pub mod client;

pub use coordinate::Coordinate;
pub use date_range::DateRange;
pub use error::{ServiceError, GENERIC_ERROR_MESSAGE};
pub use timeseries::TimeSeries;
