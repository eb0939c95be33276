//! Daily minimum/maximum temperature series and the historical timeseries service.
//!
//! The service answers a geojson-like document:
//!
//! ```json
//! {
//!   "timestamps": ["2020-01-01T00:00:00Z", ...],
//!   "features": [{"properties": {"parameters": {
//!       "TN": {"data": [1.2, null, ...]},
//!       "TX": {"data": [6.8, 7.1, ...]}
//!   }}}]
//! }
//! ```
//!
//! The response is validated before use: both parameters must be present and
//! parallel to `timestamps`, and every timestamp must carry a date.

use crate::coordinate::Coordinate;
use crate::date_range::{service_timestamp, DateRange};
use crate::error::{Result, ServiceError};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;

/// Parameter code for daily minimum temperature.
pub const MIN_TEMPERATURE: &str = "TN";
/// Parameter code for daily maximum temperature.
pub const MAX_TEMPERATURE: &str = "TX";

/// A timestamp as reported by the service, with its calendar date in the
/// service's own offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    pub raw: String,
    pub date: NaiveDate,
}

impl Timestamp {
    /// Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM:SS[.f]` and bare `YYYY-MM-DD`.
    pub fn parse(raw: &str) -> Option<Timestamp> {
        let text = raw.trim();
        let date = DateTime::parse_from_rfc3339(text)
            .map(|dt| dt.date_naive())
            .or_else(|_| {
                NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date())
            })
            .or_else(|_| NaiveDate::parse_from_str(text, "%Y-%m-%d"))
            .ok()?;
        Some(Timestamp {
            raw: raw.to_string(),
            date,
        })
    }
}

/// A daily series of minimum and maximum temperature, parallel-indexed.
///
/// `None` marks a day the service reported without a value. It stays a gap
/// through every transform.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimeSeries {
    pub timestamps: Vec<Timestamp>,
    pub min: Vec<Option<f64>>,
    pub max: Vec<Option<f64>>,
}

impl TimeSeries {
    pub fn new(
        timestamps: Vec<Timestamp>,
        min: Vec<Option<f64>>,
        max: Vec<Option<f64>>,
    ) -> Result<Self> {
        if min.len() != timestamps.len() || max.len() != timestamps.len() {
            return Err(ServiceError::Malformed(format!(
                "{} timestamps but {} {} and {} {} values",
                timestamps.len(),
                min.len(),
                MIN_TEMPERATURE,
                max.len(),
                MAX_TEMPERATURE
            )));
        }
        Ok(Self {
            timestamps,
            min,
            max,
        })
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// The raw timestamps, as used for unstacked chart labels.
    pub fn labels(&self) -> Vec<String> {
        self.timestamps.iter().map(|t| t.raw.clone()).collect()
    }

    /// Parse and validate a geojson response body.
    pub fn from_geojson(body: &str) -> Result<Self> {
        let response: GeoJsonResponse = serde_json::from_str(body)?;
        let mut features = response.features.into_iter();
        let mut parameters = features
            .next()
            .ok_or_else(|| ServiceError::Malformed("response has no features".into()))?
            .properties
            .parameters;
        let mut take = |code: &str| {
            parameters
                .remove(code)
                .map(|p| p.data)
                .ok_or_else(|| ServiceError::Malformed(format!("parameter {} missing", code)))
        };
        let min = take(MIN_TEMPERATURE)?;
        let max = take(MAX_TEMPERATURE)?;

        let timestamps = response
            .timestamps
            .iter()
            .map(|raw| {
                Timestamp::parse(raw)
                    .ok_or_else(|| ServiceError::Malformed(format!("bad timestamp {:?}", raw)))
            })
            .collect::<Result<Vec<_>>>()?;

        TimeSeries::new(timestamps, min, max)
    }
}

#[derive(Debug, Deserialize)]
struct GeoJsonResponse {
    timestamps: Vec<String>,
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    properties: FeatureProperties,
}

#[derive(Debug, Deserialize)]
struct FeatureProperties {
    parameters: std::collections::HashMap<String, ParameterData>,
}

#[derive(Debug, Deserialize)]
struct ParameterData {
    data: Vec<Option<f64>>,
}

/// A fully resolved fetch: where and which days.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetchRequest {
    pub coordinate: Coordinate,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl FetchRequest {
    /// `None` when the range is incomplete or invalid; no request should fire.
    pub fn from_inputs(coordinate: Coordinate, range: &DateRange) -> Option<Self> {
        let (start, end) = range.resolve()?;
        Some(Self {
            coordinate,
            start,
            end,
        })
    }

    /// Build the request URL under `base_url` for `dataset_id`.
    pub fn url(&self, base_url: &str, dataset_id: &str) -> String {
        format!(
            "{}/v1/timeseries/historical/{}?parameters={}&parameters={}&output_format=geojson&start={}&end={}&lat_lon={}",
            base_url.trim_end_matches('/'),
            dataset_id,
            MIN_TEMPERATURE,
            MAX_TEMPERATURE,
            service_timestamp(&self.start),
            service_timestamp(&self.end),
            self.coordinate.lat_lon_param()
        )
    }
}
