//! Place-name search against a Nominatim-compatible `/search` endpoint.

use crate::coordinate::Coordinate;
use crate::error::{Result, ServiceError};
use serde::{Deserialize, Serialize};

/// The UI offers at most this many matches.
pub const MAX_RESULTS: usize = 3;

/// One match of a place-name search. Coordinates arrive as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodingResult {
    pub lat: String,
    pub lon: String,
    pub display_name: String,
}

impl GeocodingResult {
    /// Parse the textual lat/lon into a coordinate.
    pub fn coordinate(&self) -> Result<Coordinate> {
        let parse = |s: &str| {
            s.trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| {
                    ServiceError::InvalidCoordinate(format!(
                        "{:?},{:?} for {}",
                        self.lat, self.lon, self.display_name
                    ))
                })
        };
        Ok(Coordinate::new(parse(&self.lat)?, parse(&self.lon)?))
    }
}

/// Build the search URL for `query` under `base_url`.
pub fn search_url(base_url: &str, query: &str) -> String {
    format!(
        "{}/search?q={}&format=json",
        base_url.trim_end_matches('/'),
        urlencoding::encode(query.trim())
    )
}

/// Parse a search response body, keeping the first [`MAX_RESULTS`] matches.
pub fn parse_results(body: &str) -> Result<Vec<GeocodingResult>> {
    let mut results: Vec<GeocodingResult> = serde_json::from_str(body)?;
    results.truncate(MAX_RESULTS);
    Ok(results)
}
