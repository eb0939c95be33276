//! Service endpoints and map defaults.
//!
//! A static WASM bundle has no runtime environment, so the browser app bakes
//! overrides in at compile time with [`ServiceConfig::from_build_env`]. The
//! CLI exposes the same fields as flags.

use crate::coordinate::Coordinate;
use serde::{Deserialize, Serialize};

/// Nominatim-compatible search service (`/search?q=...`).
pub const DEFAULT_GEOCODING_URL: &str = "https://nominatim.openstreetmap.org";

/// Base URL of the historical timeseries service.
/// Override with `WXH_TIMESERIES_URL` at build time.
pub const DEFAULT_TIMESERIES_URL: &str = "https://weather.example.com";

/// Dataset id in `/v1/timeseries/historical/<dataset-id>`.
pub const DEFAULT_DATASET_ID: &str = "daily-in-situ-observations";

pub const DEFAULT_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Where the map starts and which location is loaded first (De Bilt, NL).
pub const DEFAULT_LATITUDE: f64 = 52.1009;
pub const DEFAULT_LONGITUDE: f64 = 5.1762;
pub const DEFAULT_ZOOM: u8 = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub geocoding_url: String,
    pub timeseries_url: String,
    pub dataset_id: String,
    pub tile_url: String,
    pub tile_attribution: String,
    pub initial_coordinate: Coordinate,
    pub initial_zoom: u8,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            geocoding_url: DEFAULT_GEOCODING_URL.to_string(),
            timeseries_url: DEFAULT_TIMESERIES_URL.to_string(),
            dataset_id: DEFAULT_DATASET_ID.to_string(),
            tile_url: DEFAULT_TILE_URL.to_string(),
            tile_attribution: DEFAULT_TILE_ATTRIBUTION.to_string(),
            initial_coordinate: Coordinate::new(DEFAULT_LATITUDE, DEFAULT_LONGITUDE),
            initial_zoom: DEFAULT_ZOOM,
        }
    }
}

impl ServiceConfig {
    /// Defaults, overridden by any `WXH_*` variable set when the crate was compiled.
    pub fn from_build_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = option_env!("WXH_GEOCODING_URL") {
            config.geocoding_url = url.to_string();
        }
        if let Some(url) = option_env!("WXH_TIMESERIES_URL") {
            config.timeseries_url = url.to_string();
        }
        if let Some(id) = option_env!("WXH_DATASET_ID") {
            config.dataset_id = id.to_string();
        }
        if let Some(url) = option_env!("WXH_TILE_URL") {
            config.tile_url = url.to_string();
        }
        if let Some(attribution) = option_env!("WXH_TILE_ATTRIBUTION") {
            config.tile_attribution = attribution.to_string();
        }
        config
    }
}
