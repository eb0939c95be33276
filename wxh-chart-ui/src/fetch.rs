//! Browser `fetch()` for the geocoding and timeseries services.

use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;
use wxh_core::config::ServiceConfig;
use wxh_core::error::{Result, ServiceError};
use wxh_core::geocoding::{parse_results, search_url, GeocodingResult};
use wxh_core::timeseries::FetchRequest;
use wxh_core::TimeSeries;

fn network_error(e: JsValue) -> ServiceError {
    ServiceError::Network(format!("{:?}", e))
}

/// GET `url` and return the body of a successful response.
pub async fn get_text(url: &str) -> Result<String> {
    debug!("GET {}", url);
    let window = web_sys::window().ok_or_else(|| ServiceError::Network("no window".into()))?;
    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(network_error)?
        .dyn_into()
        .map_err(network_error)?;
    if !response.ok() {
        return Err(ServiceError::Status(response.status()));
    }
    let body = JsFuture::from(response.text().map_err(network_error)?)
        .await
        .map_err(network_error)?;
    body.as_string()
        .ok_or_else(|| ServiceError::Malformed("response body is not text".into()))
}

/// Search for a place name; at most three matches.
pub async fn search(config: &ServiceConfig, query: &str) -> Result<Vec<GeocodingResult>> {
    let body = get_text(&search_url(&config.geocoding_url, query)).await?;
    parse_results(&body)
}

/// Fetch daily min/max temperature for one location and date range.
pub async fn fetch_series(config: &ServiceConfig, request: &FetchRequest) -> Result<TimeSeries> {
    let body = get_text(&request.url(&config.timeseries_url, &config.dataset_id)).await?;
    TimeSeries::from_geojson(&body)
}
